//! Output formatting for human and JSON modes
//!
//! The filter result is first turned into a typed view-model ([`Listing`])
//! and only then rendered. Building the view-model is where an unsupported
//! language tag surfaces: that is a configuration defect and fails the
//! command instead of silently dropping the badge.

use colored::Colorize;
use serde::Serialize;

use crate::models::{Developer, Language, UnknownLanguage};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// View-model for the rendered card listing
#[derive(Debug, Serialize)]
pub struct Listing {
    /// Number of matching profiles
    pub count: usize,
    /// One card per visible profile, in filter order
    pub cards: Vec<Card>,
}

/// One rendered profile card
#[derive(Debug, Serialize)]
pub struct Card {
    /// Display name
    pub name: String,
    /// Avatar URI
    pub picture: String,
    /// One badge per language on the profile
    pub languages: Vec<Badge>,
}

/// Badge for one language tag on a card
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Badge {
    /// Canonical tag identifier
    pub tag: &'static str,
    /// Display label
    pub label: &'static str,
    /// Terminal icon
    pub icon: &'static str,
}

impl Badge {
    /// Build the badge for a supported language
    #[must_use]
    pub const fn for_language(lang: Language) -> Self {
        Self {
            tag: lang.tag(),
            label: lang.label(),
            icon: lang.icon(),
        }
    }
}

impl Listing {
    /// Build the view-model for the visible profiles
    ///
    /// Fails on the first language tag outside the supported set.
    pub fn build(devs: &[Developer]) -> Result<Self, UnknownLanguage> {
        let cards = devs
            .iter()
            .map(|dev| {
                let languages = dev
                    .search_languages
                    .iter()
                    .map(|tag| Language::from_tag(tag).map(Badge::for_language))
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(Card {
                    name: dev.name.clone(),
                    picture: dev.picture.clone(),
                    languages,
                })
            })
            .collect::<Result<Vec<_>, UnknownLanguage>>()?;

        Ok(Self {
            count: cards.len(),
            cards,
        })
    }

    /// Render the listing based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("{} developer(s) found\n", self.count);

        for card in &self.cards {
            let badges: Vec<String> = card
                .languages
                .iter()
                .map(|badge| format!("{} {}", badge.icon, colorize_label(badge)))
                .collect();

            println!("{}", card.name.bold());
            println!("  {}", card.picture.dimmed());
            println!("  {}\n", badges.join("  "));
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

fn colorize_label(badge: &Badge) -> colored::ColoredString {
    match badge.tag {
        "java" => badge.label.red(),
        "javascript" => badge.label.yellow(),
        "python" => badge.label.blue(),
        _ => badge.label.normal(),
    }
}
