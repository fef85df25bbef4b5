//! Filter state shared between the controller and the filter engine
//!
//! `FilterState` keeps the tag selection map private so it always covers
//! exactly the supported tag set: tags can be toggled, never added or
//! removed.

use std::collections::BTreeMap;

use crate::models::Language;

/// Policy for combining the selected language tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombineMode {
    /// A profile matches if it has at least one selected language
    #[default]
    Any,
    /// A profile matches only if its language set equals the selection exactly
    All,
}

impl std::fmt::Display for CombineMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::All => write!(f, "all"),
        }
    }
}

impl std::str::FromStr for CombineMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "any" | "or" => Ok(Self::Any),
            "all" | "and" => Ok(Self::All),
            _ => Err(format!("Invalid combine mode: {s}. Use: any, all")),
        }
    }
}

/// The current filter selections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Normalized substring matched against profile search names
    pub query: String,
    /// Selected combine policy
    pub mode: CombineMode,
    // Per-tag inclusion flags; always exactly the supported set.
    selections: BTreeMap<Language, bool>,
}

impl Default for FilterState {
    /// Initial state: empty query, every tag selected, ANY mode
    fn default() -> Self {
        Self {
            query: String::new(),
            mode: CombineMode::Any,
            selections: Language::ALL.iter().map(|&lang| (lang, true)).collect(),
        }
    }
}

impl FilterState {
    /// Initial state: empty query, every tag selected, ANY mode
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a tag is currently selected
    #[must_use]
    pub fn is_selected(&self, lang: Language) -> bool {
        self.selections.get(&lang).copied().unwrap_or(false)
    }

    /// Set the inclusion flag for one tag
    pub fn set_selected(&mut self, lang: Language, selected: bool) {
        self.selections.insert(lang, selected);
    }

    /// Flip the inclusion flag for one tag
    pub fn toggle(&mut self, lang: Language) {
        let flag = self.selections.entry(lang).or_insert(false);
        *flag = !*flag;
    }

    /// Select exactly the given tags, deselecting every other tag
    pub fn select_only(&mut self, langs: &[Language]) {
        for lang in Language::ALL {
            self.set_selected(lang, langs.contains(&lang));
        }
    }

    /// Selected tag identifiers, lexicographically sorted
    #[must_use]
    pub fn selected_tags(&self) -> Vec<&'static str> {
        // BTreeMap iteration follows Language's derive order, which matches
        // lexicographic tag order.
        self.selections
            .iter()
            .filter(|&(_, &selected)| selected)
            .map(|(&lang, _)| lang.tag())
            .collect()
    }
}
