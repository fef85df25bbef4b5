//! Filter engine - narrows the full profile list to the visible subset
//!
//! This module contains pure filtering logic with no I/O dependencies.
//! The language filter runs first, then the text filter; both only narrow,
//! so the relative order of surviving records never changes.

use crate::models::{CombineMode, Developer, FilterState};

/// Compute the visible subset for the current filter state
///
/// Language test:
/// - ANY mode: the profile has at least one selected language.
/// - ALL mode: the profile's sorted language tags equal the sorted
///   selection exactly. A profile with a superset or subset of the
///   selected tags is excluded.
///
/// A non-empty query then keeps only profiles whose `search_name`
/// contains it. Always returns a (possibly empty) list.
#[must_use]
pub fn visible(devs: &[Developer], state: &FilterState) -> Vec<Developer> {
    let selected = state.selected_tags();

    let mut matched: Vec<Developer> = devs
        .iter()
        .filter(|dev| match state.mode {
            CombineMode::Any => dev
                .search_languages
                .iter()
                .any(|lang| selected.contains(&lang.as_str())),
            CombineMode::All => dev
                .search_languages
                .iter()
                .map(String::as_str)
                .eq(selected.iter().copied()),
        })
        .cloned()
        .collect();

    if !state.query.is_empty() {
        matched.retain(|dev| dev.search_name.contains(&state.query));
    }

    matched
}
