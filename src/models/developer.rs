//! Developer profile records
//!
//! `RawDeveloper` is the wire shape returned by the profiles endpoint.
//! `Developer` is the decorated record the rest of the crate works with:
//! it carries derived search fields computed once at load time and is
//! immutable afterwards.

use serde::Deserialize;

use crate::search;

/// A profile record as returned by the profiles endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDeveloper {
    /// Display name
    pub name: String,
    /// Avatar URI
    pub picture: String,
    /// Languages listed on the profile
    pub programming_languages: Vec<LanguageEntry>,
}

/// One entry in a profile's language list
#[derive(Debug, Clone, Deserialize)]
pub struct LanguageEntry {
    /// Language tag, in whatever casing the endpoint uses
    pub language: String,
}

/// A profile record decorated with derived search fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Developer {
    /// Display name
    pub name: String,
    /// Avatar URI
    pub picture: String,
    /// Lowercased, accent-stripped, whitespace-free name for substring search
    pub search_name: String,
    /// Lowercased language tags, lexicographically sorted
    pub search_languages: Vec<String>,
}

impl Developer {
    /// Decorate a raw record with its derived search fields
    #[must_use]
    pub fn from_raw(raw: RawDeveloper) -> Self {
        let search_name = search::normalize(&raw.name);

        let mut search_languages: Vec<String> = raw
            .programming_languages
            .into_iter()
            .map(|entry| entry.language.to_lowercase())
            .collect();
        search_languages.sort_unstable();

        Self {
            name: raw.name,
            picture: raw.picture,
            search_name,
            search_languages,
        }
    }
}
