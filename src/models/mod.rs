//! Data models for devfinder
//!
//! Core abstractions:
//! - Developer: a profile record decorated with derived search fields
//! - Language: the fixed set of supported language tags
//! - `FilterState`: the current query, tag selections, and combine mode

pub mod developer;
pub mod language;
pub mod state;

pub use developer::{Developer, LanguageEntry, RawDeveloper};
pub use language::{Language, UnknownLanguage};
pub use state::{CombineMode, FilterState};
