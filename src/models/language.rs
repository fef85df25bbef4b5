//! Supported programming language tags
//!
//! The tag set is fixed at compile time; profiles referencing a tag outside
//! this set are a configuration defect when rendered.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for a language tag outside the supported set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language tag: {0}. Use: java, javascript, python")]
pub struct UnknownLanguage(pub String);

/// A supported programming language tag
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// The `java` tag
    Java,
    /// The `javascript` tag
    Javascript,
    /// The `python` tag
    Python,
}

impl Language {
    /// Every supported tag, in lexicographic tag order
    pub const ALL: [Self; 3] = [Self::Java, Self::Javascript, Self::Python];

    /// Canonical lowercase tag identifier
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Java => "java",
            Self::Javascript => "javascript",
            Self::Python => "python",
        }
    }

    /// Human-readable label shown on cards and checkboxes
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Java => "Java",
            Self::Javascript => "JavaScript",
            Self::Python => "Python",
        }
    }

    /// Terminal icon shown next to the label
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Java => "☕",
            Self::Javascript => "🟨",
            Self::Python => "🐍",
        }
    }

    /// Look up a language by its lowercase tag identifier
    pub fn from_tag(tag: &str) -> Result<Self, UnknownLanguage> {
        match tag {
            "java" => Ok(Self::Java),
            "javascript" => Ok(Self::Javascript),
            "python" => Ok(Self::Python),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(&s.to_lowercase())
    }
}
