//! Startup loader for developer profiles
//!
//! Performs the one network request of the application: a blocking GET
//! against the profiles endpoint. There is no retry and no fallback; any
//! transport, status, or decode failure is fatal to the command.

use thiserror::Error;

use crate::models::{Developer, RawDeveloper};

/// Errors that can occur while loading profiles
#[derive(Debug, Error)]
pub enum LoadError {
    /// Transport failure or non-success HTTP status
    #[error("request to {url} failed: {source}")]
    Http {
        /// The endpoint that was queried
        url: String,
        /// The underlying client error
        source: reqwest::Error,
    },

    /// The endpoint responded but the body was not a valid profile list
    #[error("malformed profile data from {url}: {source}")]
    Malformed {
        /// The endpoint that was queried
        url: String,
        /// The underlying decode error
        source: serde_json::Error,
    },
}

/// Fetch the full profile list and decorate each record
///
/// Runs exactly once at startup; callers must not filter before this
/// completes. Records come back in endpoint order.
pub fn fetch_developers(url: &str) -> Result<Vec<Developer>, LoadError> {
    log::debug!("fetching developer profiles from {url}");

    let body = reqwest::blocking::get(url)
        .and_then(reqwest::blocking::Response::error_for_status)
        .and_then(reqwest::blocking::Response::text)
        .map_err(|source| LoadError::Http {
            url: url.to_string(),
            source,
        })?;

    let raw: Vec<RawDeveloper> =
        serde_json::from_str(&body).map_err(|source| LoadError::Malformed {
            url: url.to_string(),
            source,
        })?;

    log::debug!("loaded {} profile(s)", raw.len());

    Ok(raw.into_iter().map(Developer::from_raw).collect())
}
