//! devfinder - browse and filter developer profiles from the terminal
//!
//! This library provides the core functionality: loading profiles from an
//! HTTP endpoint, normalizing text for accent-insensitive search, filtering
//! by name and language tags, and building the rendered card listing.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod controller;
pub mod filter;
pub mod loader;
pub mod models;
pub mod output;
pub mod paths;
pub mod search;
