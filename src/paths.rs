//! Centralized path definitions for devfinder
//!
//! Global (user-level) layout:
//!
//! ```text
//! ~/.config/devfinder/
//! └── config.toml               # Profiles endpoint, preferences
//! ```

use std::path::PathBuf;

/// Directory name under the user config root
const APP_DIR: &str = "devfinder";

/// Global config directory (`~/.config/devfinder` on XDG systems)
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Global config file path
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join("config.toml")
}
