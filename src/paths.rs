//! Centralized path definitions for ticketmachine
//!
//! ## Layout
//!
//! ```text
//! ~/.ticketmachine/
//! └── config.toml               # Machine configuration (ticket price)
//! ```

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".ticketmachine";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global ticketmachine directory.
///
/// Returns `~/.ticketmachine/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.ticketmachine/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
