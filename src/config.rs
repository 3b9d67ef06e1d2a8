//! Machine configuration
//!
//! The ticket price can be read from a TOML file instead of being hard-coded.
//! Config is stored at `~/.ticketmachine/config.toml` by default:
//!
//! ```toml
//! [machine]
//! price = 50
//! ```
//!
//! Parsing does not validate the price. A non-positive price is rejected
//! when the machine is built with [`TicketMachine::from_config`].
//!
//! [`TicketMachine::from_config`]: crate::TicketMachine::from_config

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::paths;

/// Price used when no config file says otherwise
pub const DEFAULT_PRICE: i64 = 50;

/// Top-level ticketmachine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Machine settings
    #[serde(default)]
    pub machine: MachineSection,
}

/// The `[machine]` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSection {
    /// Ticket price
    #[serde(default = "default_price")]
    pub price: i64,
}

const fn default_price() -> i64 {
    DEFAULT_PRICE
}

impl Default for MachineSection {
    fn default() -> Self {
        Self {
            price: default_price(),
        }
    }
}

impl MachineConfig {
    /// Config with the given ticket price
    #[must_use]
    pub const fn with_price(price: i64) -> Self {
        Self {
            machine: MachineSection { price },
        }
    }

    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Parse config from TOML text
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("invalid ticketmachine config")
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Load config from the default location, or use defaults if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        Self::load_or_default(&Self::config_path())
    }

    /// Load config from `path`, or use defaults if missing or unreadable
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        Self::load_from(path).unwrap_or_else(|err| {
            log::warn!("Ignoring config: {err:#}");
            Self::default()
        })
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Save config to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }
}
