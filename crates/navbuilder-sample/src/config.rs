// File: src/config.rs
// Purpose: Configuration parsing from navbuilder-sample.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = "navbuilder-sample.toml";

/// Sample app configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Entries shown on the list screen
    #[serde(default = "default_items")]
    pub items: Vec<ItemConfig>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset (default: "info")
    #[serde(default = "default_level")]
    pub level: String,
}

/// One list entry: a language and its Japanese reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub lang: String,
    pub ja: String,
}

// Default values
fn default_level() -> String {
    "info".to_string()
}

fn default_items() -> Vec<ItemConfig> {
    [
        ("Kotlin", "ことりん"),
        ("Java", "じゃゔぁ"),
        ("Swift", "すいふと"),
        ("Dart", "だーと"),
        ("Go", "ごー"),
        ("Rust", "らすと"),
        ("JavaScript", "じゃゔぁすくりぷと"),
    ]
    .into_iter()
    .map(|(lang, ja)| ItemConfig {
        lang: lang.to_string(),
        ja: ja.to_string(),
    })
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            items: default_items(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Config {
    /// Reads the sample's TOML file. A missing or blank file means the
    /// built-in language list and `info` logging.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("No config at {}, using built-in items", path.display());
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Cannot read {}", path.display()));
            }
        };

        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::parse(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
