use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Persistent defaults read from `config.toml` in the data directory.
/// Command-line flags take precedence over these values.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub show_callables: bool,
    pub show_special: bool,
    pub show_root_node: bool,
    pub max_summary_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_callables: true,
            show_special: true,
            show_root_node: true,
            max_summary_len: objscope_engine::DEFAULT_SUMMARY_LEN,
        }
    }
}

impl Config {
    /// Loads configuration, falling back to defaults when the file
    /// does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }
}
