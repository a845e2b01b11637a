use std::path::{Path, PathBuf};

use finance_core::{CategoryMap, DEFAULT_CURRENCY};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FinanceConfig {
    #[serde(default)]
    pub ledger: LedgerSection,
    #[serde(default)]
    pub ui: UiSection,
    /// Category name -> sub-items, loaded into the session's catalog
    #[serde(default)]
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LedgerSection {
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for LedgerSection {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(default)]
    pub ascii: bool,
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            ascii: false,
            color: default_color(),
        }
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_color() -> bool {
    true
}

/// Default config location, or `None` when neither `XDG_CONFIG_HOME` nor
/// `HOME` is set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_config_dir().map(|dir| dir.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<FinanceConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config at `path`, falling back to defaults when it does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<FinanceConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(FinanceConfig::default());
    }
    let config = read_config(path)?;
    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

pub fn xdg_config_dir() -> Option<PathBuf> {
    config_dir_from(
        std::env::var("XDG_CONFIG_HOME").ok(),
        std::env::var("HOME").ok(),
    )
}

fn config_dir_from(xdg_config_home: Option<String>, home: Option<String>) -> Option<PathBuf> {
    let non_empty = |value: String| (!value.trim().is_empty()).then(|| PathBuf::from(value));
    if let Some(dir) = xdg_config_home.and_then(non_empty) {
        return Some(dir.join("finance"));
    }
    home.and_then(non_empty)
        .map(|home| home.join(".config").join("finance"))
}
