// File: ./src/config.rs
use crate::form::DEFAULT_MAX_QUANTITY;
use crate::model::{SeedItem, SortBy};
use anyhow::{Context, Result, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_ENV: &str = "FARPACK_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Start with nothing on the list instead of the example items.
    pub start_empty: bool,
    /// Replaces the example items when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SeedItem>>,
    pub sort_by: SortBy,
    pub max_quantity: u32,
    pub bounce_ms: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_empty: false,
            items: None,
            sort_by: SortBy::Input,
            max_quantity: DEFAULT_MAX_QUANTITY,
            bounce_ms: 1000,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// `$FARPACK_CONFIG` first, then the platform config directory.
    pub fn get_path() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("com", "farpack", "farpack")
            .map(|proj| proj.config_dir().join("config.toml"))
    }

    /// Loads the default config file. A missing file means defaults.
    pub fn load() -> Result<Self> {
        match Self::get_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("in config file {}", path.display()))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Config = toml::from_str(raw).context("invalid TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serializing config")
    }

    fn validate(&self) -> Result<()> {
        if self.max_quantity == 0 {
            bail!("max_quantity must be at least 1");
        }
        if let Some(items) = &self.items {
            for (i, item) in items.iter().enumerate() {
                if item.description.is_empty() {
                    bail!("items[{}] has an empty description", i);
                }
                if item.quantity == 0 {
                    bail!("items[{}] ({}) has a zero quantity", i, item.description);
                }
            }
        }
        Ok(())
    }

    /// What the list contains when the session starts.
    pub fn seed_items(&self) -> Vec<SeedItem> {
        if self.start_empty {
            return vec![];
        }
        match &self.items {
            Some(items) => items.clone(),
            None => SeedItem::examples(),
        }
    }

    pub fn bounce(&self) -> Duration {
        Duration::from_millis(self.bounce_ms)
    }
}
