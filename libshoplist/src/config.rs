//! Configuration management for the shopping list

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::ids::{IdSource, IdStrategy};
use crate::types::SeedItem;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub list: ListConfig,
    pub input: InputConfig,
    pub ids: IdsConfig,
    pub page: PageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ListConfig {
    pub seed: Vec<SeedItem>,
    pub hide_completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Accept submissions that are empty after trimming
    pub allow_empty_names: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IdsConfig {
    pub strategy: IdStrategy,
    pub prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    /// Where to write the full page after every render
    pub output: Option<String>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            seed: SeedItem::demo(),
            hide_completed: false,
        }
    }
}

impl Default for IdsConfig {
    fn default() -> Self {
        Self {
            strategy: IdStrategy::Uuid,
            prefix: "item".to_string(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Shopping List".to_string(),
            output: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file at the XDG location means built-in defaults. A path
    /// named through `SHOPLIST_CONFIG` must exist.
    pub fn load() -> Result<Self> {
        if std::env::var("SHOPLIST_CONFIG").is_ok() {
            let config_path = resolve_config_path()?;
            return Self::load_from_path(&config_path);
        }

        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.page.title.trim().is_empty() {
            return Err(ConfigError::MissingField("page.title".to_string()).into());
        }
        if self.ids.strategy == IdStrategy::Sequential && self.ids.prefix.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "ids.prefix".to_string(),
                value: String::new(),
            }
            .into());
        }
        if let Some(seed) = self.list.seed.iter().find(|s| s.name.trim().is_empty()) {
            if !self.input.allow_empty_names {
                return Err(ConfigError::InvalidValue {
                    field: "list.seed.name".to_string(),
                    value: format!("{:?}", seed.name),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Id generator matching `[ids]`
    pub fn id_source(&self) -> IdSource {
        IdSource::from_strategy(self.ids.strategy, &self.ids.prefix)
    }

    /// `[page] output` with `~` expanded
    pub fn output_path(&self) -> Option<PathBuf> {
        self.page
            .output
            .as_deref()
            .map(|path| PathBuf::from(shellexpand::tilde(path).to_string()))
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("SHOPLIST_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("shoplist").join("config.toml"))
}
