use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::history::SearchHistory;

/// Environment variable that overrides the API key from the config file.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Top-level configuration stored on disk.
///
/// The API key is injected configuration with no default: it lives in the
/// config file or the environment, never in source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OpenWeather API key. Example TOML:
    /// api_key = "..."
    pub api_key: Option<String>,

    /// Maximum number of entries kept in search history.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Whether coordinate-based fetches also record the resolved city name
    /// in search history.
    #[serde(default = "default_record_coordinate_lookups")]
    pub record_coordinate_lookups: bool,
}

fn default_history_capacity() -> usize {
    SearchHistory::DEFAULT_CAPACITY
}

fn default_record_coordinate_lookups() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            history_capacity: default_history_capacity(),
            record_coordinate_lookups: default_record_coordinate_lookups(),
        }
    }
}

impl Config {
    /// Resolve the API key, preferring the environment over the file value.
    pub fn resolve_api_key(&self) -> Option<String> {
        resolved_key(std::env::var(API_KEY_ENV).ok(), self.api_key.clone())
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skywatch", "skywatch")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Precedence rule for the API key, kept free of `std::env` so it can be
/// tested deterministically.
fn resolved_key(env_value: Option<String>, file_value: Option<String>) -> Option<String> {
    env_value.filter(|key| !key.trim().is_empty()).or(file_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_key_takes_precedence_over_file_key() {
        let key = resolved_key(Some("ENV_KEY".into()), Some("FILE_KEY".into()));
        assert_eq!(key.as_deref(), Some("ENV_KEY"));
    }

    #[test]
    fn blank_env_key_falls_back_to_file_key() {
        let key = resolved_key(Some("  ".into()), Some("FILE_KEY".into()));
        assert_eq!(key.as_deref(), Some("FILE_KEY"));
    }

    #[test]
    fn no_key_anywhere_resolves_to_none() {
        assert_eq!(resolved_key(None, None), None);
    }

    #[test]
    fn missing_fields_take_defaults_when_parsing() {
        let cfg: Config = toml::from_str(r#"api_key = "KEY""#).expect("valid TOML");

        assert_eq!(cfg.api_key.as_deref(), Some("KEY"));
        assert_eq!(cfg.history_capacity, SearchHistory::DEFAULT_CAPACITY);
        assert!(cfg.record_coordinate_lookups);
    }

    #[test]
    fn full_config_roundtrips_through_toml() {
        let cfg = Config {
            api_key: Some("KEY".to_string()),
            history_capacity: 5,
            record_coordinate_lookups: false,
        };

        let text = toml::to_string_pretty(&cfg).expect("serializes");
        let parsed: Config = toml::from_str(&text).expect("parses back");

        assert_eq!(parsed.api_key.as_deref(), Some("KEY"));
        assert_eq!(parsed.history_capacity, 5);
        assert!(!parsed.record_coordinate_lookups);
    }
}
