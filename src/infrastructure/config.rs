//! Configuration management

use crate::error::{NotesError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quiet period before title/content drafts are committed
    pub debounce_ms: u64,
    /// Start sessions with the welcome notes
    pub seed_samples: bool,
    /// Characters of content shown per list row
    pub snippet_length: usize,
    /// Tags shown per list row
    pub list_tag_limit: usize,
    /// chrono format string for timestamps
    pub time_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            debounce_ms: 200,
            seed_samples: true,
            snippet_length: 120,
            list_tag_limit: 3,
            time_format: "%Y-%m-%d %H:%M".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file; missing keys keep their defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NotesError::Config(format!("Config file not found: {}", path.display()))
            } else {
                NotesError::Io(e)
            }
        })?;

        Self::from_toml(&contents)
    }

    /// Parse config from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| NotesError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Debounce window as a duration
    pub fn debounce_window(&self) -> Duration {
        Duration::milliseconds(i64::try_from(self.debounce_ms).unwrap_or(i64::MAX))
    }

    /// Check values that serde alone cannot reject
    pub fn validate(&self) -> Result<()> {
        if self.time_format.trim().is_empty() {
            return Err(NotesError::Config(
                "time_format must not be empty".to_string(),
            ));
        }
        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(NotesError::Config(format!(
                "time_format is not a valid strftime pattern: '{}'",
                self.time_format
            )));
        }
        if self.debounce_ms > 60_000 {
            return Err(NotesError::Config(format!(
                "debounce_ms must be at most 60000, got {}",
                self.debounce_ms
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.debounce_ms, 200);
        assert!(config.seed_samples);
        assert_eq!(config.snippet_length, 120);
        assert_eq!(config.list_tag_limit, 3);
        assert_eq!(config.debounce_window(), Duration::milliseconds(200));
    }

    #[test]
    fn test_load_partial_config_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.toml");
        fs::write(&path, "debounce_ms = 50\nseed_samples = false\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();

        assert_eq!(config.debounce_ms, 50);
        assert!(!config.seed_samples);
        assert_eq!(config.snippet_length, 120);
        assert_eq!(config.time_format, "%Y-%m-%d %H:%M");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_path(&temp.path().join("absent.toml"));

        match result.unwrap_err() {
            NotesError::Config(msg) => assert!(msg.contains("not found")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_toml("debounce_ms = \"fast\"");
        match result.unwrap_err() {
            NotesError::Config(msg) => assert!(msg.contains("Failed to parse config")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_validation() {
        assert!(Config::from_toml("time_format = \"  \"").is_err());
        assert!(Config::from_toml("debounce_ms = 120000").is_err());
        assert!(Config::from_toml("time_format = \"%!\"").is_err());
        assert!(Config::from_toml("debounce_ms = 0").is_ok());
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = Config {
            list_tag_limit: 5,
            ..Config::default()
        };
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }
}
