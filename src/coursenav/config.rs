use crate::error::{NavError, Result};
use crate::history::HistoryMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Navigation settings, stored in `<home>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavConfig {
    /// Mode used for query writes unless a command overrides it.
    #[serde(default)]
    pub history_mode: HistoryMode,

    /// Maximum number of history entries kept (0 = unlimited).
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            history_mode: HistoryMode::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl NavConfig {
    pub const KEYS: &'static [&'static str] = &["history-mode", "history-limit"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: NavConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "history-mode" => Some(self.history_mode.to_string()),
            "history-limit" => Some(self.history_limit.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "history-mode" => {
                self.history_mode = value.parse().map_err(NavError::Config)?;
            }
            "history-limit" => {
                self.history_limit = value.parse().map_err(|_| {
                    NavError::Config(format!(
                        "Invalid history limit: {} (expected a non-negative integer)",
                        value
                    ))
                })?;
            }
            other => return Err(NavError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = NavConfig::default();
        assert_eq!(config.history_mode, HistoryMode::Replace);
        assert_eq!(config.history_limit, 50);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = NavConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, NavConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let mut config = NavConfig::default();
        config.set("history-mode", "push").unwrap();
        config.set("history-limit", "5").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = NavConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.history_mode, HistoryMode::Push);
        assert_eq!(loaded.history_limit, 5);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"history_mode":"push"}"#).unwrap();
        let loaded = NavConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.history_mode, HistoryMode::Push);
        assert_eq!(loaded.history_limit, 50);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ nope").unwrap();
        assert!(matches!(
            NavConfig::load(dir.path()),
            Err(NavError::Serialization(_))
        ));
    }

    #[test]
    fn test_get_and_set_by_key() {
        let mut config = NavConfig::default();
        assert_eq!(config.get("history-mode").as_deref(), Some("replace"));
        assert!(config.get("colour").is_none());

        assert!(config.set("history-mode", "sideways").is_err());
        assert!(config.set("history-limit", "-1").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, NavConfig::default());
    }
}
