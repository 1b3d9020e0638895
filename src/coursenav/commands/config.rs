use crate::commands::{CmdMessage, CmdResult, NavPaths};
use crate::config::NavConfig;
use crate::error::{NavError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &NavPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.home;
    match action {
        ConfigAction::ShowAll => {
            let config = NavConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = NavConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = NavConfig::load(dir)?;
            match config.set(&key, &value) {
                Ok(()) => {}
                Err(NavError::Config(message)) => {
                    let mut result = CmdResult::default();
                    result.add_message(CmdMessage::error(message));
                    return Ok(result);
                }
                Err(e) => return Err(e),
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryMode;
    use tempfile::tempdir;

    fn paths(dir: &tempfile::TempDir) -> NavPaths {
        NavPaths {
            home: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn show_all_returns_defaults_without_file() {
        let dir = tempdir().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(NavConfig::default()));
    }

    #[test]
    fn set_persists_value() {
        let dir = tempdir().unwrap();
        let result = run(
            &paths(&dir),
            ConfigAction::Set("history-mode".into(), "push".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "history-mode set to push");

        let loaded = NavConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.history_mode, HistoryMode::Push);
    }

    #[test]
    fn invalid_value_is_reported_not_saved() {
        let dir = tempdir().unwrap();
        let result = run(
            &paths(&dir),
            ConfigAction::Set("history-limit".into(), "lots".into()),
        )
        .unwrap();
        assert!(result.has_errors());
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn show_key_reports_unknown_keys() {
        let dir = tempdir().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowKey("theme".into())).unwrap();
        assert!(result.has_errors());

        let result = run(&paths(&dir), ConfigAction::ShowKey("history-limit".into())).unwrap();
        assert_eq!(result.messages[0].content, "50");
    }
}
