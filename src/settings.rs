use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConsoleError;
use crate::persist::{read_json, write_json};

const SETTINGS_VERSION: u32 = 1;

pub const DEFAULT_PROMPT: &str = "> ";
pub const DEFAULT_HISTORY_LIMIT: usize = 200;

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

/// Console settings stored in the app config directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConsoleSettings {
    pub version: u32,
    /// Dashboard snapshot to load instead of the built-in sample.
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_filter: Option<String>,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            snapshot: None,
            prompt: default_prompt(),
            log_filter: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// Load settings from the app config directory. Returns None if no settings
/// file exists; an unreadable file is logged and treated the same way.
pub fn load_settings(app_config_dir: &Path) -> Option<ConsoleSettings> {
    let path = crate::paths::settings_path(app_config_dir);
    if !path.exists() {
        return None;
    }
    match read_json::<ConsoleSettings>(&path) {
        Ok(settings) => Some(settings),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable settings");
            None
        }
    }
}

/// Save settings to the app config directory.
pub fn save_settings(app_config_dir: &Path, settings: &ConsoleSettings) -> Result<(), ConsoleError> {
    if settings.version > SETTINGS_VERSION {
        return Err(ConsoleError::Settings {
            message: format!(
                "settings version {} is newer than supported version {SETTINGS_VERSION}",
                settings.version
            ),
        });
    }
    std::fs::create_dir_all(app_config_dir)?;
    write_json(&crate::paths::settings_path(app_config_dir), settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ConsoleSettings {
            snapshot: Some(PathBuf::from("/srv/dashboard/snapshot.json")),
            prompt: "ops> ".into(),
            log_filter: Some("logistics_console=debug".into()),
            ..ConsoleSettings::default()
        };
        save_settings(dir.path(), &settings).unwrap();

        let loaded = load_settings(dir.path()).expect("should load");
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            crate::paths::settings_path(dir.path()),
            serde_json::json!({ "version": 1 }).to_string(),
        )
        .unwrap();

        let loaded = load_settings(dir.path()).expect("should load");
        assert_eq!(loaded, ConsoleSettings::default());
        assert_eq!(loaded.prompt, "> ");
        assert_eq!(loaded.history_limit, 200);
    }

    #[test]
    fn test_load_missing_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_settings(&dir.path().join("nothing-here")).is_none());
    }

    #[test]
    fn test_corrupt_settings_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(crate::paths::settings_path(dir.path()), "not json").unwrap();
        assert!(load_settings(dir.path()).is_none());
    }

    #[test]
    fn test_future_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let settings = ConsoleSettings {
            version: SETTINGS_VERSION + 1,
            ..ConsoleSettings::default()
        };
        let err = save_settings(dir.path(), &settings).unwrap_err();
        assert!(matches!(err, ConsoleError::Settings { .. }));
    }
}
