//! Path definitions for the console's config files.
//!
//! Functions take the app config directory explicitly so tests and the
//! `--config-dir` override never touch the real user directory.

use std::path::{Path, PathBuf};

// ── Application identity ─────────────────────────────────────────

pub const APP_ID: &str = "com.logistics.console";

// ── Leaf filenames ───────────────────────────────────────────────

pub const SETTINGS_FILE: &str = "settings.json";
pub const HISTORY_FILE: &str = "history.txt";

// ── Config-dir functions (take app_config_dir) ───────────────────

pub fn settings_path(app_config_dir: &Path) -> PathBuf {
    app_config_dir.join(SETTINGS_FILE)
}

/// Line-editor history for the REPL.
pub fn history_path(app_config_dir: &Path) -> PathBuf {
    app_config_dir.join(HISTORY_FILE)
}

// ── Platform defaults ────────────────────────────────────────────

/// `<config_dir>/com.logistics.console` using the platform's usual config root.
pub fn default_config_dir() -> PathBuf {
    let base = if cfg!(target_os = "windows") {
        std::env::var("APPDATA")
            .map_or_else(|_| PathBuf::from("C:\\Users\\Default\\AppData\\Roaming"), PathBuf::from)
    } else if cfg!(target_os = "macos") {
        home_dir().join("Library/Application Support")
    } else {
        std::env::var("XDG_CONFIG_HOME").map_or_else(|_| home_dir().join(".config"), PathBuf::from)
    };
    base.join(APP_ID)
}

fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_or_else(|_| PathBuf::from("."), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_files_live_in_config_dir() {
        let dir = Path::new("/tmp/console");
        assert_eq!(settings_path(dir), dir.join("settings.json"));
        assert_eq!(history_path(dir), dir.join("history.txt"));
    }

    #[test]
    fn default_dir_ends_with_app_id() {
        assert!(default_config_dir().ends_with(APP_ID));
    }
}
