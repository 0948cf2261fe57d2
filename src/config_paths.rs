//! Where studydesk keeps its files
//!
//! Config, session and logs share one per-user directory: `studydesk/` under
//! `$XDG_CONFIG_HOME` (or `~/.config`) on Unix and macOS, and under the
//! roaming app-data directory on Windows.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

const APP_DIR: &str = "studydesk";
const LOGS_DIR: &str = "logs";

/// A file studydesk reads or writes in its config directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyFile {
    /// `config.yaml`: user settings
    Config,
    /// `session.json`: the last saved layout
    Session,
}

impl StudyFile {
    pub fn file_name(&self) -> &'static str {
        match self {
            StudyFile::Config => "config.yaml",
            StudyFile::Session => "session.json",
        }
    }

    /// Full path, if a config directory can be determined
    pub fn path(&self) -> Option<PathBuf> {
        config_dir().map(|dir| dir.join(self.file_name()))
    }
}

/// Base directory for every studydesk file
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = dirs::config_dir();

    #[cfg(not(target_os = "windows"))]
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

    base.map(|dir| dir.join(APP_DIR))
}

/// Create the log directory if needed and return it
pub fn ensure_logs_dir() -> anyhow::Result<PathBuf> {
    let base = config_dir().context("No config directory available")?;
    ensure_logs_dir_in(&base)
}

fn ensure_logs_dir_in(base: &Path) -> anyhow::Result<PathBuf> {
    let logs = base.join(LOGS_DIR);
    fs::create_dir_all(&logs)
        .with_context(|| format!("Failed to create log directory {}", logs.display()))?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_in_app_dir() {
        if let Some(path) = StudyFile::Session.path() {
            assert!(path.ends_with("studydesk/session.json"));
        }
        assert_eq!(StudyFile::Config.file_name(), "config.yaml");
    }

    #[test]
    fn test_ensure_logs_dir_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("studydesk");
        let logs = ensure_logs_dir_in(&base).unwrap();
        assert!(logs.is_dir());
        // Second call is fine
        assert_eq!(ensure_logs_dir_in(&base).unwrap(), logs);
    }

    #[test]
    fn test_ensure_logs_dir_reports_blocked_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("studydesk");
        fs::write(&blocker, "not a directory").unwrap();
        let err = ensure_logs_dir_in(&blocker).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to create log directory"));
    }
}
