//! Workspace configuration persistence
//!
//! Stores user preferences in `~/.config/studydesk/config.yaml`

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_MAX_GROUPS;
use crate::panel::PresetId;

/// Workspace configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Upper bound on sibling groups in the study region
    #[serde(default = "default_max_groups")]
    pub max_groups: usize,
    /// Preset applied at startup when no session is restored
    #[serde(default)]
    pub default_preset: Option<PresetId>,
    /// Reload `session.json` at startup
    #[serde(default = "default_true")]
    pub restore_session: bool,
    /// Study region width used to turn minimum panel widths into percentages
    #[serde(default = "default_container_width")]
    pub container_width_px: f32,
}

fn default_max_groups() -> usize {
    DEFAULT_MAX_GROUPS
}

fn default_true() -> bool {
    true
}

fn default_container_width() -> f32 {
    1280.0
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            max_groups: default_max_groups(),
            default_preset: None,
            restore_session: default_true(),
            container_width_px: default_container_width(),
        }
    }
}

impl WorkspaceConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::StudyFile::Config.path() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let path =
            crate::config_paths::StudyFile::Config.path().context("No config directory available")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
