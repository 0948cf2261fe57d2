//! Persistent workspace session
//!
//! A `SessionSnapshot` is the serialisable form of a `WorkspaceState`. It is
//! stored as pretty JSON in `~/.config/studydesk/session.json` and validated
//! in full when turned back into a state.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkspaceError};
use crate::model::{
    BottomPanel, GroupManager, LeftSidebar, PanelGroup, PanelId, PanelInstance, PanelStore,
    WorkspaceState,
};

/// Serialisable copy of the persisted workspace fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Schema version for forward compatibility
    #[serde(default)]
    pub version: u32,
    pub panels: Vec<PanelInstance>,
    pub study_groups: Vec<PanelGroup>,
    pub focused_panel_id: Option<PanelId>,
    #[serde(default)]
    pub focused_content_location: Option<String>,
    pub study_region_open: bool,
    #[serde(default)]
    pub bottom_panel: BottomPanel,
    #[serde(default)]
    pub left_sidebar: LeftSidebar,
    pub next_panel_id: u64,
    pub next_group_id: u64,
}

impl SessionSnapshot {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn from_state(state: &WorkspaceState) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            panels: state.panels.iter().cloned().collect(),
            study_groups: state.study_groups().to_vec(),
            focused_panel_id: state.focused_panel_id,
            focused_content_location: state.focused_content_location.clone(),
            study_region_open: state.study_region_open,
            bottom_panel: state.bottom_panel.clone(),
            left_sidebar: state.left_sidebar.clone(),
            next_panel_id: state.panels.next_panel_id(),
            next_group_id: state.groups.next_group_id(),
        }
    }

    /// Rebuild a workspace state, rejecting snapshots that break any layout
    /// invariant.
    pub fn into_state(self, max_groups: usize) -> Result<WorkspaceState> {
        if self.version > Self::CURRENT_VERSION {
            return Err(WorkspaceError::InvalidSnapshot(format!(
                "unsupported session version {}",
                self.version
            )));
        }
        let panels = PanelStore::from_parts(self.panels, self.next_panel_id)?;
        let groups = GroupManager::from_parts(self.study_groups, self.next_group_id, &panels)?;
        if !self.bottom_panel.size_percent.is_finite() {
            return Err(WorkspaceError::InvalidSnapshot(
                "bottom panel size is not finite".to_string(),
            ));
        }
        // An open region needs at least one group
        let study_region_open = self.study_region_open && !groups.is_empty();
        if study_region_open != self.study_region_open {
            tracing::debug!("closing empty study region from saved session");
        }
        let state = WorkspaceState {
            panels,
            groups,
            focused_panel_id: self.focused_panel_id,
            focused_content_location: self.focused_content_location,
            study_region_open,
            bottom_panel: self.bottom_panel,
            left_sidebar: self.left_sidebar,
            max_groups: max_groups.max(1),
        };
        state.validate()?;
        Ok(state)
    }

    /// Load the session from the default location, if one was saved
    pub fn load() -> anyhow::Result<Option<Self>> {
        let Some(path) = crate::config_paths::StudyFile::Session.path() else {
            return Ok(None);
        };
        if !path.exists() {
            tracing::debug!("No session at {}", path.display());
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read session {}", path.display()))?;
        let snapshot = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session {}", path.display()))?;
        tracing::info!("Loaded session from {}", path.display());
        Ok(snapshot)
    }

    /// Save to the default location, creating the config directory
    pub fn save(&self) -> anyhow::Result<()> {
        let path = crate::config_paths::StudyFile::Session.path()
            .context("No config directory available")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write session to {}", path.display()))?;
        tracing::info!("Saved session to {}", path.display());
        Ok(())
    }
}
