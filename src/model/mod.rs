//! Workspace model - the complete layout state
//!
//! This module contains all the state types following the Elm Architecture
//! pattern. `WorkspaceState` is the aggregate root; it is only mutated by the
//! reducers in `crate::update`, driven by the controller in
//! `crate::workspace`.

pub mod breadcrumbs;
pub mod chrome;
pub mod groups;
pub mod panel_store;

pub use breadcrumbs::{BreadcrumbItem, BreadcrumbKind, BreadcrumbStack};
pub use chrome::{BottomPanel, LeftSidebar, DEFAULT_BOTTOM_TAB};
pub use groups::{Detached, GroupId, GroupManager, PanelGroup, Placement, SIZE_EPSILON};
pub use panel_store::{PanelConfig, PanelId, PanelInstance, PanelStore};

use crate::error::{Result, WorkspaceError};

/// Default cap on sibling groups in the study region
pub const DEFAULT_MAX_GROUPS: usize = 4;

/// The complete workspace layout state
#[derive(Debug, Clone, PartialEq)]
pub struct WorkspaceState {
    /// Every live panel instance
    pub panels: PanelStore,
    /// Ordered sibling groups of the study region
    pub groups: GroupManager,
    pub focused_panel_id: Option<PanelId>,
    /// Globally shared "current subject" (e.g. `2:255`)
    pub focused_content_location: Option<String>,
    pub study_region_open: bool,
    pub bottom_panel: BottomPanel,
    pub left_sidebar: LeftSidebar,
    /// Upper bound on sibling groups; placement joins an existing group past it
    pub max_groups: usize,
}

impl Default for WorkspaceState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GROUPS)
    }
}

impl WorkspaceState {
    pub fn new(max_groups: usize) -> Self {
        Self {
            panels: PanelStore::default(),
            groups: GroupManager::default(),
            focused_panel_id: None,
            focused_content_location: None,
            study_region_open: false,
            bottom_panel: BottomPanel::default(),
            left_sidebar: LeftSidebar::default(),
            max_groups: max_groups.max(1),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn panel(&self, id: PanelId) -> Option<&PanelInstance> {
        self.panels.get(id)
    }

    pub fn group(&self, id: GroupId) -> Option<&PanelGroup> {
        self.groups.get(id)
    }

    pub fn study_groups(&self) -> &[PanelGroup] {
        self.groups.groups()
    }

    pub fn group_of(&self, panel: PanelId) -> Option<&PanelGroup> {
        self.groups.group_of(panel)
    }

    pub fn focused_panel(&self) -> Option<&PanelInstance> {
        self.focused_panel_id.and_then(|id| self.panels.get(id))
    }

    pub fn focused_group(&self) -> Option<&PanelGroup> {
        self.focused_panel_id.and_then(|id| self.groups.group_of(id))
    }

    /// Panels currently showing (the active tab of each group)
    pub fn visible_panel_ids(&self) -> Vec<PanelId> {
        self.study_groups()
            .iter()
            .map(|g| g.active_panel_id)
            .collect()
    }

    /// Effective minimum share of a group for a container width in pixels
    pub fn group_min_percent(&self, group: &PanelGroup, container_width: f32) -> f64 {
        group.min_percent(&self.panels, container_width)
    }

    // =========================================================================
    // Invariants
    // =========================================================================

    /// Check every cross-component invariant.
    ///
    /// Used when hydrating from a snapshot, and after every update in debug
    /// builds.
    pub fn validate(&self) -> Result<()> {
        self.groups
            .check(&self.panels)
            .map_err(WorkspaceError::InvalidSnapshot)?;

        if let Some(id) = self.focused_panel_id {
            if !self.panels.contains(id) {
                return Err(WorkspaceError::InvalidSnapshot(format!(
                    "focused {} does not exist",
                    id
                )));
            }
        }
        if self.study_region_open && self.groups.is_empty() {
            return Err(WorkspaceError::InvalidSnapshot(
                "study region open with no groups".to_string(),
            ));
        }
        if self.groups.len() > self.max_groups {
            return Err(WorkspaceError::InvalidSnapshot(format!(
                "{} groups exceed the cap of {}",
                self.groups.len(),
                self.max_groups
            )));
        }
        if let Some(panel) = self
            .panels
            .iter()
            .find(|p| p.sync_to_verse && !p.kind.info().verse_aware)
        {
            return Err(WorkspaceError::InvalidSnapshot(format!(
                "{} syncs but {} is not verse-aware",
                panel.id, panel.kind
            )));
        }
        Ok(())
    }

    /// Assert layout invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        if let Err(e) = self.validate() {
            panic!("Invariant violated after {}: {}", context, e);
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants_with_context(&self, _context: &str) {}
}
