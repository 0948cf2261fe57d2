//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host should perform after an update.
//! The workspace itself never performs I/O; it only asks for it.

use crate::model::PanelId;

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// Layout changed; re-render the workspace chrome
    Redraw,
    /// The focused content location changed. The content layer should refresh
    /// the bodies of `panel_ids` (every panel with sync enabled).
    SyncPanels {
        location: Option<String>,
        panel_ids: Vec<PanelId>,
    },
}

impl Cmd {
    /// Panels the content layer must refresh
    pub fn synced_panels(&self) -> &[PanelId] {
        match self {
            Cmd::SyncPanels { panel_ids, .. } => panel_ids,
            Cmd::Redraw => &[],
        }
    }
}
