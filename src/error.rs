//! Error taxonomy for rejected workspace commands
//!
//! Every variant is a local, synchronous rejection. A command that returns
//! one of these has not changed the workspace.

use std::fmt;

use crate::model::{GroupId, PanelId};
use crate::panel::PanelKind;

/// What a `NotFound` error was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Panel(PanelId),
    Group(GroupId),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Panel(id) => write!(f, "panel {}", id),
            Target::Group(id) => write!(f, "group {}", id),
        }
    }
}

/// Errors returned by workspace commands
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkspaceError {
    /// A referenced panel or group id does not exist
    #[error("{0} not found")]
    NotFound(Target),

    /// A panel kind outside the registered set was requested
    #[error("unknown panel kind: {0}")]
    UnknownKind(String),

    /// Sync was requested on a kind that is not verse-aware
    #[error("panel {panel} ({kind}) cannot sync to the focused location")]
    NotVerseAware { panel: PanelId, kind: PanelKind },

    /// Invalid breadcrumb index for `goto`
    #[error("breadcrumb index {index} out of range for panel {panel} (len {len})")]
    IndexOutOfRange {
        panel: PanelId,
        index: i64,
        len: usize,
    },

    /// A resize would push a group below its effective minimum width
    #[error("group {group} would shrink to {size_percent:.2}% (minimum {min_percent:.2}%)")]
    BelowMinimumWidth {
        group: GroupId,
        size_percent: f64,
        min_percent: f64,
    },

    /// A bulk resize did not match the current group layout
    #[error("expected {expected} group sizes summing to 100, got {actual} summing to {sum:.2}")]
    SizeMismatch {
        expected: usize,
        actual: usize,
        sum: f64,
    },

    /// A preset name that is not in the preset table
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// A hydrated snapshot breaks a layout invariant
    #[error("invalid workspace snapshot: {0}")]
    InvalidSnapshot(String),
}

impl WorkspaceError {
    pub fn panel_not_found(id: PanelId) -> Self {
        WorkspaceError::NotFound(Target::Panel(id))
    }

    pub fn group_not_found(id: GroupId) -> Self {
        WorkspaceError::NotFound(Target::Group(id))
    }
}

pub type Result<T, E = WorkspaceError> = std::result::Result<T, E>;
