//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Each variant is one
//! atomic workspace command: it is either applied in full or rejected with a
//! `WorkspaceError` and no change.

use crate::model::{BreadcrumbItem, GroupId, PanelConfig, PanelId};
use crate::panel::{PanelKind, PresetId};
use crate::session::SessionSnapshot;

/// Panel lifecycle and per-panel state
#[derive(Debug, Clone, PartialEq)]
pub enum PanelMsg {
    /// Open a panel of `kind`, or focus the existing one for single-instance
    /// kinds. `target` forces a specific group.
    Add {
        kind: PanelKind,
        config: PanelConfig,
        target: Option<GroupId>,
    },
    /// Close a panel; closing an absent id is a no-op
    Close(PanelId),
    /// Close every panel and group
    CloseAll,
    /// Shallow-merge into the panel's opaque config
    SetConfig { panel: PanelId, config: PanelConfig },
    /// Record the panel body's scroll offset
    SetScroll { panel: PanelId, scroll_top: f64 },
    /// Enable or disable following the focused content location
    SetSync { panel: PanelId, sync: bool },
}

/// Per-panel drill-down history
#[derive(Debug, Clone, PartialEq)]
pub enum BreadcrumbMsg {
    Push { panel: PanelId, item: BreadcrumbItem },
    /// Drop the last step (no-op on an empty stack)
    Pop(PanelId),
    /// Keep steps `[0..=index]`, `-1` returns to the panel root
    Goto { panel: PanelId, index: i64 },
}

/// Group arrangement and sizing
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutMsg {
    /// Set one group's share; the neighbour absorbs the difference
    ResizeGroup {
        group: GroupId,
        size_percent: f64,
        container_width: f32,
    },
    /// Replace every group share at once
    ResizeGroups {
        sizes: Vec<f64>,
        container_width: f32,
    },
    /// Show a panel within its group
    SetActiveTab { group: GroupId, panel: PanelId },
    /// Move a panel out of its group into a new group right after it
    SplitPanel(PanelId),
    /// Move a panel into another existing group
    MovePanel { panel: PanelId, to_group: GroupId },
    /// Tear down every panel and rebuild from a preset
    ApplyPreset(PresetId),
}

/// Panel focus and the global content location
#[derive(Debug, Clone, PartialEq)]
pub enum FocusMsg {
    FocusPanel(PanelId),
    /// Focus the active panel of the next group (wraps)
    FocusNextGroup,
    /// Focus the active panel of the previous group (wraps)
    FocusPrevGroup,
    /// Set the focused content location (e.g. `2:255`)
    SetContentLocation(String),
    ClearContentLocation,
}

/// Workspace chrome outside the study region
#[derive(Debug, Clone, PartialEq)]
pub enum UiMsg {
    ToggleStudyRegion,
    ToggleBottomPanel,
    SetBottomPanelTab(Option<String>),
    SetBottomPanelSize(f64),
    ToggleLeftSidebar,
    SetLeftSidebarCollapsed(bool),
    SetLeftSidebarOpen(bool),
}

/// Whole-state replacement
#[derive(Debug, Clone, PartialEq)]
pub enum SessionMsg {
    /// Replace the persisted fields with a validated snapshot
    Hydrate(Box<SessionSnapshot>),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Panel messages (open, close, config, sync)
    Panel(PanelMsg),
    /// Breadcrumb messages (push, pop, goto)
    Breadcrumb(BreadcrumbMsg),
    /// Layout messages (resize, tabs, split, move, presets)
    Layout(LayoutMsg),
    /// Focus messages (panel focus, content location)
    Focus(FocusMsg),
    /// UI messages (bottom panel, sidebar, study region)
    Ui(UiMsg),
    /// Session messages (hydrate)
    Session(SessionMsg),
}
