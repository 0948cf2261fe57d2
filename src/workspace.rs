//! Workspace controller
//!
//! Owns the current `WorkspaceState` behind an `Arc` and applies commands as
//! atomic transitions: each message runs against a private copy, which only
//! replaces the published snapshot if the update succeeds and actually
//! changed something. Observers are called with the new snapshot after every
//! committed change.

use std::fmt;
use std::sync::Arc;

use crate::commands::Cmd;
use crate::config::WorkspaceConfig;
use crate::error::Result;
use crate::messages::{BreadcrumbMsg, FocusMsg, LayoutMsg, Msg, PanelMsg, SessionMsg, UiMsg};
use crate::model::{BreadcrumbItem, GroupId, PanelConfig, PanelId, WorkspaceState};
use crate::panel::{PanelKind, PresetId};
use crate::session::SessionSnapshot;
use crate::update;

/// Handle returned by `Workspace::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&Arc<WorkspaceState>)>;

/// The workspace layout engine
pub struct Workspace {
    state: Arc<WorkspaceState>,
    /// Study region width in pixels for minimum-width checks
    container_width: f32,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl fmt::Debug for Workspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workspace")
            .field("state", &self.state)
            .field("container_width", &self.container_width)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(&WorkspaceConfig::default())
    }
}

impl Workspace {
    pub fn new(config: &WorkspaceConfig) -> Self {
        Self {
            state: Arc::new(WorkspaceState::new(config.max_groups)),
            container_width: config.container_width_px,
            observers: Vec::new(),
            next_subscription: 1,
        }
    }

    // =========================================================================
    // Reading
    // =========================================================================

    /// Shared handle to the current immutable snapshot
    pub fn snapshot(&self) -> Arc<WorkspaceState> {
        Arc::clone(&self.state)
    }

    pub fn state(&self) -> &WorkspaceState {
        &self.state
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    /// Update the study region width used by `resize_group`
    pub fn set_container_width(&mut self, width: f32) {
        self.container_width = width;
    }

    /// Serialisable copy of the persisted fields
    pub fn session(&self) -> SessionSnapshot {
        SessionSnapshot::from_state(&self.state)
    }

    // =========================================================================
    // Observers
    // =========================================================================

    /// Register a callback invoked with every committed snapshot
    pub fn subscribe(&mut self, observer: impl FnMut(&Arc<WorkspaceState>) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns whether the subscription existed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        let snapshot = Arc::clone(&self.state);
        for (_, observer) in &mut self.observers {
            observer(&snapshot);
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Apply one message atomically
    pub fn dispatch(&mut self, msg: Msg) -> Result<Option<Cmd>> {
        self.commit(|state| update::update(state, msg))
    }

    /// Run `f` against a copy of the state and publish the copy on success
    fn commit<T>(&mut self, f: impl FnOnce(&mut WorkspaceState) -> Result<T>) -> Result<T> {
        let mut next = (*self.state).clone();
        let out = f(&mut next)?;
        if next != *self.state {
            self.state = Arc::new(next);
            self.notify();
        }
        Ok(out)
    }

    /// Open a panel (or focus the existing one for single-instance kinds)
    pub fn add_panel(&mut self, kind: PanelKind, config: PanelConfig) -> Result<PanelId> {
        self.add_panel_to(kind, config, None)
    }

    /// Open a panel, optionally forcing the group it joins
    pub fn add_panel_to(
        &mut self,
        kind: PanelKind,
        config: PanelConfig,
        target: Option<GroupId>,
    ) -> Result<PanelId> {
        self.commit(|state| {
            let id = update::add_panel(state, kind, config, target)?;
            state.assert_invariants_with_context("Panel::Add");
            Ok(id)
        })
    }

    /// Close a panel. Closing an absent panel is a no-op.
    pub fn close_panel(&mut self, id: PanelId) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Panel(PanelMsg::Close(id)))
    }

    pub fn close_all_panels(&mut self) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Panel(PanelMsg::CloseAll))
    }

    pub fn set_panel_config(&mut self, panel: PanelId, config: PanelConfig) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Panel(PanelMsg::SetConfig { panel, config }))
    }

    pub fn set_panel_scroll(&mut self, panel: PanelId, scroll_top: f64) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Panel(PanelMsg::SetScroll { panel, scroll_top }))
    }

    pub fn set_panel_sync(&mut self, panel: PanelId, sync: bool) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Panel(PanelMsg::SetSync { panel, sync }))
    }

    pub fn push_breadcrumb(&mut self, panel: PanelId, item: BreadcrumbItem) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Breadcrumb(BreadcrumbMsg::Push { panel, item }))
    }

    pub fn pop_breadcrumb(&mut self, panel: PanelId) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Breadcrumb(BreadcrumbMsg::Pop(panel)))
    }

    pub fn goto_breadcrumb(&mut self, panel: PanelId, index: i64) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Breadcrumb(BreadcrumbMsg::Goto { panel, index }))
    }

    pub fn focus_panel(&mut self, id: PanelId) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Focus(FocusMsg::FocusPanel(id)))
    }

    pub fn focus_next_group(&mut self) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Focus(FocusMsg::FocusNextGroup))
    }

    pub fn focus_prev_group(&mut self) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Focus(FocusMsg::FocusPrevGroup))
    }

    /// Set the focused content location; the command names the panels to
    /// refresh.
    pub fn set_focused_content_location(&mut self, key: impl Into<String>) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Focus(FocusMsg::SetContentLocation(key.into())))
    }

    pub fn clear_focused_content_location(&mut self) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Focus(FocusMsg::ClearContentLocation))
    }

    /// Resize one group against the current container width
    pub fn resize_group(&mut self, group: GroupId, size_percent: f64) -> Result<Option<Cmd>> {
        let container_width = self.container_width;
        self.dispatch(Msg::Layout(LayoutMsg::ResizeGroup {
            group,
            size_percent,
            container_width,
        }))
    }

    pub fn resize_groups(&mut self, sizes: Vec<f64>) -> Result<Option<Cmd>> {
        let container_width = self.container_width;
        self.dispatch(Msg::Layout(LayoutMsg::ResizeGroups {
            sizes,
            container_width,
        }))
    }

    pub fn set_active_tab(&mut self, group: GroupId, panel: PanelId) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Layout(LayoutMsg::SetActiveTab { group, panel }))
    }

    pub fn split_panel(&mut self, panel: PanelId) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Layout(LayoutMsg::SplitPanel(panel)))
    }

    pub fn move_panel(&mut self, panel: PanelId, to_group: GroupId) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Layout(LayoutMsg::MovePanel { panel, to_group }))
    }

    pub fn apply_preset(&mut self, id: PresetId) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Layout(LayoutMsg::ApplyPreset(id)))
    }

    pub fn toggle_study_region(&mut self) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Ui(UiMsg::ToggleStudyRegion))
    }

    pub fn toggle_bottom_panel(&mut self) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Ui(UiMsg::ToggleBottomPanel))
    }

    pub fn set_bottom_panel_tab(&mut self, tab: Option<String>) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Ui(UiMsg::SetBottomPanelTab(tab)))
    }

    pub fn set_bottom_panel_size(&mut self, percent: f64) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Ui(UiMsg::SetBottomPanelSize(percent)))
    }

    pub fn toggle_left_sidebar(&mut self) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Ui(UiMsg::ToggleLeftSidebar))
    }

    pub fn set_left_sidebar_collapsed(&mut self, collapsed: bool) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Ui(UiMsg::SetLeftSidebarCollapsed(collapsed)))
    }

    pub fn set_left_sidebar_open(&mut self, open: bool) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Ui(UiMsg::SetLeftSidebarOpen(open)))
    }

    /// Replace the persisted fields with a validated snapshot
    pub fn hydrate(&mut self, snapshot: SessionSnapshot) -> Result<Option<Cmd>> {
        self.dispatch(Msg::Session(SessionMsg::Hydrate(Box::new(snapshot))))
    }
}
