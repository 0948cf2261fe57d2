//! Focus message handlers (panel focus, focused content location)

use crate::commands::Cmd;
use crate::error::{Result, WorkspaceError};
use crate::messages::FocusMsg;
use crate::model::{PanelId, WorkspaceState};

pub fn update_focus(state: &mut WorkspaceState, msg: FocusMsg) -> Result<Option<Cmd>> {
    match msg {
        FocusMsg::FocusPanel(id) => {
            focus_panel(state, id)?;
            Ok(Some(Cmd::Redraw))
        }

        FocusMsg::FocusNextGroup => Ok(focus_adjacent_group(state, true).then_some(Cmd::Redraw)),

        FocusMsg::FocusPrevGroup => Ok(focus_adjacent_group(state, false).then_some(Cmd::Redraw)),

        FocusMsg::SetContentLocation(key) => Ok(Some(set_content_location(state, Some(key)))),

        FocusMsg::ClearContentLocation => Ok(Some(set_content_location(state, None))),
    }
}

/// Focus a panel and make it the visible tab of its group
pub fn focus_panel(state: &mut WorkspaceState, id: PanelId) -> Result<()> {
    let group = state
        .group_of(id)
        .map(|g| g.id)
        .ok_or_else(|| WorkspaceError::panel_not_found(id))?;
    state.groups.set_active(group, id)?;
    state.focused_panel_id = Some(id);
    Ok(())
}

/// Move focus to the active panel of the next/previous group, wrapping.
///
/// With no focused panel the first (or last) group is picked.
fn focus_adjacent_group(state: &mut WorkspaceState, next: bool) -> bool {
    let target = match state.focused_group() {
        Some(group) => state.groups.adjacent(group.id, next),
        None if next => state.study_groups().first(),
        None => state.study_groups().last(),
    };
    let Some(panel) = target.map(|g| g.active_panel_id) else {
        return false;
    };
    let changed = state.focused_panel_id != Some(panel);
    state.focused_panel_id = Some(panel);
    changed
}

/// Update the global content location.
///
/// Panels are never modified here. The returned command lists the panels
/// that follow the location so the content layer can refresh them.
fn set_content_location(state: &mut WorkspaceState, key: Option<String>) -> Cmd {
    tracing::debug!(location = ?key, "focused content location");
    state.focused_content_location = key.clone();
    Cmd::SyncPanels {
        location: key,
        panel_ids: state.panels.synced_panel_ids(),
    }
}
