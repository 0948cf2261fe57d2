//! Panel message handlers (open, close, per-panel state)

use crate::commands::Cmd;
use crate::error::{Result, WorkspaceError};
use crate::messages::PanelMsg;
use crate::model::{Detached, GroupId, PanelConfig, PanelId, Placement, WorkspaceState};
use crate::panel::PanelKind;

/// Handle panel messages
pub fn update_panel(state: &mut WorkspaceState, msg: PanelMsg) -> Result<Option<Cmd>> {
    match msg {
        PanelMsg::Add {
            kind,
            config,
            target,
        } => {
            let (_, changed) = open_panel(state, kind, config, target)?;
            Ok(changed.then_some(Cmd::Redraw))
        }

        PanelMsg::Close(id) => Ok(close_panel(state, id).then_some(Cmd::Redraw)),

        PanelMsg::CloseAll => {
            close_all_panels(state);
            Ok(Some(Cmd::Redraw))
        }

        PanelMsg::SetConfig { panel, config } => {
            state.panels.set_config(panel, config)?;
            Ok(Some(Cmd::Redraw))
        }

        PanelMsg::SetScroll { panel, scroll_top } => {
            state.panels.set_scroll_top(panel, scroll_top)?;
            Ok(None)
        }

        PanelMsg::SetSync { panel, sync } => {
            state.panels.set_sync_to_verse(panel, sync)?;
            Ok(Some(Cmd::Redraw))
        }
    }
}

/// Open a panel and focus it, returning its id.
///
/// For single-instance kinds that are already open this focuses the existing
/// panel and returns its id; `config` is ignored in that case.
pub fn add_panel(
    state: &mut WorkspaceState,
    kind: PanelKind,
    config: PanelConfig,
    target: Option<GroupId>,
) -> Result<PanelId> {
    open_panel(state, kind, config, target).map(|(id, _)| id)
}

/// `add_panel`, also reporting whether anything changed
fn open_panel(
    state: &mut WorkspaceState,
    kind: PanelKind,
    config: PanelConfig,
    target: Option<GroupId>,
) -> Result<(PanelId, bool)> {
    if let Some(group) = target {
        if state.groups.get(group).is_none() {
            return Err(WorkspaceError::group_not_found(group));
        }
    }

    let placement = state.groups.placement_for(
        kind,
        &state.panels,
        state.focused_panel_id,
        state.max_groups,
    );

    let join = match placement {
        Placement::Existing { panel, group } => {
            let already_shown = state.focused_panel_id == Some(panel)
                && state.study_region_open
                && state
                    .group(group)
                    .is_some_and(|g| g.active_panel_id == panel);
            state.groups.set_active(group, panel)?;
            state.focused_panel_id = Some(panel);
            state.study_region_open = true;
            tracing::debug!(%kind, %panel, %group, "single-instance kind already open, focusing");
            return Ok((panel, !already_shown));
        }
        Placement::Join(group) => target.or(Some(group)),
        Placement::NewGroup => target,
    };

    let id = state.panels.create(kind, config);
    let group = match join {
        Some(group) => {
            state.groups.add_panel_to_group(group, id)?;
            group
        }
        None => state.groups.create_group(id),
    };
    state.focused_panel_id = Some(id);
    state.study_region_open = true;

    tracing::debug!(%kind, panel = %id, %group, "panel opened");
    Ok((id, true))
}

/// Close a panel. Returns false if it did not exist.
///
/// If the closed panel had focus, focus moves to the new active panel of the
/// same group, else to the active panel of the preceding (or following)
/// sibling group, else to nothing.
pub fn close_panel(state: &mut WorkspaceState, id: PanelId) -> bool {
    if !state.panels.contains(id) {
        tracing::trace!(panel = %id, "close ignored, panel already gone");
        return false;
    }

    let detached = state.groups.detach(id);
    state.panels.destroy(id);

    if state.focused_panel_id == Some(id) {
        state.focused_panel_id = detached.and_then(|d| focus_after_close(state, d));
    }
    if state.groups.is_empty() {
        state.study_region_open = false;
    }

    tracing::debug!(panel = %id, ?detached, "panel closed");
    true
}

fn focus_after_close(state: &WorkspaceState, detached: Detached) -> Option<PanelId> {
    if !detached.group_removed {
        return state.group(detached.group).map(|g| g.active_panel_id);
    }
    let groups = state.study_groups();
    let sibling = detached
        .index
        .checked_sub(1)
        .and_then(|i| groups.get(i))
        .or_else(|| groups.get(detached.index));
    sibling.map(|g| g.active_panel_id)
}

/// Remove every panel and group. Id counters keep counting.
pub fn close_all_panels(state: &mut WorkspaceState) {
    state.panels.clear();
    state.groups.clear();
    state.focused_panel_id = None;
    state.study_region_open = false;
}
