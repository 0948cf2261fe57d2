//! Layout message handlers (resize, tabs, split, move, presets)

use crate::commands::Cmd;
use crate::error::{Result, WorkspaceError};
use crate::messages::LayoutMsg;
use crate::model::{GroupId, PanelId, WorkspaceState};

use super::preset::apply_preset;

/// Handle layout messages
pub fn update_layout(state: &mut WorkspaceState, msg: LayoutMsg) -> Result<Option<Cmd>> {
    match msg {
        LayoutMsg::ResizeGroup {
            group,
            size_percent,
            container_width,
        } => {
            let changed = resize_group(state, group, size_percent, container_width)?;
            Ok(changed.then_some(Cmd::Redraw))
        }

        LayoutMsg::ResizeGroups {
            sizes,
            container_width,
        } => {
            let panels = &state.panels;
            state
                .groups
                .resize_all(&sizes, |g| g.min_percent(panels, container_width))?;
            Ok(Some(Cmd::Redraw))
        }

        LayoutMsg::SetActiveTab { group, panel } => {
            state.groups.set_active(group, panel)?;
            state.focused_panel_id = Some(panel);
            Ok(Some(Cmd::Redraw))
        }

        LayoutMsg::SplitPanel(panel) => {
            let split = state.groups.split_out(panel, state.max_groups)?;
            if let Some(group) = split {
                state.focused_panel_id = Some(panel);
                tracing::debug!(%panel, %group, "panel split into new group");
            }
            Ok(split.map(|_| Cmd::Redraw))
        }

        LayoutMsg::MovePanel { panel, to_group } => {
            let moved = move_panel(state, panel, to_group)?;
            Ok(moved.then_some(Cmd::Redraw))
        }

        LayoutMsg::ApplyPreset(id) => {
            apply_preset(state, id);
            Ok(Some(Cmd::Redraw))
        }
    }
}

/// Set one group's share. The neighbour absorbs the difference.
///
/// `container_width` is the study region width in pixels, used to turn
/// each panel kind's minimum width into a percentage.
pub fn resize_group(
    state: &mut WorkspaceState,
    group: GroupId,
    size_percent: f64,
    container_width: f32,
) -> Result<bool> {
    let panels = &state.panels;
    let result = state
        .groups
        .resize(group, size_percent, |g| g.min_percent(panels, container_width));
    if let Err(ref e) = result {
        tracing::debug!(%group, size_percent, error = %e, "resize rejected");
    }
    result
}

/// Move a panel into another group and focus it
fn move_panel(state: &mut WorkspaceState, panel: PanelId, to_group: GroupId) -> Result<bool> {
    if !state.panels.contains(panel) {
        return Err(WorkspaceError::panel_not_found(panel));
    }
    let moved = state.groups.move_panel(panel, to_group)?;
    state.focused_panel_id = Some(panel);
    Ok(moved)
}
