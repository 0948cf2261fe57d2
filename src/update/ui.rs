//! UI message handlers (study region, bottom panel, left sidebar)
//!
//! These are direct field mutations with no cross-invariant effects.

use crate::commands::Cmd;
use crate::error::Result;
use crate::messages::UiMsg;
use crate::model::WorkspaceState;

/// Handle UI messages
pub fn update_ui(state: &mut WorkspaceState, msg: UiMsg) -> Result<Option<Cmd>> {
    let cmd = match msg {
        UiMsg::ToggleStudyRegion => {
            // An empty region has nothing to show
            if !state.study_region_open && state.groups.is_empty() {
                return Ok(None);
            }
            state.study_region_open = !state.study_region_open;
            Some(Cmd::Redraw)
        }

        UiMsg::ToggleBottomPanel => {
            state.bottom_panel.toggle();
            Some(Cmd::Redraw)
        }

        UiMsg::SetBottomPanelTab(tab) => {
            state.bottom_panel.active_tab = tab;
            Some(Cmd::Redraw)
        }

        UiMsg::SetBottomPanelSize(percent) => {
            if !percent.is_finite() {
                return Ok(None);
            }
            state.bottom_panel.size_percent = percent.clamp(0.0, 100.0);
            Some(Cmd::Redraw)
        }

        UiMsg::ToggleLeftSidebar => {
            state.left_sidebar.open = !state.left_sidebar.open;
            Some(Cmd::Redraw)
        }

        UiMsg::SetLeftSidebarCollapsed(collapsed) => {
            state.left_sidebar.collapsed = collapsed;
            Some(Cmd::Redraw)
        }

        UiMsg::SetLeftSidebarOpen(open) => {
            state.left_sidebar.open = open;
            Some(Cmd::Redraw)
        }
    };
    Ok(cmd)
}
