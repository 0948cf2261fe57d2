//! Breadcrumb message handlers
//!
//! Navigation history is private to one panel: nothing here touches other
//! panels or the focused content location.

use crate::commands::Cmd;
use crate::error::Result;
use crate::messages::BreadcrumbMsg;
use crate::model::WorkspaceState;

pub fn update_breadcrumb(state: &mut WorkspaceState, msg: BreadcrumbMsg) -> Result<Option<Cmd>> {
    match msg {
        BreadcrumbMsg::Push { panel, item } => {
            tracing::trace!(%panel, step = %item.id, "breadcrumb push");
            state.panels.push_breadcrumb(panel, item)?;
            Ok(Some(Cmd::Redraw))
        }

        BreadcrumbMsg::Pop(panel) => {
            let popped = state.panels.pop_breadcrumb(panel)?;
            Ok(popped.then_some(Cmd::Redraw))
        }

        BreadcrumbMsg::Goto { panel, index } => {
            state.panels.goto_breadcrumb(panel, index)?;
            Ok(Some(Cmd::Redraw))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WorkspaceError;
    use crate::model::{BreadcrumbItem, BreadcrumbKind, PanelConfig, PanelId};
    use crate::panel::PanelKind;

    fn step(id: &str) -> BreadcrumbItem {
        BreadcrumbItem::new(id, id, BreadcrumbKind::RelatedText)
    }

    fn ids(state: &WorkspaceState, panel: PanelId) -> Vec<String> {
        state.panel(panel).unwrap().breadcrumbs.items().iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_push_after_goto_does_not_restore_truncated_steps() {
        let mut state = WorkspaceState::default();
        let p = state.panels.create(PanelKind::Commentary, PanelConfig::new());
        for id in ["a", "b", "c"] {
            update_breadcrumb(&mut state, BreadcrumbMsg::Push { panel: p, item: step(id) }).unwrap();
        }
        update_breadcrumb(&mut state, BreadcrumbMsg::Goto { panel: p, index: 0 }).unwrap();
        assert_eq!(ids(&state, p), vec!["a"]);
        update_breadcrumb(&mut state, BreadcrumbMsg::Push { panel: p, item: step("d") }).unwrap();
        assert_eq!(ids(&state, p), vec!["a", "d"]);
    }

    #[test]
    fn test_pop_on_empty_returns_no_command() {
        let mut state = WorkspaceState::default();
        let p = state.panels.create(PanelKind::Notes, PanelConfig::new());
        assert_eq!(update_breadcrumb(&mut state, BreadcrumbMsg::Pop(p)), Ok(None));
    }

    #[test]
    fn test_breadcrumbs_are_per_panel() {
        let mut state = WorkspaceState::default();
        let a = state.panels.create(PanelKind::Commentary, PanelConfig::new());
        let b = state.panels.create(PanelKind::Commentary, PanelConfig::new());
        update_breadcrumb(&mut state, BreadcrumbMsg::Push { panel: a, item: step("x") }).unwrap();
        assert!(ids(&state, b).is_empty());
        assert_eq!(
            update_breadcrumb(&mut state, BreadcrumbMsg::Goto { panel: b, index: 0 }),
            Err(WorkspaceError::IndexOutOfRange { panel: b, index: 0, len: 0 })
        );
    }
}
