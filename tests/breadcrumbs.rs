//! Tests for per-panel breadcrumb navigation

mod common;

use common::{add, crumb, crumb_ids, test_workspace};
use studydesk::model::{BreadcrumbItem, BreadcrumbKind, PanelId};
use studydesk::{PanelKind, WorkspaceError};

fn panel_with_abc() -> (studydesk::Workspace, PanelId) {
    let mut ws = test_workspace();
    let id = add(&mut ws, PanelKind::Commentary);
    for step in ["a", "b", "c"] {
        ws.push_breadcrumb(id, crumb(step)).unwrap();
    }
    (ws, id)
}

#[test]
fn test_goto_zero_then_root() {
    let (mut ws, id) = panel_with_abc();
    ws.goto_breadcrumb(id, 0).unwrap();
    assert_eq!(crumb_ids(ws.state(), id), vec!["a"]);
    ws.goto_breadcrumb(id, -1).unwrap();
    assert!(crumb_ids(ws.state(), id).is_empty());
}

#[test]
fn test_push_after_goto_appends_after_truncation() {
    let (mut ws, id) = panel_with_abc();
    ws.goto_breadcrumb(id, 1).unwrap();
    ws.push_breadcrumb(id, crumb("d")).unwrap();
    assert_eq!(crumb_ids(ws.state(), id), vec!["a", "b", "d"]);
}

#[test]
fn test_revisiting_records_a_new_step() {
    let (mut ws, id) = panel_with_abc();
    ws.push_breadcrumb(id, crumb("a")).unwrap();
    assert_eq!(crumb_ids(ws.state(), id), vec!["a", "b", "c", "a"]);
}

#[test]
fn test_goto_out_of_range_is_rejected() {
    let (mut ws, id) = panel_with_abc();
    assert_eq!(
        ws.goto_breadcrumb(id, 3),
        Err(WorkspaceError::IndexOutOfRange {
            panel: id,
            index: 3,
            len: 3
        })
    );
    assert!(ws.goto_breadcrumb(id, -2).is_err());
    assert_eq!(crumb_ids(ws.state(), id), vec!["a", "b", "c"]);
}

#[test]
fn test_pop_until_empty_then_noop() {
    let (mut ws, id) = panel_with_abc();
    for _ in 0..3 {
        ws.pop_breadcrumb(id).unwrap();
    }
    assert!(crumb_ids(ws.state(), id).is_empty());
    assert_eq!(ws.pop_breadcrumb(id), Ok(None));
}

#[test]
fn test_breadcrumbs_do_not_leak_across_panels_or_location() {
    let (mut ws, id) = panel_with_abc();
    let other = add(&mut ws, PanelKind::Translation);
    ws.set_focused_content_location("18:65").unwrap();
    ws.goto_breadcrumb(id, -1).unwrap();

    assert!(crumb_ids(ws.state(), other).is_empty());
    assert_eq!(
        ws.state().focused_content_location.as_deref(),
        Some("18:65")
    );
}

#[test]
fn test_location_change_does_not_push_breadcrumbs() {
    let mut ws = test_workspace();
    let id = add(&mut ws, PanelKind::Commentary);
    ws.set_focused_content_location("2:255").unwrap();
    ws.set_focused_content_location("2:256").unwrap();
    assert!(crumb_ids(ws.state(), id).is_empty());
}

#[test]
fn test_breadcrumb_on_missing_panel() {
    let mut ws = test_workspace();
    let item = BreadcrumbItem::new("x", "X", BreadcrumbKind::Note).with_resource(12);
    assert_eq!(
        ws.push_breadcrumb(PanelId(1), item),
        Err(WorkspaceError::panel_not_found(PanelId(1)))
    );
}
