//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use studydesk::model::{
    BreadcrumbItem, BreadcrumbKind, GroupId, PanelConfig, PanelId, WorkspaceState,
};
use studydesk::{PanelKind, Workspace, WorkspaceConfig};

/// Container width used by the tests: 240px panels need 20%, 320px need 26.67%
pub const TEST_WIDTH: f32 = 1200.0;

/// Create an empty workspace with default limits
pub fn test_workspace() -> Workspace {
    let mut ws = Workspace::new(&WorkspaceConfig::default());
    ws.set_container_width(TEST_WIDTH);
    ws
}

/// Create an empty workspace with a custom group cap
pub fn test_workspace_with_cap(max_groups: usize) -> Workspace {
    let config = WorkspaceConfig {
        max_groups,
        ..Default::default()
    };
    let mut ws = Workspace::new(&config);
    ws.set_container_width(TEST_WIDTH);
    ws
}

/// Add a panel with an empty config
pub fn add(ws: &mut Workspace, kind: PanelKind) -> PanelId {
    ws.add_panel(kind, PanelConfig::new())
        .unwrap_or_else(|e| panic!("add {} failed: {}", kind, e))
}

/// Group shares in sibling order
pub fn sizes(state: &WorkspaceState) -> Vec<f64> {
    state.study_groups().iter().map(|g| g.size_percent).collect()
}

/// Compare group shares with a small tolerance
pub fn assert_sizes(state: &WorkspaceState, expected: &[f64]) {
    let actual = sizes(state);
    assert_eq!(
        actual.len(),
        expected.len(),
        "group count: {:?} vs {:?}",
        actual,
        expected
    );
    for (a, e) in actual.iter().zip(expected) {
        assert!(
            (a - e).abs() < 1e-6,
            "sizes {:?}, expected {:?}",
            actual,
            expected
        );
    }
}

/// Group ids in sibling order
pub fn group_ids(state: &WorkspaceState) -> Vec<GroupId> {
    state.study_groups().iter().map(|g| g.id).collect()
}

/// Id of the group holding a panel
pub fn group_of(state: &WorkspaceState, panel: PanelId) -> GroupId {
    state
        .group_of(panel)
        .unwrap_or_else(|| panic!("{} is not in any group", panel))
        .id
}

/// Breadcrumb step with matching id and label
pub fn crumb(id: &str) -> BreadcrumbItem {
    BreadcrumbItem::new(id, id, BreadcrumbKind::Commentary)
}

/// Breadcrumb ids of a panel, oldest first
pub fn crumb_ids(state: &WorkspaceState, panel: PanelId) -> Vec<String> {
    state
        .panel(panel)
        .expect("panel exists")
        .breadcrumbs
        .items()
        .iter()
        .map(|i| i.id.clone())
        .collect()
}

/// Every layout invariant holds
pub fn assert_valid(state: &WorkspaceState) {
    if let Err(e) = state.validate() {
        panic!("invalid state: {}\n{:#?}", e, state);
    }
}
