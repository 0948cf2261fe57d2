//! Preset application

use crate::model::{PanelConfig, PanelId, WorkspaceState};
use crate::panel::{PanelKind, PresetId};

/// Replace every panel and group with the arrangement of a preset
pub fn apply_preset(state: &mut WorkspaceState, id: PresetId) {
    tracing::info!(preset = %id, "applying preset");
    apply_layout(state, id.preset().panel_kinds);
}

/// Tear down all panels and groups, then build one group per non-empty row.
///
/// Groups are sized evenly and each shows its first panel. Focus goes to the
/// first created panel; with no rows the study region closes. Rows past
/// `max_groups` are dropped. Id counters continue from their current values.
pub(crate) fn apply_layout(state: &mut WorkspaceState, rows: &[&[PanelKind]]) {
    state.panels.clear();
    state.groups.clear();

    let rows: Vec<&[PanelKind]> = rows
        .iter()
        .copied()
        .filter(|row| !row.is_empty())
        .take(state.max_groups)
        .collect();

    let share = if rows.is_empty() {
        0.0
    } else {
        100.0 / rows.len() as f64
    };

    let mut first: Option<PanelId> = None;
    for row in rows {
        let ids: Vec<PanelId> = row
            .iter()
            .map(|kind| state.panels.create(*kind, PanelConfig::new()))
            .collect();
        first = first.or_else(|| ids.first().copied());
        state.groups.push_group(ids, share);
    }

    state.focused_panel_id = first;
    state.study_region_open = !state.groups.is_empty();
}
