//! Benchmarks for workspace layout operations
//!
//! Run with: cargo bench --bench workspace

use studydesk::model::{GroupId, PanelConfig, PanelId};
use studydesk::{PanelKind, PresetId, Workspace, WorkspaceConfig};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn make_workspace() -> Workspace {
    let mut ws = Workspace::new(&WorkspaceConfig::default());
    ws.set_container_width(1600.0);
    ws
}

/// Workspace with `count` commentary panels and a full row of groups
fn populated(count: usize) -> Workspace {
    let mut ws = make_workspace();
    for kind in [PanelKind::Notes, PanelKind::CrossReference, PanelKind::Translation] {
        let _ = ws.add_panel(kind, PanelConfig::new());
    }
    for _ in 0..count {
        let _ = ws.add_panel(PanelKind::Commentary, PanelConfig::new());
    }
    ws
}

// ============================================================================
// Panel lifecycle
// ============================================================================

#[divan::bench(args = [1, 10, 100])]
fn add_panels(count: usize) {
    let mut ws = make_workspace();
    for _ in 0..count {
        divan::black_box(ws.add_panel(PanelKind::Commentary, PanelConfig::new()).ok());
    }
}

#[divan::bench(args = [10, 100])]
fn close_all_one_by_one(bencher: divan::Bencher, count: usize) {
    bencher
        .with_inputs(|| populated(count))
        .bench_local_values(|mut ws| {
            let ids: Vec<PanelId> = ws.state().panels.iter().map(|p| p.id).collect();
            for id in ids {
                let _ = ws.close_panel(id);
            }
            ws
        });
}

// ============================================================================
// Layout
// ============================================================================

#[divan::bench]
fn resize_group(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| populated(4))
        .bench_local_refs(|ws| divan::black_box(ws.resize_group(GroupId(1), 40.0).ok()));
}

#[divan::bench]
fn apply_preset(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| populated(10))
        .bench_local_refs(|ws| divan::black_box(ws.apply_preset(PresetId::Research).ok()));
}

#[divan::bench(args = [10, 100])]
fn validate_state(bencher: divan::Bencher, count: usize) {
    let ws = populated(count);
    bencher.bench_local(|| divan::black_box(ws.state().validate().is_ok()));
}

// ============================================================================
// Location sync
// ============================================================================

#[divan::bench(args = [10, 100])]
fn set_content_location(bencher: divan::Bencher, count: usize) {
    bencher
        .with_inputs(|| populated(count))
        .bench_local_refs(|ws| divan::black_box(ws.set_focused_content_location("2:255").ok()));
}

#[divan::bench]
fn session_round_trip(bencher: divan::Bencher) {
    let ws = populated(20);
    bencher.bench_local(|| {
        let json = serde_json::to_string(&ws.session()).unwrap_or_default();
        divan::black_box(json)
    });
}
