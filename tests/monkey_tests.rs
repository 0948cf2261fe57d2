//! Monkey tests - random command sequences and edge cases
//!
//! These tests throw arbitrary sequences of workspace commands at the engine
//! and check that the layout invariants hold after every single one.

mod common;

use common::{add, assert_sizes, assert_valid, group_ids, sizes, test_workspace};
use proptest::prelude::*;
use std::collections::HashSet;
use studydesk::model::{GroupId, PanelConfig, PanelId, SIZE_EPSILON};
use studydesk::panel::PRESETS;
use studydesk::{PanelKind, Workspace};

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Add(PanelKind),
    Close(u64),
    Resize(u64, f64),
    Focus(u64),
    Split(u64),
    Move(u64, u64),
    Preset(usize),
    Push(u64),
    Goto(u64, i64),
    NextGroup,
}

fn kind() -> impl Strategy<Value = PanelKind> {
    proptest::sample::select(PanelKind::ALL.to_vec())
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => kind().prop_map(Op::Add),
        2 => (1u64..16).prop_map(Op::Close),
        3 => ((1u64..8), -10.0f64..120.0).prop_map(|(g, s)| Op::Resize(g, s)),
        1 => (1u64..16).prop_map(Op::Focus),
        1 => (1u64..16).prop_map(Op::Split),
        1 => ((1u64..16), (1u64..8)).prop_map(|(p, g)| Op::Move(p, g)),
        1 => (0usize..PRESETS.len()).prop_map(Op::Preset),
        1 => (1u64..16).prop_map(Op::Push),
        1 => ((1u64..16), -2i64..4).prop_map(|(p, i)| Op::Goto(p, i)),
        1 => Just(Op::NextGroup),
    ]
}

/// Apply an op, ignoring rejections (they must leave no trace)
fn apply(ws: &mut Workspace, op: &Op) {
    let before = ws.snapshot();
    let result = match op {
        Op::Add(kind) => ws.add_panel(*kind, PanelConfig::new()).map(|_| None),
        Op::Close(id) => ws.close_panel(PanelId(*id)),
        Op::Resize(g, s) => ws.resize_group(GroupId(*g), *s),
        Op::Focus(id) => ws.focus_panel(PanelId(*id)),
        Op::Split(id) => ws.split_panel(PanelId(*id)),
        Op::Move(p, g) => ws.move_panel(PanelId(*p), GroupId(*g)),
        Op::Preset(i) => ws.apply_preset(PRESETS[*i].id),
        Op::Push(id) => ws.push_breadcrumb(PanelId(*id), common::crumb("step")),
        Op::Goto(id, i) => ws.goto_breadcrumb(PanelId(*id), *i),
        Op::NextGroup => ws.focus_next_group(),
    };
    if result.is_err() {
        assert_eq!(*before, *ws.snapshot(), "rejected {:?} changed state", op);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Invariants under random command sequences
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn layout_invariants_hold(ops in proptest::collection::vec(op(), 1..60)) {
        let mut ws = test_workspace();
        for op in &ops {
            apply(&mut ws, op);
            let state = ws.state();
            prop_assert!(state.validate().is_ok(), "after {:?}: {:?}", op, state.validate());
            if !state.study_groups().is_empty() {
                let total: f64 = sizes(state).iter().sum();
                prop_assert!((total - 100.0).abs() <= SIZE_EPSILON, "sum {} after {:?}", total, op);
            }
        }
    }
}

proptest! {
    #[test]
    fn panel_ids_are_unique_and_counted(kinds in proptest::collection::vec(kind(), 1..30)) {
        let mut ws = test_workspace();
        let mut created = HashSet::new();
        for kind in kinds {
            let before = ws.state().panels.next_panel_id();
            let id = ws.add_panel(kind, PanelConfig::new()).unwrap();
            let after = ws.state().panels.next_panel_id();
            if after == before + 1 {
                prop_assert!(created.insert(id), "{} allocated twice", id);
            } else {
                prop_assert_eq!(after, before);
                prop_assert!(created.contains(&id));
            }
        }
        prop_assert_eq!(ws.state().panels.next_panel_id(), 1 + created.len() as u64);
    }
}

proptest! {
    #[test]
    fn single_instance_kinds_stay_single(kinds in proptest::collection::vec(kind(), 1..30)) {
        let mut ws = test_workspace();
        for kind in kinds {
            ws.add_panel(kind, PanelConfig::new()).unwrap();
        }
        for kind in PanelKind::ALL {
            if !kind.info().allow_multiple {
                let count = ws.state().panels.iter().filter(|p| p.kind == kind).count();
                prop_assert!(count <= 1, "{} open {} times", kind, count);
            }
        }
    }
}

proptest! {
    #[test]
    fn close_twice_is_noop(ops in proptest::collection::vec(op(), 0..30), target in 1u64..16) {
        let mut ws = test_workspace();
        for op in &ops {
            apply(&mut ws, op);
        }
        ws.close_panel(PanelId(target)).unwrap();
        let once = ws.snapshot();
        prop_assert_eq!(ws.close_panel(PanelId(target)).unwrap(), None);
        prop_assert_eq!(&*once, &*ws.snapshot());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Edge cases
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn test_commentary_notes_commentary_sequence() {
    let mut ws = test_workspace();

    let first = add(&mut ws, PanelKind::Commentary);
    assert_eq!(first, PanelId(1));
    assert_eq!(group_ids(ws.state()), vec![GroupId(1)]);
    assert_eq!(ws.state().study_groups()[0].panel_ids, vec![first]);
    assert_sizes(ws.state(), &[100.0]);

    let notes = add(&mut ws, PanelKind::Notes);
    assert_eq!(group_ids(ws.state()), vec![GroupId(1), GroupId(2)]);
    assert_sizes(ws.state(), &[50.0, 50.0]);

    let third = add(&mut ws, PanelKind::Commentary);
    assert_eq!(third, PanelId(3));
    assert_eq!(ws.state().study_groups().len(), 2);
    // Joins the focused panel's group
    assert_eq!(
        ws.state().group_of(third).map(|g| g.id),
        ws.state().group_of(notes).map(|g| g.id)
    );
    assert_valid(ws.state());
}

#[test]
fn test_hundreds_of_adds_and_closes() {
    let mut ws = test_workspace();
    for round in 0..200u64 {
        let id = add(&mut ws, PanelKind::ALL[(round % 8) as usize]);
        if round % 3 == 0 {
            ws.close_panel(id).unwrap();
        }
    }
    assert_valid(ws.state());
    assert!(ws.state().study_groups().len() <= 4);
}

#[test]
fn test_resize_to_exact_bounds() {
    let mut ws = test_workspace();
    add(&mut ws, PanelKind::Notes);
    add(&mut ws, PanelKind::CrossReference);
    let g = group_ids(ws.state())[0];
    // 240 / 1200 = 20%: exactly at the minimum on both sides
    ws.resize_group(g, 80.0).unwrap();
    assert_sizes(ws.state(), &[80.0, 20.0]);
    ws.resize_group(g, 20.0).unwrap();
    assert_sizes(ws.state(), &[20.0, 80.0]);
    assert!(ws.resize_group(g, 0.0).is_err());
    assert!(ws.resize_group(g, -5.0).is_err());
}

#[test]
fn test_lone_group_resize_stays_full() {
    let mut ws = test_workspace();
    add(&mut ws, PanelKind::Notes);
    let g = group_ids(ws.state())[0];
    assert_eq!(ws.resize_group(g, 10.0), Ok(None));
    assert_sizes(ws.state(), &[100.0]);
}
