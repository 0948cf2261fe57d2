//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Each handler
//! either applies its message in full or returns a `WorkspaceError`; the
//! controller discards the working copy on error.

mod breadcrumb;
mod focus;
pub mod layout;
mod panel;
mod preset;
mod ui;

use crate::commands::Cmd;
use crate::error::Result;
use crate::messages::{Msg, SessionMsg};
use crate::model::WorkspaceState;

#[cfg(debug_assertions)]
use crate::tracing::LayoutSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use breadcrumb::update_breadcrumb;
pub use focus::{focus_panel, update_focus};
pub use layout::{resize_group, update_layout};
pub use panel::{add_panel, close_all_panels, close_panel, update_panel};
pub use preset::apply_preset;
pub(crate) use preset::apply_layout;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation and invariant
/// checks. In release builds, it's a direct dispatch.
#[inline]
pub fn update(state: &mut WorkspaceState, msg: Msg) -> Result<Option<Cmd>> {
    #[cfg(debug_assertions)]
    {
        update_traced(state, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(state, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(state: &mut WorkspaceState, msg: Msg) -> Result<Option<Cmd>> {
    match msg {
        Msg::Panel(m) => panel::update_panel(state, m),
        Msg::Breadcrumb(m) => breadcrumb::update_breadcrumb(state, m),
        Msg::Layout(m) => layout::update_layout(state, m),
        Msg::Focus(m) => focus::update_focus(state, m),
        Msg::Ui(m) => ui::update_ui(state, m),
        Msg::Session(m) => update_session(state, m),
    }
}

fn update_session(state: &mut WorkspaceState, msg: SessionMsg) -> Result<Option<Cmd>> {
    match msg {
        SessionMsg::Hydrate(snapshot) => {
            *state = snapshot.into_state(state.max_groups)?;
            tracing::info!(
                panels = state.panels.len(),
                groups = state.study_groups().len(),
                "workspace hydrated"
            );
            Ok(Some(Cmd::Redraw))
        }
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after layout state and logs diffs for debugging.
/// Rejected messages are logged and leave nothing to check.
#[cfg(debug_assertions)]
fn update_traced(state: &mut WorkspaceState, msg: Msg) -> Result<Option<Cmd>> {
    // Scroll offsets arrive on every frame while scrolling
    let is_noisy = matches!(
        &msg,
        Msg::Panel(crate::messages::PanelMsg::SetScroll { .. })
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = LayoutSnapshot::from_state(state);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(state, msg);

    match &result {
        Ok(_) => {
            let after = LayoutSnapshot::from_state(state);
            if let Some(diff) = before.diff(&after) {
                debug!(target: "layout", %diff, "state changed");
            }
            state.assert_invariants_with_context(&msg_name);
        }
        Err(e) => debug!(target: "message", msg = %msg_name, error = %e, "rejected"),
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Panel::Close(PanelId(3))`
/// - `Focus::SetContentLocation("2:255")`
/// - `Ui::ToggleBottomPanel`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Panel(m) => format!("Panel::{:?}", m),
        Msg::Breadcrumb(m) => format!("Breadcrumb::{:?}", m),
        Msg::Layout(m) => format!("Layout::{:?}", m),
        Msg::Focus(m) => format!("Focus::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::Session(_) => "Session::Hydrate".to_string(),
    }
}
