//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging layout
//! and focus transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=layout=debug,message=debug` - scoped filtering
//! - `RUST_LOG=studydesk::update=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/studydesk/logs/studydesk.log` with daily
//! rotation. File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{GroupId, PanelId, WorkspaceState};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and goes to stderr so that it never
/// mixes with snapshots printed on stdout.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "studydesk.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of the layout for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot {
    pub panel_count: usize,
    pub focused: Option<PanelId>,
    pub location: Option<String>,
    pub groups: Vec<GroupInfo>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupInfo {
    pub id: GroupId,
    pub panels: Vec<PanelId>,
    pub active: PanelId,
    pub size_percent: f64,
}

impl LayoutSnapshot {
    pub fn from_state(state: &WorkspaceState) -> Self {
        Self {
            panel_count: state.panels.len(),
            focused: state.focused_panel_id,
            location: state.focused_content_location.clone(),
            groups: state
                .study_groups()
                .iter()
                .map(|g| GroupInfo {
                    id: g.id,
                    panels: g.panel_ids.clone(),
                    active: g.active_panel_id,
                    size_percent: g.size_percent,
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &LayoutSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.panel_count != other.panel_count {
            changes.push(format!(
                "panels: {} → {}",
                self.panel_count, other.panel_count
            ));
        }
        if self.focused != other.focused {
            changes.push(format!(
                "focus: {} → {}",
                describe(self.focused),
                describe(other.focused)
            ));
        }
        if self.location != other.location {
            changes.push(format!(
                "location: {} → {}",
                self.location.as_deref().unwrap_or("none"),
                other.location.as_deref().unwrap_or("none")
            ));
        }

        if self.groups.len() != other.groups.len() {
            changes.push(format!(
                "groups: {} → {}",
                self.groups.len(),
                other.groups.len()
            ));
        } else {
            for (before, after) in self.groups.iter().zip(&other.groups) {
                if before.id != after.id {
                    changes.push(format!("{} replaced by {}", before.id, after.id));
                    continue;
                }
                if before.panels != after.panels {
                    changes.push(format!(
                        "{}: {} → {} tabs",
                        after.id,
                        before.panels.len(),
                        after.panels.len()
                    ));
                }
                if before.active != after.active {
                    changes.push(format!(
                        "{}: active {} → {}",
                        after.id, before.active, after.active
                    ));
                }
                if (before.size_percent - after.size_percent).abs() > f64::EPSILON {
                    changes.push(format!(
                        "{}: {:.2}% → {:.2}%",
                        after.id, before.size_percent, after.size_percent
                    ));
                }
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

fn describe(panel: Option<PanelId>) -> String {
    panel.map_or_else(|| "none".to_string(), |p| p.to_string())
}
