//! Command scripts for the `studydesk` binary
//!
//! A script is a YAML list of steps, each tagged by `op`:
//!
//! ```yaml
//! - op: add_panel
//!   kind: commentary
//! - op: set_location
//!   key: "2:255"
//! - op: resize_group
//!   group: 1
//!   size_percent: 60
//! ```
//!
//! Steps map one-to-one onto `Msg` values. A rejected step leaves the
//! workspace unchanged and the run continues.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::commands::Cmd;
use crate::error::WorkspaceError;
use crate::messages::{BreadcrumbMsg, FocusMsg, LayoutMsg, Msg, PanelMsg, UiMsg};
use crate::model::{BreadcrumbItem, GroupId, PanelConfig, PanelId};
use crate::panel::{PanelKind, PresetId};
use crate::workspace::Workspace;

/// One scripted command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptStep {
    AddPanel {
        kind: PanelKind,
        #[serde(default)]
        config: PanelConfig,
        #[serde(default)]
        group: Option<GroupId>,
    },
    ClosePanel {
        panel: PanelId,
    },
    CloseAllPanels,
    FocusPanel {
        panel: PanelId,
    },
    FocusNextGroup,
    FocusPrevGroup,
    SetLocation {
        key: String,
    },
    ClearLocation,
    PushBreadcrumb {
        panel: PanelId,
        item: BreadcrumbItem,
    },
    PopBreadcrumb {
        panel: PanelId,
    },
    GotoBreadcrumb {
        panel: PanelId,
        index: i64,
    },
    SetPanelConfig {
        panel: PanelId,
        config: PanelConfig,
    },
    SetPanelScroll {
        panel: PanelId,
        scroll_top: f64,
    },
    SetPanelSync {
        panel: PanelId,
        sync: bool,
    },
    ResizeGroup {
        group: GroupId,
        size_percent: f64,
        /// Defaults to the configured container width
        #[serde(default)]
        container_width: Option<f32>,
    },
    ResizeGroups {
        sizes: Vec<f64>,
        #[serde(default)]
        container_width: Option<f32>,
    },
    SetActiveTab {
        group: GroupId,
        panel: PanelId,
    },
    SplitPanel {
        panel: PanelId,
    },
    MovePanel {
        panel: PanelId,
        to_group: GroupId,
    },
    ApplyPreset {
        preset: PresetId,
    },
    ToggleStudyRegion,
    ToggleBottomPanel,
    SetBottomPanelTab {
        #[serde(default)]
        tab: Option<String>,
    },
    SetBottomPanelSize {
        percent: f64,
    },
    ToggleLeftSidebar,
    SetLeftSidebarCollapsed {
        collapsed: bool,
    },
    SetLeftSidebarOpen {
        open: bool,
    },
}

impl ScriptStep {
    /// Convert to a message, filling in the container width where omitted
    pub fn into_msg(self, container_width: f32) -> Msg {
        match self {
            ScriptStep::AddPanel {
                kind,
                config,
                group,
            } => Msg::Panel(PanelMsg::Add {
                kind,
                config,
                target: group,
            }),
            ScriptStep::ClosePanel { panel } => Msg::Panel(PanelMsg::Close(panel)),
            ScriptStep::CloseAllPanels => Msg::Panel(PanelMsg::CloseAll),
            ScriptStep::FocusPanel { panel } => Msg::Focus(FocusMsg::FocusPanel(panel)),
            ScriptStep::FocusNextGroup => Msg::Focus(FocusMsg::FocusNextGroup),
            ScriptStep::FocusPrevGroup => Msg::Focus(FocusMsg::FocusPrevGroup),
            ScriptStep::SetLocation { key } => Msg::Focus(FocusMsg::SetContentLocation(key)),
            ScriptStep::ClearLocation => Msg::Focus(FocusMsg::ClearContentLocation),
            ScriptStep::PushBreadcrumb { panel, item } => {
                Msg::Breadcrumb(BreadcrumbMsg::Push { panel, item })
            }
            ScriptStep::PopBreadcrumb { panel } => Msg::Breadcrumb(BreadcrumbMsg::Pop(panel)),
            ScriptStep::GotoBreadcrumb { panel, index } => {
                Msg::Breadcrumb(BreadcrumbMsg::Goto { panel, index })
            }
            ScriptStep::SetPanelConfig { panel, config } => {
                Msg::Panel(PanelMsg::SetConfig { panel, config })
            }
            ScriptStep::SetPanelScroll { panel, scroll_top } => {
                Msg::Panel(PanelMsg::SetScroll { panel, scroll_top })
            }
            ScriptStep::SetPanelSync { panel, sync } => Msg::Panel(PanelMsg::SetSync { panel, sync }),
            ScriptStep::ResizeGroup {
                group,
                size_percent,
                container_width: width,
            } => Msg::Layout(LayoutMsg::ResizeGroup {
                group,
                size_percent,
                container_width: width.unwrap_or(container_width),
            }),
            ScriptStep::ResizeGroups {
                sizes,
                container_width: width,
            } => Msg::Layout(LayoutMsg::ResizeGroups {
                sizes,
                container_width: width.unwrap_or(container_width),
            }),
            ScriptStep::SetActiveTab { group, panel } => {
                Msg::Layout(LayoutMsg::SetActiveTab { group, panel })
            }
            ScriptStep::SplitPanel { panel } => Msg::Layout(LayoutMsg::SplitPanel(panel)),
            ScriptStep::MovePanel { panel, to_group } => {
                Msg::Layout(LayoutMsg::MovePanel { panel, to_group })
            }
            ScriptStep::ApplyPreset { preset } => Msg::Layout(LayoutMsg::ApplyPreset(preset)),
            ScriptStep::ToggleStudyRegion => Msg::Ui(UiMsg::ToggleStudyRegion),
            ScriptStep::ToggleBottomPanel => Msg::Ui(UiMsg::ToggleBottomPanel),
            ScriptStep::SetBottomPanelTab { tab } => Msg::Ui(UiMsg::SetBottomPanelTab(tab)),
            ScriptStep::SetBottomPanelSize { percent } => {
                Msg::Ui(UiMsg::SetBottomPanelSize(percent))
            }
            ScriptStep::ToggleLeftSidebar => Msg::Ui(UiMsg::ToggleLeftSidebar),
            ScriptStep::SetLeftSidebarCollapsed { collapsed } => {
                Msg::Ui(UiMsg::SetLeftSidebarCollapsed(collapsed))
            }
            ScriptStep::SetLeftSidebarOpen { open } => Msg::Ui(UiMsg::SetLeftSidebarOpen(open)),
        }
    }
}

/// Parse a YAML script
pub fn parse_script(source: &str) -> anyhow::Result<Vec<ScriptStep>> {
    if source.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(source).context("Failed to parse script")
}

/// Read and parse a YAML script file
pub fn load_script(path: &Path) -> anyhow::Result<Vec<ScriptStep>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    parse_script(&source).with_context(|| format!("In script {}", path.display()))
}

/// Outcome of replaying a script
#[derive(Debug, Default)]
pub struct ScriptReport {
    /// Number of steps that committed
    pub applied: usize,
    /// Rejected steps by zero-based index
    pub rejected: Vec<(usize, WorkspaceError)>,
    /// Side effects requested by committed steps
    pub commands: Vec<Cmd>,
}

/// Replay steps in order. Rejections are collected, not fatal.
pub fn run_script(workspace: &mut Workspace, steps: Vec<ScriptStep>) -> ScriptReport {
    let mut report = ScriptReport::default();
    let width = workspace.container_width();
    for (index, step) in steps.into_iter().enumerate() {
        match workspace.dispatch(step.into_msg(width)) {
            Ok(cmd) => {
                report.applied += 1;
                report.commands.extend(cmd);
            }
            Err(e) => {
                tracing::warn!(step = index + 1, error = %e, "script step rejected");
                report.rejected.push((index, e));
            }
        }
    }
    report
}
