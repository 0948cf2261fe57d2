//! Panel kinds and presets
//!
//! This module holds the static, read-only side of the workspace:
//!
//! - `PanelKind`: closed set of panel kinds (commentary, notes, ...)
//! - `PanelTypeInfo`: per-kind capability flags (label, multiple instances,
//!   minimum width, whether the kind follows the focused content location)
//! - `WorkspacePreset`: named arrangements of kinds into groups
//!
//! Live panel instances and groups live in `crate::model`.

pub mod preset;
pub mod registry;

pub use preset::{PresetId, WorkspacePreset, PRESETS};
pub use registry::{info_for, PanelKind, PanelTypeInfo};
