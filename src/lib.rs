//! studydesk - workspace layout engine for a study reader
//!
//! This crate owns the arrangement of study panels: their identity, grouping,
//! sizing, per-panel navigation history and synchronisation to a focused
//! content location. It follows the Elm Architecture pattern: `Msg` in,
//! pure update, `Cmd` out.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod messages;
pub mod model;
pub mod panel;
pub mod script;
pub mod session;
pub mod tracing;
pub mod update;
pub mod workspace;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::WorkspaceConfig;
pub use error::{Result, WorkspaceError};
pub use messages::Msg;
pub use model::{GroupId, PanelId, WorkspaceState};
pub use panel::{PanelKind, PresetId};
pub use workspace::Workspace;
