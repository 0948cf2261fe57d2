//! Command-line argument parsing for the studydesk binary
//!
//! Supports:
//! - Starting from a preset
//! - Restoring or ignoring the saved session
//! - Replaying a YAML command script
//! - Printing the resulting layout as YAML or JSON

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::WorkspaceConfig;
use crate::panel::PresetId;

/// Output format for the final layout snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Study workspace layout engine
#[derive(Parser, Debug)]
#[command(
    name = "studydesk",
    version,
    about = "Replay study workspace layout commands"
)]
pub struct CliArgs {
    /// Preset to apply (daily-reading, deep-study, translation-comparison, research, focus)
    #[arg(short, long, value_name = "ID")]
    pub preset: Option<PresetId>,

    /// YAML script of workspace commands to replay
    #[arg(short, long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Restore the saved session even if the config disables it
    #[arg(short, long, conflicts_with = "new")]
    pub restore: bool,

    /// Start with an empty workspace (ignore session restore)
    #[arg(short = 'n', long)]
    pub new: bool,

    /// Save the final layout as the session
    #[arg(long)]
    pub save: bool,

    /// Session file to read and write instead of the default
    #[arg(long, value_name = "FILE")]
    pub session: Option<PathBuf>,

    /// Config file to use instead of the default
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format for the final layout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

/// What the binary should do, derived from CLI arguments and config
#[derive(Debug, Clone, PartialEq)]
pub struct StartupPlan {
    /// Try to hydrate from the saved session first
    pub restore: bool,
    /// Preset named on the command line; applied even after a restore
    pub preset: Option<PresetId>,
    /// Config default preset; applied only when nothing was restored
    pub fallback_preset: Option<PresetId>,
    pub script: Option<PathBuf>,
    pub save: bool,
    pub session_path: Option<PathBuf>,
    pub format: OutputFormat,
}

impl CliArgs {
    /// Combine parsed CLI args with the loaded configuration
    pub fn into_plan(self, config: &WorkspaceConfig) -> StartupPlan {
        let restore = !self.new && (self.restore || config.restore_session);
        StartupPlan {
            restore,
            preset: self.preset,
            fallback_preset: config.default_preset,
            script: self.script,
            save: self.save,
            session_path: self.session,
            format: self.format,
        }
    }
}

impl StartupPlan {
    /// Preset to apply once the restore attempt has finished
    pub fn preset_to_apply(&self, restored: bool) -> Option<PresetId> {
        match (self.preset, restored) {
            (Some(preset), _) => Some(preset),
            (None, false) => self.fallback_preset,
            (None, true) => None,
        }
    }
}
