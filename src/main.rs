use anyhow::{Context, Result};
use clap::Parser;

use studydesk::cli::{CliArgs, OutputFormat, StartupPlan};
use studydesk::config::WorkspaceConfig;
use studydesk::script::{load_script, run_script};
use studydesk::session::SessionSnapshot;
use studydesk::Workspace;

fn main() -> Result<()> {
    studydesk::tracing::init();

    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => WorkspaceConfig::load_from(path),
        None => WorkspaceConfig::load(),
    };
    let plan = args.into_plan(&config);

    let mut workspace = Workspace::new(&config);

    let restored = plan.restore && restore_session(&mut workspace, &plan);
    if let Some(preset) = plan.preset_to_apply(restored) {
        workspace.apply_preset(preset)?;
    }

    if let Some(path) = &plan.script {
        let steps = load_script(path)?;
        let total = steps.len();
        let report = run_script(&mut workspace, steps);
        for (index, error) in &report.rejected {
            eprintln!("step {}: {}", index + 1, error);
        }
        tracing::info!(
            applied = report.applied,
            rejected = report.rejected.len(),
            total,
            "script finished"
        );
    }

    let snapshot = workspace.session();
    if plan.save {
        match &plan.session_path {
            Some(path) => snapshot.save_to(path)?,
            None => snapshot.save()?,
        }
    }

    print_snapshot(&snapshot, plan.format)
}

/// Hydrate from the saved session. Returns whether anything was restored.
///
/// A missing, unreadable or invalid session is logged and skipped.
fn restore_session(workspace: &mut Workspace, plan: &StartupPlan) -> bool {
    let loaded = match &plan.session_path {
        Some(path) if path.exists() => SessionSnapshot::load_from(path).map(Some),
        Some(_) => Ok(None),
        None => SessionSnapshot::load(),
    };
    let snapshot = match loaded {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => return false,
        Err(e) => {
            tracing::warn!("Ignoring saved session: {:#}", e);
            return false;
        }
    };
    match workspace.hydrate(snapshot) {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Ignoring saved session: {}", e);
            false
        }
    }
}

fn print_snapshot(snapshot: &SessionSnapshot, format: OutputFormat) -> Result<()> {
    let text = match format {
        OutputFormat::Yaml => serde_yaml::to_string(snapshot).context("Failed to render YAML")?,
        OutputFormat::Json => {
            serde_json::to_string_pretty(snapshot).context("Failed to render JSON")? + "\n"
        }
    };
    print!("{}", text);
    Ok(())
}
