//! The default mode: ask, then materialize, then report.
//!
//! Responsibility: wire the terminal prompter and the local filesystem into
//! the core services and display results. No business logic lives here.

use std::env;

use tracing::{info, instrument};

use sprout_adapters::{BundledFilesystem, LocalFilesystem};
use sprout_core::{
    application::{Selection, SelectionController, WorkspaceMaterializer},
    domain::ScaffoldRequest,
};

use crate::{
    commands::registry,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::DialoguerPrompter,
    report::report,
};

/// Execute one scaffold run.
///
/// Dispatch sequence:
/// 1. Collect a request: preselected template and name are used when
///    given, everything else is asked for
/// 2. Show the selection summary
/// 3. Materialize via `WorkspaceMaterializer`
/// 4. Report the outcome
#[instrument(skip_all, fields(template = template.as_deref(), name = name.as_deref()))]
pub fn execute(
    template: Option<String>,
    name: Option<String>,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let registry = registry(config);
    let cwd = env::current_dir().map_err(|e| CliError::IoError {
        message: "cannot determine the current directory".into(),
        source: e,
    })?;
    let filesystem = BundledFilesystem::new(LocalFilesystem::new());
    let prompter = DialoguerPrompter::new(output.supports_color());

    // 1. Selection
    let mut controller = SelectionController::new(&registry, &prompter, &filesystem, &cwd)
        .default_name(config.defaults.destination.clone())
        .max_name_attempts(config.defaults.max_name_attempts);
    if let Some(id) = template.as_deref() {
        controller = controller.preselect_template(id)?;
    }
    if let Some(name) = name {
        controller = controller.preset_name(name);
    }

    let request = match controller.collect_request()? {
        Selection::Ready(request) => request,
        Selection::Cancelled => return Err(CliError::Cancelled),
    };

    // 2. Summary
    show_summary(&request, output)?;

    // 3. Transfer
    info!(
        template = %request.template().id(),
        target = %request.resolved_target_path().display(),
        "scaffold started"
    );
    let result = WorkspaceMaterializer::new(Box::new(filesystem)).materialize(&request);

    // 4. Report
    report(result, &request, output)
}

fn show_summary(request: &ScaffoldRequest, out: &OutputManager) -> CliResult<()> {
    out.header("Creating workspace")?;
    out.field("Template", request.template().display_label())?;
    out.field("Destination", request.destination_name())?;
    out.field(
        "Location",
        &request.resolved_target_path().display().to_string(),
    )?;
    out.print("")?;
    Ok(())
}
