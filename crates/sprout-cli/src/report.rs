//! Outcome reporting: turns a materialization result into user-facing output
//! and the process result.

use std::path::Path;

use sprout_core::domain::{MaterializationResult, Outcome, ScaffoldRequest, TransferStats};
use tracing::info;

use crate::{error::CliResult, output::OutputManager};

/// Report `result` for `request`.
///
/// Success prints the location and the commands to run next. Failure is
/// returned as an error for the caller to render; a partial tree gets an
/// extra warning first.
pub fn report(
    result: MaterializationResult,
    request: &ScaffoldRequest,
    output: &OutputManager,
) -> CliResult<()> {
    let leftover = result.leftover().map(Path::to_path_buf);
    let (target, outcome) = result.into_parts();

    match outcome {
        Outcome::Success(stats) => {
            info!(
                target = %target.display(),
                files = stats.files,
                directories = stats.directories,
                bytes = stats.bytes,
                "workspace ready"
            );
            output.success(&format!("Workspace created at {}", target.display()))?;
            output.print(&format!("  {}", summarize(&stats)))?;
            output.print("")?;
            output.print("Next steps:")?;
            for step in next_steps(request) {
                output.print(&format!("  {step}"))?;
            }
            Ok(())
        }
        Outcome::Failure { error, partial } => {
            if partial {
                output.warning(&leftover_warning(&target, leftover.as_deref()))?;
            }
            Err(error.into())
        }
    }
}

fn leftover_warning(target: &Path, leftover: Option<&Path>) -> String {
    match leftover {
        Some(dir) if dir != target => format!(
            "Directories were created under {} before the failure; remove them before trying again",
            dir.display()
        ),
        _ => format!(
            "The workspace at {} is incomplete; remove it before trying again",
            target.display()
        ),
    }
}

/// `cd <name>` followed by the template's own next steps.
pub fn next_steps(request: &ScaffoldRequest) -> Vec<String> {
    std::iter::once(format!("cd {}", request.destination_name()))
        .chain(request.template().next_steps().iter().cloned())
        .collect()
}

fn summarize(stats: &TransferStats) -> String {
    format!(
        "{} {}, {} {} ({} bytes)",
        stats.files,
        plural(stats.files, "file", "files"),
        stats.directories,
        plural(stats.directories, "directory", "directories"),
        stats.bytes
    )
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 { one } else { many }
}
