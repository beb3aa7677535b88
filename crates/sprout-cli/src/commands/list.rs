//! `sprout --list`: print the registry in menu order.

use crate::{
    cli::OutputFormat, commands::registry, config::AppConfig, error::CliResult,
    output::OutputManager,
};

pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let registry = registry(config);
    let templates = registry.list_templates();

    if output.format() == OutputFormat::Plain {
        // One `id<TAB>label` row per template, for scripts.
        for t in templates {
            output.print(&format!("{}\t{}", t.id(), t.display_label()))?;
        }
        return Ok(());
    }

    output.header("Available templates:")?;
    let width = templates.iter().map(|t| t.id().len()).max().unwrap_or(0);
    for t in templates {
        output.print(&format!("  {:<width$}  {}", t.id(), t.display_label()))?;
    }
    output.print("")?;
    output.print("Use one with: sprout --template <ID> [NAME]")?;

    Ok(())
}
