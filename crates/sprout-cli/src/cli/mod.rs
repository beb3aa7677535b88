//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Parser, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Everything is optional: a bare `sprout` asks for the template and the
/// destination interactively.
#[derive(Debug, Parser)]
#[command(
    name    = "sprout",
    bin_name = "sprout",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f331} Scaffold a ready-to-use workspace from a bundled template",
    long_about = "Sprout asks which template to use and where to put it, then copies \
                  the template tree into a new directory.",
    after_help = "EXAMPLES:\n\
        \x20 sprout\n\
        \x20 sprout my-workspace\n\
        \x20 sprout --template content-creator my-workspace\n\
        \x20 sprout --list\n\
        \x20 sprout --completions bash > ~/.local/share/bash-completion/completions/sprout",
)]
pub struct Cli {
    /// Ambient flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Destination directory, relative to the current directory.
    #[arg(value_name = "NAME", help = "Destination directory (skips the name prompt)")]
    pub name: Option<String>,

    /// Template id, bypassing the template menu.
    #[arg(
        short = 't',
        long = "template",
        value_name = "ID",
        help = "Template to use (skips the template prompt)"
    )]
    pub template: Option<String>,

    /// Print the available templates and exit.
    #[arg(
        short = 'l',
        long = "list",
        conflicts_with_all = ["name", "template", "completions"],
        help = "List available templates"
    )]
    pub list: bool,

    /// Print a completion script and exit.
    #[arg(
        long = "completions",
        value_name = "SHELL",
        value_enum,
        conflicts_with_all = ["name", "template"],
        help = "Generate shell completions"
    )]
    pub completions: Option<Shell>,
}

/// What a parsed command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    List,
    Completions(Shell),
    Scaffold {
        template: Option<String>,
        name: Option<String>,
    },
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.list {
            Mode::List
        } else if let Some(shell) = self.completions {
            Mode::Completions(shell)
        } else {
            Mode::Scaffold {
                template: self.template.clone(),
                name: self.name.clone(),
            }
        }
    }
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_is_interactive() {
        let cli = Cli::parse_from(["sprout"]);
        assert_eq!(
            cli.mode(),
            Mode::Scaffold {
                template: None,
                name: None
            }
        );
    }

    #[test]
    fn name_and_template() {
        let cli = Cli::parse_from(["sprout", "-t", "content-creator", "my-workspace"]);
        assert_eq!(
            cli.mode(),
            Mode::Scaffold {
                template: Some("content-creator".into()),
                name: Some("my-workspace".into())
            }
        );
    }

    #[test]
    fn list_mode() {
        assert_eq!(Cli::parse_from(["sprout", "--list"]).mode(), Mode::List);
        assert_eq!(Cli::parse_from(["sprout", "-l"]).mode(), Mode::List);
    }

    #[test]
    fn list_conflicts_with_name() {
        assert!(Cli::try_parse_from(["sprout", "--list", "ws"]).is_err());
    }

    #[test]
    fn completions_mode() {
        let cli = Cli::parse_from(["sprout", "--completions", "zsh"]);
        assert_eq!(cli.mode(), Mode::Completions(Shell::Zsh));
    }

    #[test]
    fn json_output_is_not_offered() {
        assert!(Cli::try_parse_from(["sprout", "--output-format", "json"]).is_err());
    }

    #[test]
    fn no_color_is_a_plain_switch() {
        let cli = Cli::try_parse_from(["sprout", "--no-color", "--list"]).unwrap();
        assert!(cli.global.no_color);
    }

    #[test]
    fn verbose_help_matches_default_level() {
        let cmd = Cli::command();
        let verbose = cmd
            .get_arguments()
            .find(|a| a.get_id() == "verbose")
            .unwrap();
        let help = verbose.get_long_help().unwrap().to_string();
        assert!(help.contains("(none)  - Warnings and errors"), "{help}");
        assert!(!help.contains("Only errors"), "{help}");
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["sprout", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }
}
