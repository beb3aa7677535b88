//! Error handling for the Sprout binary.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//!
//! Every failure maps to exit code 1.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use sprout_core::error::{ErrorCategory, ScaffoldError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `sprout-core`.
    #[error(transparent)]
    Core(ScaffoldError),

    /// Writing to the terminal or reading the working directory failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Operation cancelled by user.
    #[error("Operation cancelled")]
    Cancelled,
}

impl From<ScaffoldError> for CliError {
    fn from(err: ScaffoldError) -> Self {
        match err {
            ScaffoldError::Cancelled => Self::Cancelled,
            other => Self::Core(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { message, .. } => {
                let mut out = vec![format!("Configuration issue: {message}")];
                if let Some(path) = crate::config::AppConfig::config_path() {
                    out.push(format!("Check your config file at {}", path.display()));
                }
                out.push("Or point at another file with --config <FILE>".into());
                out
            }
            Self::Core(core_err) => core_err.suggestions(),
            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check that the terminal and current directory are usable".into(),
            ],
            Self::Cancelled => vec!["No changes were made".into()],
        }
    }

    /// Category used to pick styling and log severity.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Validation,
            Self::Core(core) => core.category(),
            Self::IoError { .. } => ErrorCategory::Io,
            Self::Cancelled => ErrorCategory::Cancelled,
        }
    }

    /// Exit code to pass to the OS. Every failure is `1`.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Cancellation ends the run without an error report.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::Cancelled => tracing::debug!("Cancelled by user"),
            ErrorCategory::Validation | ErrorCategory::NotFound | ErrorCategory::Conflict => {
                tracing::warn!("{self}")
            }
            ErrorCategory::Io => tracing::error!("{self}"),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {source}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    fn exists() -> CliError {
        ScaffoldError::TargetExists {
            path: PathBuf::from("/tmp/ws"),
        }
        .into()
    }

    #[test]
    fn core_cancel_becomes_cli_cancel() {
        let err: CliError = ScaffoldError::Cancelled.into();
        assert!(matches!(err, CliError::Cancelled));
        assert!(err.is_silent());
    }

    #[test]
    fn every_error_exits_one() {
        let errors = [
            exists(),
            CliError::Cancelled,
            CliError::ConfigError {
                message: "x".into(),
                source: None,
            },
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            },
            ScaffoldError::TemplateNotFound {
                id: "nope".into(),
                available: vec![],
            }
            .into(),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    #[test]
    fn core_message_is_not_rewrapped() {
        assert_eq!(exists().to_string(), "Target already exists at /tmp/ws");
    }

    #[test]
    fn core_suggestions_pass_through() {
        assert!(
            exists()
                .suggestions()
                .iter()
                .any(|s| s.contains("different destination"))
        );
    }

    #[test]
    fn format_plain_contains_error_header() {
        let s = exists().format_plain(false);
        assert!(s.contains("Error: Target already exists"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err: CliError = ScaffoldError::TransferFailure {
            path: PathBuf::from("/tmp/ws/a.txt"),
            operation: "copy file",
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: denied"));
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn category_follows_core() {
        assert_eq!(exists().category(), ErrorCategory::Conflict);
    }
}
