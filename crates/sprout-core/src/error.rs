//! Unified error handling for Sprout Core.
//!
//! One flat taxonomy covers the whole scaffold flow. Each variant knows its
//! [`ErrorCategory`] (for styling and log severity) and carries
//! user-actionable suggestions.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Root error type for Sprout Core operations.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The requested template identifier is not in the registry.
    #[error("Template not found: {id}")]
    TemplateNotFound { id: String, available: Vec<String> },

    /// The registry has nothing to offer.
    #[error("No templates are available")]
    NoTemplates,

    /// Two registry entries share an identifier.
    #[error("Template id '{id}' is registered more than once")]
    DuplicateTemplate { id: String },

    /// The destination name cannot be turned into a target path.
    ///
    /// Recoverable: the selection controller re-prompts on this variant and
    /// never lets it escape on its own.
    #[error("Invalid destination name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Every allowed destination-name attempt was invalid.
    #[error("No valid destination name after {attempts} attempts")]
    NameAttemptsExhausted { attempts: u32 },

    /// The destination already exists as a file or directory.
    #[error("Target already exists at {path}")]
    TargetExists { path: PathBuf },

    /// An I/O error while reading the template or writing the scaffold.
    #[error("Failed to {operation} '{path}': {source}")]
    TransferFailure {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: io::Error,
    },

    /// The interactive prompt could not be driven (e.g. no terminal).
    #[error("Prompt failed: {source}")]
    Prompt {
        #[source]
        source: io::Error,
    },

    /// The user aborted an interactive prompt.
    #[error("Operation cancelled")]
    Cancelled,
}

impl ScaffoldError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { id, available } => {
                let mut out = vec![format!("No template is registered as '{id}'")];
                if !available.is_empty() {
                    out.push(format!("Available templates: {}", available.join(", ")));
                }
                out.push("List templates with: sprout --list".into());
                out
            }
            Self::NoTemplates => vec![
                "Check the [templates] root setting in your configuration file".into(),
            ],
            Self::DuplicateTemplate { id } => {
                vec![format!("Give the second '{id}' template a unique id")]
            }
            Self::InvalidName { reason, .. } => vec![
                format!("The destination name is invalid: {reason}"),
                "Use a directory name such as my-workspace".into(),
            ],
            Self::NameAttemptsExhausted { .. } => vec![
                "Pass the destination directly: sprout <NAME>".into(),
            ],
            Self::TargetExists { path } => vec![
                format!("'{}' is already present; nothing was written", path.display()),
                "Choose a different destination name".into(),
                "Or move the existing directory out of the way and re-run".into(),
            ],
            Self::TransferFailure { path, .. } => vec![
                format!("The failing entry was: {}", path.display()),
                "Check file permissions and available disk space".into(),
                "Re-run once the cause is resolved".into(),
            ],
            Self::Prompt { .. } => vec![
                "Run sprout from an interactive terminal".into(),
                "Or pass everything up front: sprout --template <ID> <NAME>".into(),
            ],
            Self::Cancelled => vec!["No changes were made".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } | Self::NameAttemptsExhausted { .. } => {
                ErrorCategory::Validation
            }
            Self::TemplateNotFound { .. } | Self::NoTemplates => ErrorCategory::NotFound,
            Self::TargetExists { .. } | Self::DuplicateTemplate { .. } => ErrorCategory::Conflict,
            Self::TransferFailure { .. } | Self::Prompt { .. } => ErrorCategory::Io,
            Self::Cancelled => ErrorCategory::Cancelled,
        }
    }

    /// `true` for errors the selection controller handles by re-prompting.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidName { .. })
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Conflict,
    Io,
    Cancelled,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_invalid_name_is_recoverable() {
        let invalid = ScaffoldError::InvalidName {
            name: " ".into(),
            reason: "empty".into(),
        };
        assert!(invalid.is_recoverable());
        assert!(!ScaffoldError::Cancelled.is_recoverable());
        assert!(!ScaffoldError::DuplicateTemplate { id: "a".into() }.is_recoverable());
        assert!(
            !ScaffoldError::TargetExists {
                path: PathBuf::from("/tmp/x")
            }
            .is_recoverable()
        );
    }

    #[test]
    fn template_not_found_lists_available() {
        let err = ScaffoldError::TemplateNotFound {
            id: "nonexistent-template".into(),
            available: vec!["content-creator".into()],
        };
        assert!(err.suggestions().iter().any(|s| s.contains("content-creator")));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn transfer_failure_names_path_and_cause() {
        let err = ScaffoldError::TransferFailure {
            path: PathBuf::from("/src/a.txt"),
            operation: "read",
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/src/a.txt"));
        assert!(msg.contains("denied"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn empty_registry_says_so() {
        let err = ScaffoldError::NoTemplates;
        assert_eq!(err.to_string(), "No templates are available");
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn duplicate_template_names_the_id() {
        let err = ScaffoldError::DuplicateTemplate { id: "blog".into() };
        assert!(err.to_string().contains("'blog'"));
        assert!(!err.to_string().contains("destination"));
        assert_eq!(err.category(), ErrorCategory::Conflict);
    }

    #[test]
    fn target_exists_is_conflict() {
        let err = ScaffoldError::TargetExists {
            path: PathBuf::from("/tmp/my-workspace"),
        };
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(err.suggestions().iter().any(|s| s.contains("nothing was written")));
    }
}
