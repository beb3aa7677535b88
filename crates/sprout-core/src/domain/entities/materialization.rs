use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;

/// Counters collected while copying a template tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferStats {
    pub files: usize,
    pub directories: usize,
    pub bytes: u64,
}

/// How a materialization ended.
#[derive(Debug)]
pub enum Outcome {
    /// Every entry of the template was copied.
    Success(TransferStats),
    /// The materialization stopped at `error`.
    ///
    /// `partial` is `true` when this run had already created directories,
    /// the target or any of its missing parents, so something is left on
    /// disk.
    Failure { error: ScaffoldError, partial: bool },
}

/// Terminal result of one materialization, consumed by the reporter.
#[derive(Debug)]
pub struct MaterializationResult {
    target_path: PathBuf,
    outcome: Outcome,
    leftover: Option<PathBuf>,
}

impl MaterializationResult {
    pub fn success(target_path: impl Into<PathBuf>, stats: TransferStats) -> Self {
        Self {
            target_path: target_path.into(),
            outcome: Outcome::Success(stats),
            leftover: None,
        }
    }

    pub fn failure(target_path: impl Into<PathBuf>, error: ScaffoldError, partial: bool) -> Self {
        Self {
            target_path: target_path.into(),
            outcome: Outcome::Failure { error, partial },
            leftover: None,
        }
    }

    /// Record the topmost directory this run created and left behind.
    ///
    /// For a nested destination this can be an ancestor of the target.
    pub fn with_leftover(mut self, path: impl Into<PathBuf>) -> Self {
        self.leftover = Some(path.into());
        self
    }

    /// Topmost directory left on disk by a failed run, if any.
    pub fn leftover(&self) -> Option<&Path> {
        self.leftover.as_deref()
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    /// Split into the target path and the outcome.
    pub fn into_parts(self) -> (PathBuf, Outcome) {
        (self.target_path, self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_reports_success() {
        let r = MaterializationResult::success("/w", TransferStats::default());
        assert!(r.is_success());
        assert_eq!(r.target_path(), Path::new("/w"));
    }

    #[test]
    fn failure_keeps_partial_flag() {
        let r = MaterializationResult::failure(
            "/w",
            ScaffoldError::TargetExists {
                path: PathBuf::from("/w"),
            },
            false,
        );
        assert!(!r.is_success());
        match r.into_parts().1 {
            Outcome::Failure { partial, .. } => assert!(!partial),
            Outcome::Success(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn leftover_defaults_to_none() {
        let r = MaterializationResult::success("/w", TransferStats::default());
        assert_eq!(r.leftover(), None);
        let r = r.with_leftover("/a");
        assert_eq!(r.leftover(), Some(Path::new("/a")));
    }
}
