//! Workspace Materializer - copies a template tree into a new directory.
//!
//! Workflow:
//! 1. Conflict check right before writing (the selection-time check may be
//!    stale).
//! 2. Walk the whole source tree before anything is created, so a missing or
//!    unreadable template fails without leaving a target behind.
//! 3. Create missing parents, then the target itself with a non-recursive
//!    create; "already exists" here is still reported as a conflict.
//! 4. Copy entries in walk order. The first failure stops the copy.
//!
//! There is no rollback: a failure after step 3 leaves the partial tree in
//! place for inspection and the result says so (`partial = true`). The same
//! holds when step 3 itself fails after creating missing parents; the
//! result then names the topmost directory that was left behind.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, trace, warn};

use crate::{
    application::ports::Filesystem,
    domain::{EntryKind, MaterializationResult, ScaffoldRequest, TransferStats, TreeEntry},
    error::{ScaffoldError, ScaffoldResult},
};

/// Performs the filesystem side of a scaffold.
pub struct WorkspaceMaterializer {
    filesystem: Box<dyn Filesystem>,
}

impl WorkspaceMaterializer {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Materialize `request`. Never panics on I/O; every failure is folded
    /// into the returned result.
    #[instrument(
        skip_all,
        fields(
            template = %request.template().id(),
            target = %request.resolved_target_path().display()
        )
    )]
    pub fn materialize(&self, request: &ScaffoldRequest) -> MaterializationResult {
        let source = request.template().source_root();
        let target = request.resolved_target_path();

        // 1. Conflict check
        if self.filesystem.exists(target) {
            warn!("target appeared before transfer");
            return MaterializationResult::failure(target, target_exists(target), false);
        }

        // 2. Pre-flight enumeration
        let entries = match self.filesystem.walk(source) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "template source could not be read");
                return MaterializationResult::failure(target, e.into(), false);
            }
        };
        debug!(entries = entries.len(), "source tree enumerated");

        // 3. Target creation
        let created_root = self.topmost_missing(target);
        if let Err(e) = self.create_target(target) {
            let left_behind = created_root != target && self.filesystem.exists(&created_root);
            if !left_behind {
                return MaterializationResult::failure(target, e, false);
            }
            warn!(
                error = %e,
                leftover = %created_root.display(),
                "target not created, new parent directories left in place"
            );
            return MaterializationResult::failure(target, e, true).with_leftover(created_root);
        }

        // 4. Transfer
        match self.transfer(source, target, &entries) {
            Ok(stats) => {
                info!(
                    files = stats.files,
                    directories = stats.directories,
                    bytes = stats.bytes,
                    "materialization complete"
                );
                MaterializationResult::success(target, stats)
            }
            Err(e) => {
                warn!(error = %e, "transfer stopped, partial tree left in place");
                MaterializationResult::failure(target, e, true).with_leftover(created_root)
            }
        }
    }

    /// `target` or its highest ancestor that is still missing. Everything
    /// from there down is created by this run.
    fn topmost_missing(&self, target: &Path) -> PathBuf {
        let mut top = target;
        for ancestor in target.ancestors().skip(1) {
            if ancestor.parent().is_none() || self.filesystem.exists(ancestor) {
                break;
            }
            top = ancestor;
        }
        top.to_path_buf()
    }

    fn create_target(&self, target: &Path) -> ScaffoldResult<()> {
        if let Some(parent) = target.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.create_dir(target).map_err(|e| {
            if e.is_already_exists() {
                target_exists(target)
            } else {
                e.into()
            }
        })
    }

    fn transfer(
        &self,
        source: &Path,
        target: &Path,
        entries: &[TreeEntry],
    ) -> ScaffoldResult<TransferStats> {
        let mut stats = TransferStats::default();

        for entry in entries {
            let from = source.join(entry.relative());
            let to = target.join(entry.relative());
            trace!(entry = %entry.relative().display(), kind = ?entry.kind(), "copy");

            match entry.kind() {
                EntryKind::Directory => {
                    self.filesystem.create_dir(&to)?;
                    stats.directories += 1;
                }
                EntryKind::File => {
                    stats.bytes += self.filesystem.copy_file(&from, &to)?;
                    stats.files += 1;
                }
            }
        }

        Ok(stats)
    }
}

fn target_exists(path: &Path) -> ScaffoldError {
    ScaffoldError::TargetExists {
        path: path.to_path_buf(),
    }
}
