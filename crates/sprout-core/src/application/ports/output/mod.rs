//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! `sprout-adapters` provides the filesystem implementations; the terminal
//! prompter lives in `sprout-cli`.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::{
    domain::TreeEntry,
    error::{ScaffoldError, ScaffoldResult},
};

/// A filesystem operation that failed on a specific path.
#[derive(Debug, Error)]
#[error("failed to {operation} '{}': {source}", path.display())]
pub struct FsError {
    pub path: PathBuf,
    pub operation: &'static str,
    #[source]
    pub source: io::Error,
}

impl FsError {
    pub fn new(path: impl Into<PathBuf>, operation: &'static str, source: io::Error) -> Self {
        Self {
            path: path.into(),
            operation,
            source,
        }
    }

    pub fn is_already_exists(&self) -> bool {
        self.source.kind() == io::ErrorKind::AlreadyExists
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `sprout_adapters::LocalFilesystem` (production)
/// - `sprout_adapters::MemoryFilesystem` (testing, with fault injection)
/// - `sprout_adapters::BundledFilesystem` (embedded templates over another
///   implementation)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// `true` if anything (file, directory, symlink) is present at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Every entry below `root`, relative to it, parents before children,
    /// siblings in file-name order. `root` itself is not included.
    fn walk(&self, root: &Path) -> Result<Vec<TreeEntry>, FsError>;

    /// Create a directory and any missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<(), FsError>;

    /// Create exactly one directory; fails with `AlreadyExists` if anything
    /// is already at `path`.
    fn create_dir(&self, path: &Path) -> Result<(), FsError>;

    /// Copy one file byte for byte, returning the number of bytes written.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<u64, FsError>;

    /// Write `contents` to a new or truncated file at `path`.
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<u64, FsError>;
}

/// Port for the interactive questions.
///
/// Every method blocks until the user answers. `Ok(None)` means the user
/// aborted the prompt; `Err` means the prompt could not be shown at all.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Pick one of `items`; returns its index.
    fn select(&self, prompt: &str, items: &[String], default: usize)
    -> ScaffoldResult<Option<usize>>;

    /// Free-text answer with `default` offered as the pre-filled value.
    fn input(&self, prompt: &str, default: &str) -> ScaffoldResult<Option<String>>;

    /// Show a non-fatal message (e.g. why an answer was rejected).
    fn notice(&self, message: &str);
}

impl From<FsError> for ScaffoldError {
    fn from(err: FsError) -> Self {
        Self::TransferFailure {
            path: err.path,
            operation: err.operation,
            source: err.source,
        }
    }
}
