use std::path::{Path, PathBuf};

/// Kind of one entry found while walking a template tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One entry of a template tree, relative to the tree root.
///
/// Invariant: `relative` is never absolute and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    relative: PathBuf,
    kind: EntryKind,
}

impl TreeEntry {
    /// # Panics
    /// Panics if `relative` is absolute or empty; walkers only ever produce
    /// paths below the root.
    pub fn new(relative: impl Into<PathBuf>, kind: EntryKind) -> Self {
        let relative = relative.into();
        assert!(
            !relative.is_absolute() && !relative.as_os_str().is_empty(),
            "TreeEntry must be relative and non-empty: {relative:?}"
        );
        Self { relative, kind }
    }

    pub fn directory(relative: impl Into<PathBuf>) -> Self {
        Self::new(relative, EntryKind::Directory)
    }

    pub fn file(relative: impl Into<PathBuf>) -> Self {
        Self::new(relative, EntryKind::File)
    }

    pub fn relative(&self) -> &Path {
        &self.relative
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
