//! Local filesystem adapter using std::fs and walkdir.

use std::fs;
use std::io;
use std::path::Path;

use sprout_core::{
    application::ports::{Filesystem, FsError},
    domain::TreeEntry,
};
use tracing::trace;
use walkdir::WalkDir;

/// Production filesystem implementation.
///
/// Symlinks inside a template are followed: the scaffold receives the
/// content they point at, never the link itself.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        // A dangling symlink still occupies the name.
        fs::symlink_metadata(path).is_ok()
    }

    fn walk(&self, root: &Path) -> Result<Vec<TreeEntry>, FsError> {
        let meta = fs::metadata(root).map_err(|e| FsError::new(root, "read template", e))?;
        if !meta.is_dir() {
            return Err(FsError::new(
                root,
                "read template",
                io::Error::new(io::ErrorKind::NotADirectory, "template root is not a directory"),
            ));
        }

        let mut entries = Vec::new();
        for item in WalkDir::new(root)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = item.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                FsError::new(path, "read template", io::Error::from(e))
            })?;

            let relative = entry
                .path()
                .strip_prefix(root)
                .map_err(|e| FsError::new(entry.path(), "read template", io::Error::other(e)))?;

            let file_type = entry.file_type();
            let tree_entry = if file_type.is_dir() {
                TreeEntry::directory(relative)
            } else if file_type.is_file() {
                TreeEntry::file(relative)
            } else {
                return Err(FsError::new(
                    entry.path(),
                    "read template",
                    io::Error::new(
                        io::ErrorKind::Unsupported,
                        "not a regular file or directory",
                    ),
                ));
            };
            trace!(entry = %relative.display(), "found");
            entries.push(tree_entry);
        }

        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), FsError> {
        fs::create_dir_all(path).map_err(|e| FsError::new(path, "create directory", e))
    }

    fn create_dir(&self, path: &Path) -> Result<(), FsError> {
        fs::create_dir(path).map_err(|e| FsError::new(path, "create directory", e))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<u64, FsError> {
        fs::copy(from, to).map_err(|e| {
            // Blame whichever side is actually missing.
            let path = if fs::metadata(from).is_err() { from } else { to };
            FsError::new(path, "copy file", e)
        })
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<u64, FsError> {
        fs::write(path, contents).map_err(|e| FsError::new(path, "write file", e))?;
        Ok(contents.len() as u64)
    }
}
