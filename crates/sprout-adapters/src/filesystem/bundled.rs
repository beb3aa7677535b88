//! Templates compiled into the binary.
//!
//! [`BundledFilesystem`] serves the embedded `templates/` tree under
//! [`BUNDLED_ROOT`] and hands every other path to the wrapped filesystem.
//! The bundled side is read-only: a scaffold copies out of it, never into it.

use std::collections::BTreeMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

use rust_embed::RustEmbed;
use sprout_core::{
    application::ports::{Filesystem, FsError},
    domain::{BUNDLED_ROOT, EntryKind, TreeEntry},
};
use tracing::trace;

#[derive(RustEmbed)]
#[folder = "../../templates/"]
struct BundledTemplates;

/// Embedded templates layered over another [`Filesystem`].
#[derive(Debug, Clone, Default)]
pub struct BundledFilesystem<F> {
    inner: F,
}

impl<F: Filesystem> BundledFilesystem<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }
}

impl<F: Filesystem> Filesystem for BundledFilesystem<F> {
    fn exists(&self, path: &Path) -> bool {
        match bundled_key(path) {
            Some(key) => key.as_os_str().is_empty() || index().contains_key(&key),
            None => self.inner.exists(path),
        }
    }

    fn walk(&self, root: &Path) -> Result<Vec<TreeEntry>, FsError> {
        let Some(key) = bundled_key(root) else {
            return self.inner.walk(root);
        };
        if !key.as_os_str().is_empty() {
            match index().get(&key) {
                Some(EntryKind::Directory) => {}
                Some(EntryKind::File) => {
                    return Err(FsError::new(
                        root,
                        "read template",
                        io::Error::new(
                            io::ErrorKind::NotADirectory,
                            "template root is not a directory",
                        ),
                    ));
                }
                None => {
                    return Err(FsError::new(
                        root,
                        "read template",
                        io::Error::new(io::ErrorKind::NotFound, "no such bundled template"),
                    ));
                }
            }
        }

        // Component-wise path order is a pre-order walk with siblings by name.
        Ok(index()
            .iter()
            .filter(|(path, _)| path.starts_with(&key) && **path != key)
            .filter_map(|(path, kind)| {
                let relative = path.strip_prefix(&key).ok()?;
                trace!(entry = %relative.display(), "found");
                Some(match kind {
                    EntryKind::Directory => TreeEntry::directory(relative),
                    EntryKind::File => TreeEntry::file(relative),
                })
            })
            .collect())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), FsError> {
        if bundled_key(path).is_some() {
            return Err(read_only(path, "create directory"));
        }
        self.inner.create_dir_all(path)
    }

    fn create_dir(&self, path: &Path) -> Result<(), FsError> {
        if bundled_key(path).is_some() {
            return Err(read_only(path, "create directory"));
        }
        self.inner.create_dir(path)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<u64, FsError> {
        let Some(key) = bundled_key(from) else {
            return self.inner.copy_file(from, to);
        };
        if bundled_key(to).is_some() {
            return Err(read_only(to, "copy file"));
        }
        let file = BundledTemplates::get(&embed_name(&key)).ok_or_else(|| {
            FsError::new(from, "copy file", io::Error::from(io::ErrorKind::NotFound))
        })?;
        self.inner.write_file(to, &file.data)
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<u64, FsError> {
        if bundled_key(path).is_some() {
            return Err(read_only(path, "write file"));
        }
        self.inner.write_file(path, contents)
    }
}

/// Path below [`BUNDLED_ROOT`], or `None` for ordinary paths.
fn bundled_key(path: &Path) -> Option<PathBuf> {
    path.strip_prefix(BUNDLED_ROOT).ok().map(Path::to_path_buf)
}

/// Every embedded file plus the directories implied by their paths.
fn index() -> &'static BTreeMap<PathBuf, EntryKind> {
    static INDEX: OnceLock<BTreeMap<PathBuf, EntryKind>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index = BTreeMap::new();
        for name in BundledTemplates::iter() {
            let file = PathBuf::from(name.as_ref());
            for dir in file.ancestors().skip(1) {
                if !dir.as_os_str().is_empty() {
                    index.insert(dir.to_path_buf(), EntryKind::Directory);
                }
            }
            index.insert(file, EntryKind::File);
        }
        index
    })
}

/// Embedded file names always use `/`.
fn embed_name(key: &Path) -> String {
    key.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn read_only(path: &Path, operation: &'static str) -> FsError {
    FsError::new(
        path,
        operation,
        io::Error::new(
            io::ErrorKind::PermissionDenied,
            "bundled templates are read-only",
        ),
    )
}
