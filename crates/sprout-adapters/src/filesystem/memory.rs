//! In-memory filesystem adapter for testing.
//!
//! Behaves like a strict POSIX tree: `create_dir` needs an existing parent
//! and refuses to replace anything, files can only be written into existing
//! directories. Any path can be armed to fail with a chosen
//! [`io::ErrorKind`] to exercise error handling.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    io,
    path::{Path, PathBuf},
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use sprout_core::{
    application::ports::{Filesystem, FsError},
    domain::TreeEntry,
};

/// In-memory filesystem for testing.
///
/// Clones share the same tree, so a test can keep a handle after boxing one
/// into a materializer.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
    faults: HashMap<PathBuf, io::ErrorKind>,
}

impl Inner {
    fn occupied(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }

    fn check_fault(&self, path: &Path, operation: &'static str) -> Result<(), FsError> {
        match self.faults.get(path) {
            Some(kind) => Err(FsError::new(
                path,
                operation,
                io::Error::new(*kind, "injected fault"),
            )),
            None => Ok(()),
        }
    }

    /// Put `content` at `path`, which must sit in an existing directory.
    fn store(
        &mut self,
        path: &Path,
        content: Vec<u8>,
        operation: &'static str,
    ) -> Result<u64, FsError> {
        if self.directories.contains(path) {
            return Err(error(path, operation, io::ErrorKind::IsADirectory));
        }
        if let Some(parent) = path.parent() {
            self.require_dir(parent, operation)
                .map_err(|_| error(path, operation, io::ErrorKind::NotFound))?;
        }
        let len = content.len() as u64;
        self.files.insert(path.to_path_buf(), content);
        Ok(len)
    }

    fn require_dir(&self, path: &Path, operation: &'static str) -> Result<(), FsError> {
        if self.directories.contains(path) || is_root(path) {
            Ok(())
        } else if self.files.contains_key(path) {
            Err(error(path, operation, io::ErrorKind::NotADirectory))
        } else {
            Err(error(path, operation, io::ErrorKind::NotFound))
        }
    }
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        let mut inner = self.write();
        if let Some(parent) = path.parent() {
            insert_ancestors(&mut inner, parent);
        }
        inner.files.insert(path.to_path_buf(), content.into());
    }

    /// Add a directory and its parents.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        insert_ancestors(&mut self.write(), path.as_ref());
    }

    /// Make every operation on `path` fail with `kind`.
    pub fn fail_on(&self, path: impl Into<PathBuf>, kind: io::ErrorKind) {
        self.write().faults.insert(path.into(), kind);
    }

    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.read().files.get(path.as_ref()).cloned()
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.read().directories.contains(path.as_ref())
    }

    /// Every file path, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read().files.keys().cloned().collect()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.read().occupied(path)
    }

    fn walk(&self, root: &Path) -> Result<Vec<TreeEntry>, FsError> {
        let inner = self.read();
        inner.check_fault(root, "read template")?;
        inner.require_dir(root, "read template")?;

        // BTree order on paths compares component-wise, which is exactly a
        // pre-order walk with siblings sorted by name.
        let mut found: Vec<(&PathBuf, bool)> = inner
            .directories
            .iter()
            .map(|p| (p, true))
            .chain(inner.files.keys().map(|p| (p, false)))
            .filter(|(p, _)| p.starts_with(root) && p.as_path() != root)
            .collect();
        found.sort();

        found
            .into_iter()
            .map(|(path, is_dir)| -> Result<TreeEntry, FsError> {
                inner.check_fault(path, "read template")?;
                let relative = path.strip_prefix(root).unwrap_or(path);
                Ok(if is_dir {
                    TreeEntry::directory(relative)
                } else {
                    TreeEntry::file(relative)
                })
            })
            .collect()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), FsError> {
        let mut inner = self.write();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.check_fault(&current, "create directory")?;
            if inner.files.contains_key(&current) {
                return Err(error(&current, "create directory", io::ErrorKind::AlreadyExists));
            }
        }
        insert_ancestors(&mut inner, path);
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> Result<(), FsError> {
        let mut inner = self.write();
        inner.check_fault(path, "create directory")?;
        if inner.occupied(path) || is_root(path) {
            return Err(error(path, "create directory", io::ErrorKind::AlreadyExists));
        }
        if let Some(parent) = path.parent() {
            inner.require_dir(parent, "create directory")?;
        }
        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<u64, FsError> {
        let mut inner = self.write();
        inner.check_fault(from, "copy file")?;
        inner.check_fault(to, "copy file")?;

        let content = inner
            .files
            .get(from)
            .cloned()
            .ok_or_else(|| error(from, "copy file", io::ErrorKind::NotFound))?;
        inner.store(to, content, "copy file")
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<u64, FsError> {
        let mut inner = self.write();
        inner.check_fault(path, "write file")?;
        inner.store(path, contents.to_vec(), "write file")
    }
}

fn insert_ancestors(inner: &mut Inner, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        if !is_root(&current) {
            inner.directories.insert(current.clone());
        }
    }
}

fn is_root(path: &Path) -> bool {
    path.as_os_str().is_empty() || path.parent().is_none()
}

fn error(path: &Path, operation: &'static str, kind: io::ErrorKind) -> FsError {
    FsError::new(path, operation, io::Error::from(kind))
}
