//! In-memory filesystem adapter for testing.
//!
//! Unlike a bare hash-map fake, this adapter enforces the same failure
//! classification as [`super::LocalFilesystem`] — `AlreadyExists`,
//! `ParentMissing`, `DestinationUnwritable` — so service-level tests
//! exercise the real abort paths without touching a disk.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use seedling_core::{
    application::{ProvisionError, ports::Filesystem},
    error::{SeedlingError, SeedlingResult},
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a memory filesystem with one pre-existing directory (typically
    /// the parent the project will be created under).
    pub fn with_dir(path: impl Into<PathBuf>) -> Self {
        let fs = Self::new();
        fs.seed_dir(path);
        fs
    }

    /// Register a directory without going through the guarded operations.
    pub fn seed_dir(&self, path: impl Into<PathBuf>) {
        self.inner.write().unwrap().directories.insert(path.into());
    }

    /// Register a file without going through the guarded operations.
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.inner
            .write()
            .unwrap()
            .files
            .insert(path.into(), content.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Check whether a directory was created (testing helper).
    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner.read().unwrap().directories.contains(path)
    }

    /// List all files (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    fn lock_err() -> SeedlingError {
        SeedlingError::Internal {
            message: "memory filesystem lock poisoned".into(),
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_project_dir(&self, path: &Path) -> SeedlingResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_err())?;

        if inner.files.contains_key(path) || inner.directories.contains(path) {
            return Err(ProvisionError::AlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ProvisionError::ParentMissing {
                    path: path.to_path_buf(),
                    parent: parent.to_path_buf(),
                }
                .into());
            }
        }

        inner.directories.insert(path.to_path_buf());
        Ok(())
    }

    fn create_subdir(&self, parent: &Path, name: &str) -> SeedlingResult<PathBuf> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_err())?;
        let path = parent.join(name);

        if !inner.directories.contains(parent) {
            return Err(ProvisionError::ParentMissing {
                path: path.clone(),
                parent: parent.to_path_buf(),
            }
            .into());
        }
        if inner.files.contains_key(&path) || inner.directories.contains(&path) {
            return Err(ProvisionError::AlreadyExists { path }.into());
        }

        inner.directories.insert(path.clone());
        Ok(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> SeedlingResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_err())?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ProvisionError::DestinationUnwritable {
                    path: path.to_path_buf(),
                }
                .into());
            }
        }

        // Create-or-replace, like the real adapter.
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
