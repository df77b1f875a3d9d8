//! Local filesystem adapter using std::fs.
//!
//! This is where raw `io::Error`s become the classified provisioning
//! taxonomy (`AlreadyExists`, `ParentMissing`, `Os(code)`, …) the dispatcher
//! reports on. The guards mirror the contract exactly: an existing target is
//! always fatal, whether it is a file, an empty directory, or a populated
//! one.

use std::io;
use std::path::{Path, PathBuf};

use seedling_core::{
    application::{ProvisionError, ports::Filesystem},
    error::{SeedlingError, SeedlingResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_project_dir(&self, path: &Path) -> SeedlingResult<()> {
        // Pre-checks: anything already at the target is fatal, and the
        // immediate parent must exist before we create anything.
        if path.exists() {
            return Err(ProvisionError::AlreadyExists {
                path: path.to_path_buf(),
            }
            .into());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(ProvisionError::ParentMissing {
                    path: path.to_path_buf(),
                    parent: parent.to_path_buf(),
                }
                .into());
            }
        }

        std::fs::create_dir_all(path).map_err(|e| classify_create(path, e))?;

        // Defensive double-check: creation reported success, so the path
        // must now be a directory.
        if !path.is_dir() {
            return Err(ProvisionError::Unknown {
                path: path.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }

    fn create_subdir(&self, parent: &Path, name: &str) -> SeedlingResult<PathBuf> {
        let path = parent.join(name);
        // Single level only: the parent was created by an earlier step.
        std::fs::create_dir(&path).map_err(|e| classify_create(&path, e))?;
        Ok(path)
    }

    fn write_file(&self, path: &Path, content: &str) -> SeedlingResult<()> {
        // Create-or-replace: no existence check before the write.
        std::fs::write(path, content).map_err(|e| classify_write(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Classify a directory-creation failure.
fn classify_create(path: &Path, e: io::Error) -> SeedlingError {
    match e.kind() {
        io::ErrorKind::AlreadyExists => ProvisionError::AlreadyExists {
            path: path.to_path_buf(),
        },
        io::ErrorKind::NotFound => ProvisionError::ParentMissing {
            path: path.to_path_buf(),
            parent: path.parent().unwrap_or(path).to_path_buf(),
        },
        _ => os_or_unknown(path, e),
    }
    .into()
}

/// Classify a file-write failure. Missing parents and permission denials
/// both land in `DestinationUnwritable`.
fn classify_write(path: &Path, e: io::Error) -> SeedlingError {
    match e.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
            ProvisionError::DestinationUnwritable {
                path: path.to_path_buf(),
            }
        }
        _ => os_or_unknown(path, e),
    }
    .into()
}

fn os_or_unknown(path: &Path, e: io::Error) -> ProvisionError {
    match e.raw_os_error() {
        Some(code) => ProvisionError::Os {
            path: path.to_path_buf(),
            code,
        },
        None => ProvisionError::Unknown {
            path: path.to_path_buf(),
        },
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
