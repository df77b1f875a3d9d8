//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `seedling-adapters` crate provides implementations.

use crate::domain::TemplateId;
use crate::error::SeedlingResult;
use std::path::{Path, PathBuf};

/// Port for guarded filesystem provisioning.
///
/// Implemented by:
/// - `seedling_adapters::filesystem::LocalFilesystem` (production)
/// - `seedling_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Failure classification (`AlreadyExists`, `ParentMissing`, `Os`, …)
///   happens behind this port, so the dispatcher only sees the taxonomy.
/// - Every returned error is fatal for the run; there is no retry and no
///   rollback of state already on disk.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create the project root directory (and missing ancestors).
    ///
    /// Fails `AlreadyExists` if anything is at `path` — file or directory,
    /// empty or not — and `ParentMissing` if the immediate parent is absent.
    /// Implementations double-check that the path is a directory after
    /// creation and report `Unknown` if it is not.
    fn create_project_dir(&self, path: &Path) -> SeedlingResult<()>;

    /// Create one subdirectory of an already-created parent.
    ///
    /// Does not create missing ancestors. Returns the subdirectory path.
    fn create_subdir(&self, parent: &Path, name: &str) -> SeedlingResult<PathBuf>;

    /// Write content to a file, creating or replacing it.
    fn write_file(&self, path: &Path, content: &str) -> SeedlingResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template resolution.
///
/// Implemented by:
/// - `seedling_adapters::templates::EmbeddedTemplates` (compiled-in, production)
/// - `seedling_adapters::templates::MemoryTemplates` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Resolve a template id to its verbatim content.
    fn get(&self, id: TemplateId) -> SeedlingResult<String>;
}

/// Captured result of one external tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the tool exited with status zero.
    pub success: bool,
    /// Exit code, when the tool ran to completion.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A successful, silent invocation — handy in tests.
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    /// A completed-but-failed invocation with the given exit code.
    pub fn failed(code: i32) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

/// Port for version-control initialization.
///
/// `Err` means the tool could not be spawned at all; `Ok` with
/// `success == false` means it ran and refused. The dispatcher treats both
/// as best-effort: logged, never fatal.
#[cfg_attr(test, mockall::automock)]
pub trait VcsClient: Send + Sync {
    fn init_repo(&self, path: &Path) -> SeedlingResult<CommandOutput>;
}

/// Port for package-manager project delegation (`cargo new`).
///
/// Same best-effort contract as [`VcsClient`].
#[cfg_attr(test, mockall::automock)]
pub trait PackageManager: Send + Sync {
    fn new_project(&self, path: &Path) -> SeedlingResult<CommandOutput>;
}
