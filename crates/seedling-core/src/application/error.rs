//! Application layer errors.
//!
//! These represent failures in the provisioning pipeline, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.
//!
//! Every filesystem variant here is fatal for the whole run: the dispatcher
//! propagates it, the CLI logs one `[ERROR]` line and exits non-zero. There
//! is no retry and no rollback of already-created state.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{ErrorCategory, TemplateId};

/// Classified failures from the filesystem provisioner and process clients.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProvisionError {
    /// The target path already exists — file or directory, empty or not.
    #[error("{path} already exists")]
    AlreadyExists { path: PathBuf },

    /// The immediate parent of the target path does not exist.
    #[error("parent directory does not exist: {parent}")]
    ParentMissing { path: PathBuf, parent: PathBuf },

    /// An embedded template resource could not be resolved.
    #[error("template '{id}' not found")]
    TemplateNotFound { id: TemplateId },

    /// The destination could not be written (missing parent, permissions).
    #[error("destination is not writable: {path}")]
    DestinationUnwritable { path: PathBuf },

    /// Any other OS-level denial, with the host error code.
    #[error("the host operating system returned error code {code}")]
    Os { path: PathBuf, code: i32 },

    /// Catch-all: the failure could not be classified.
    #[error("unclassified filesystem failure at {path}")]
    Unknown { path: PathBuf },

    /// An external tool could not be spawned at all. Surfaced by the VCS and
    /// package-manager clients; the dispatcher treats it as best-effort.
    #[error("could not run '{command}': {reason}")]
    Spawn { command: String, reason: String },
}

impl ProvisionError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AlreadyExists { path } => vec![
                format!("The path '{}' already exists", path.display()),
                "Choose a different project name".into(),
                "Or remove the existing path first".into(),
            ],
            Self::ParentMissing { parent, .. } => vec![
                format!("Create the parent directory first: {}", parent.display()),
                "Or pass an existing directory via --path".into(),
            ],
            Self::TemplateNotFound { id } => vec![
                format!("Template '{id}' is missing from this build"),
                "This is a packaging defect; please report it".into(),
            ],
            Self::DestinationUnwritable { path } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::Os { code, .. } => vec![
                format!("The operating system refused the operation (code {code})"),
                "Check permissions and available disk space".into(),
            ],
            Self::Unknown { .. } => vec!["Re-run with -v for more detail".into()],
            Self::Spawn { command, .. } => vec![
                format!("Ensure '{command}' is installed and on your PATH"),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AlreadyExists { .. } | Self::ParentMissing { .. } => ErrorCategory::Validation,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::DestinationUnwritable { .. }
            | Self::Os { .. }
            | Self::Unknown { .. }
            | Self::Spawn { .. } => ErrorCategory::Internal,
        }
    }

    /// Short stable name of the failure kind, used in the final `[ERROR]`
    /// line so scripts can match on it.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AlreadyExists { .. } => "AlreadyExists",
            Self::ParentMissing { .. } => "ParentMissing",
            Self::TemplateNotFound { .. } => "TemplateNotFound",
            Self::DestinationUnwritable { .. } => "DestinationUnwritable",
            Self::Os { .. } => "OsError",
            Self::Unknown { .. } => "Unknown",
            Self::Spawn { .. } => "Spawn",
        }
    }
}
