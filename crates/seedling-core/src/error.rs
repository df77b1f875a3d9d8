//! Unified error handling for Seedling Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with category and suggestion accessors the CLI uses
//! for display and exit codes.

use thiserror::Error;

use crate::application::ProvisionError;
use crate::domain::DomainError;

// The one category enum crosses all layers here, re-exported from domain.
pub use crate::domain::ErrorCategory;

/// Root error type for Seedling Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeedlingError {
    /// Errors from the domain layer (invalid inputs).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the provisioning pipeline (fatal steps).
    #[error("{0}")]
    Provision(#[from] ProvisionError),

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl SeedlingError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Provision(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in seedling".into(),
                "Please open an issue with the full -vv output".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Provision(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Stable failure-kind name for the final `[ERROR]` line.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Domain(_) => "InvalidInput",
            Self::Provision(e) => e.kind(),
            Self::Internal { .. } => "Internal",
        }
    }
}

/// Convenient result type alias.
pub type SeedlingResult<T> = Result<T, SeedlingError>;
