//! Application layer for Seedling.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProvisionService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. The profile registry lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::ProvisionService;

// Re-export port traits (for adapter implementation)
pub use ports::{CommandOutput, Filesystem, PackageManager, TemplateStore, VcsClient};

pub use error::ProvisionError;
