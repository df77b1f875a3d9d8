//! Project-name validation.
//!
//! The dispatcher assumes `Options::name` is a single, valid path segment;
//! the CLI layer must call [`validate_project_name`] before building an
//! `Options` record.

use crate::domain::error::DomainError;

/// Check that `name` is usable as the final segment of the project path.
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(invalid(name, "name cannot be empty"));
    }
    if name.starts_with('.') {
        return Err(invalid(name, "name cannot start with '.'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid(name, "name cannot contain path separators"));
    }
    Ok(())
}

fn invalid(name: &str, reason: &str) -> DomainError {
    DomainError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    }
}
