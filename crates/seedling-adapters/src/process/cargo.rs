//! Cargo client: project delegation via `cargo new`.

use std::path::Path;

use seedling_core::{
    application::ports::{CommandOutput, PackageManager},
    error::SeedlingResult,
};

/// Package-manager client shelling out to `cargo`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CargoCli;

impl CargoCli {
    pub fn new() -> Self {
        Self
    }
}

impl PackageManager for CargoCli {
    fn new_project(&self, path: &Path) -> SeedlingResult<CommandOutput> {
        super::run_tool("cargo", &["new"], path)
    }
}
