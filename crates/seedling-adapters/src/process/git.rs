//! Git client: repository initialization via the `git` binary.

use std::path::Path;

use seedling_core::{
    application::ports::{CommandOutput, VcsClient},
    error::SeedlingResult,
};

/// Version-control client shelling out to `git`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }
}

impl VcsClient for GitCli {
    fn init_repo(&self, path: &Path) -> SeedlingResult<CommandOutput> {
        super::run_tool("git", &["init"], path)
    }
}
