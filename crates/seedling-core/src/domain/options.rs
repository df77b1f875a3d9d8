//! The validated options record driving one provisioning run.

use std::io;
use std::path::PathBuf;

use crate::domain::Profile;

/// Everything the dispatcher needs for one run.
///
/// Owned by the caller (the CLI layer), immutable once built. The CLI is
/// responsible for validating `name` as a path segment before construction —
/// see [`crate::domain::validate_project_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Project name; becomes the final path segment of the project root.
    pub name: String,
    /// Parent directory the project is created under.
    pub path: PathBuf,
    /// Which registry recipe to run.
    pub profile: Profile,
    /// Skip version-control initialization entirely (no log noise).
    pub no_vcs: bool,
}

impl Options {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        profile: Profile,
        no_vcs: bool,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            profile,
            no_vcs,
        }
    }

    /// The absolute project root: `absolutize(path)/name`.
    ///
    /// Computed once by the dispatcher at the start of a run and reused by
    /// every step. Fails only if `path` is empty.
    pub fn project_path(&self) -> io::Result<PathBuf> {
        Ok(std::path::absolute(&self.path)?.join(&self.name))
    }
}

/// Convenience for log lines: `name (profile) at path`.
impl std::fmt::Display for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) at {}",
            self.name,
            self.profile,
            self.path.display()
        )
    }
}
