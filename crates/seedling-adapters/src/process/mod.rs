//! External tool clients (`git`, `cargo`).
//!
//! Both clients share one contract: `Err` means the tool could not be
//! spawned, `Ok` carries the captured exit status and output. Neither is
//! fatal at the dispatcher — these are the best-effort steps of the
//! pipeline. No timeout handling: a hung tool hangs the run.

mod cargo;
mod git;

pub use cargo::CargoCli;
pub use git::GitCli;

use std::path::Path;
use std::process::Command;

use tracing::debug;

use seedling_core::{
    application::{ProvisionError, ports::CommandOutput},
    error::SeedlingResult,
};

/// Run `program <args> <path>`, capturing output.
fn run_tool(program: &str, args: &[&str], path: &Path) -> SeedlingResult<CommandOutput> {
    debug!("running {program} {} {}", args.join(" "), path.display());

    let output = Command::new(program)
        .args(args)
        .arg(path)
        .output()
        .map_err(|e| ProvisionError::Spawn {
            command: program.to_string(),
            reason: e.to_string(),
        })?;

    Ok(CommandOutput {
        success: output.status.success(),
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_failure_is_classified() {
        let err = run_tool(
            "seedling-test-no-such-tool",
            &["init"],
            Path::new("/tmp/ignored"),
        )
        .unwrap_err();
        assert_eq!(err.kind(), "Spawn");
    }
}
