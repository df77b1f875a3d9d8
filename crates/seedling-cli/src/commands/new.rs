//! Implementation of the `seedling new` command.
//!
//! Responsibility: translate CLI arguments into an `Options` record, wire up
//! the production adapters, and call the core provision service. No
//! provisioning logic lives here.

use tracing::{debug, instrument};

use seedling_adapters::{CargoCli, EmbeddedTemplates, GitCli, LocalFilesystem};
use seedling_core::{
    application::ProvisionService,
    domain::{self, Options, ProvisionStep, Recipe},
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `seedling new` command.
///
/// Dispatch sequence:
/// 1. Validate the project name (the core assumes a valid path segment)
/// 2. Build the `Options` record from CLI args + config defaults
/// 3. Early-exit with the plan if `--dry-run`
/// 4. Execute provisioning via `ProvisionService`
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validate the name before the core ever sees it.
    domain::validate_project_name(&args.name).map_err(|e| match e {
        domain::DomainError::InvalidProjectName { name, reason } => {
            CliError::InvalidProjectName { name, reason }
        }
        other => CliError::Core(other.into()),
    })?;

    // 2. Build the options record. The config file supplies no_git when the
    //    flag is absent; an explicit --no-git always wins.
    let no_vcs = args.no_git || config.defaults.no_git;
    let options = Options::new(
        args.name.as_str(),
        args.path.as_path(),
        args.profile.to_core(),
        no_vcs,
    );

    debug!(
        profile = %options.profile,
        path = %options.path.display(),
        no_vcs = options.no_vcs,
        "Options resolved"
    );

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        return describe_plan(&options, &output);
    }

    // 4. Wire production adapters and run.
    let service = ProvisionService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(EmbeddedTemplates::new()),
        Box::new(GitCli::new()),
        Box::new(CargoCli::new()),
    );

    service.run(&options).map_err(CliError::Core)?;

    // 5. Success + next steps.
    output.success(&format!("Project '{}' created!", options.name))?;
    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", options.name))?;
        output.print("  # Start building!")?;
    }

    Ok(())
}

/// Print the resolved plan without touching the filesystem.
fn describe_plan(options: &Options, output: &OutputManager) -> CliResult<()> {
    let project_path = options.project_path().map_err(|e| CliError::IoError {
        message: format!("could not resolve project path: {e}"),
        source: e,
    })?;

    output.info(&format!(
        "Dry run: would create '{}' at {}",
        options.name,
        project_path.display()
    ))?;
    output.info(&format!("  Profile: {}", options.profile))?;

    match options.profile.recipe() {
        Recipe::DelegateToPackageManager => {
            output.info("  Delegates to: cargo new")?;
        }
        Recipe::Steps(steps) => {
            for step in steps {
                match *step {
                    ProvisionStep::CreateDir(rel) if rel.is_empty() => {
                        output.info(&format!("  Create {}", project_path.display()))?;
                    }
                    ProvisionStep::CreateDir(rel) => {
                        output.info(&format!("  Create {}/{rel}", project_path.display()))?;
                    }
                    ProvisionStep::CopyTemplate { template, dest } => {
                        output.info(&format!(
                            "  Write  {}/{dest} (from {template})",
                            project_path.display()
                        ))?;
                    }
                    ProvisionStep::InitVcs if options.no_vcs => {}
                    ProvisionStep::InitVcs => {
                        output.info("  Initialize git repository")?;
                    }
                }
            }
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
