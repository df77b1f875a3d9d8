//! Provision Service - main application orchestrator.
//!
//! This service coordinates the entire provisioning workflow:
//! 1. Compute the absolute project path
//! 2. Resolve the profile's recipe from the registry
//! 3. Interpret the steps via the Filesystem / TemplateStore / VcsClient ports
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).
//!
//! One generic interpreter loop executes every profile; there are no
//! per-profile functions. The first fatal step failure is returned as-is —
//! no retry, no rollback of state already on disk — and the CLI turns it
//! into a single classified error line and a non-zero exit.

use std::path::Path;
use tracing::{error, info, instrument, warn};

use crate::{
    application::ports::{CommandOutput, Filesystem, PackageManager, TemplateStore, VcsClient},
    domain::{DomainError, Options, ProvisionStep, Recipe},
    error::SeedlingResult,
};

/// Main provisioning service.
///
/// Orchestrates directory creation, template copying, and version-control
/// initialization for one run.
pub struct ProvisionService {
    filesystem: Box<dyn Filesystem>,
    templates: Box<dyn TemplateStore>,
    vcs: Box<dyn VcsClient>,
    package_manager: Box<dyn PackageManager>,
}

impl ProvisionService {
    /// Create a new provision service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        templates: Box<dyn TemplateStore>,
        vcs: Box<dyn VcsClient>,
        package_manager: Box<dyn PackageManager>,
    ) -> Self {
        Self {
            filesystem,
            templates,
            vcs,
            package_manager,
        }
    }

    /// Provision a new project.
    ///
    /// This is the main use case - runs the requested profile's recipe
    /// against the target path.
    #[instrument(
        skip_all,
        fields(project = %options.name, profile = %options.profile)
    )]
    pub fn run(&self, options: &Options) -> SeedlingResult<()> {
        let project_path = options.project_path().map_err(|e| {
            DomainError::InvalidParentPath {
                reason: e.to_string(),
            }
        })?;

        info!("Project name: {}", options.name);
        info!("Path: {}", project_path.display());
        info!("Using {} profile", options.profile);

        match options.profile.recipe() {
            Recipe::Steps(steps) => self.run_steps(options, &project_path, steps)?,
            Recipe::DelegateToPackageManager => self.run_delegated(options, &project_path),
        }

        info!("Done");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Step interpreter
    // -------------------------------------------------------------------------

    fn run_steps(
        &self,
        options: &Options,
        root: &Path,
        steps: &[ProvisionStep],
    ) -> SeedlingResult<()> {
        for step in steps {
            match *step {
                ProvisionStep::CreateDir(rel) if rel.is_empty() => {
                    info!("Creating directory {}", root.display());
                    self.filesystem.create_project_dir(root)?;
                }
                ProvisionStep::CreateDir(rel) => {
                    info!("Creating {rel} directory");
                    self.filesystem.create_subdir(root, rel)?;
                }
                ProvisionStep::CopyTemplate { template, dest } => {
                    let content = self.templates.get(template)?;
                    let dest_path = root.join(dest);
                    info!("Creating {}...", dest_path.display());
                    self.filesystem.write_file(&dest_path, &content)?;
                }
                ProvisionStep::InitVcs => self.init_vcs(options, root),
            }
        }
        Ok(())
    }

    /// Hand project creation to the package manager, then initialize VCS.
    ///
    /// The delegate owns directory creation, including its own handling of
    /// existing targets — no `AlreadyExists` pre-check happens here. Its
    /// failure is best-effort like the VCS step.
    fn run_delegated(&self, options: &Options, root: &Path) {
        match self.package_manager.new_project(root) {
            Ok(output) if output.success => {
                info!("Created package at {}", root.display());
                log_tool_output(&output);
            }
            Ok(output) => {
                error!(
                    "package creation at {} failed with exit code {}",
                    root.display(),
                    describe_code(output.code)
                );
                log_tool_output(&output);
            }
            Err(e) => error!("package creation at {} failed: {e}", root.display()),
        }

        self.init_vcs(options, root);
    }

    /// The one best-effort step: failure is logged, never fatal.
    fn init_vcs(&self, options: &Options, root: &Path) {
        if options.no_vcs {
            return;
        }

        if self.filesystem.exists(&root.join(".git")) {
            warn!(
                "repository already initialized at {}, skipping",
                root.display()
            );
            return;
        }

        match self.vcs.init_repo(root) {
            Ok(output) if output.success => {
                info!("Initialized repository at {}", root.display());
                log_tool_output(&output);
            }
            Ok(output) => {
                error!(
                    "repository initialization at {} failed with exit code {}",
                    root.display(),
                    describe_code(output.code)
                );
                log_tool_output(&output);
            }
            Err(e) => error!("repository initialization at {} failed: {e}", root.display()),
        }
    }
}

/// Re-emit captured subprocess output at info level.
fn log_tool_output(output: &CommandOutput) {
    if !output.stdout.trim().is_empty() {
        info!("{}", output.stdout.trim_end());
    }
    if !output.stderr.trim().is_empty() {
        info!("{}", output.stderr.trim_end());
    }
}

fn describe_code(code: Option<i32>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use mockall::Sequence;

    use crate::{
        application::error::ProvisionError,
        application::ports::output::{
            MockFilesystem, MockPackageManager, MockTemplateStore, MockVcsClient,
        },
        domain::{Profile, TemplateId},
        error::SeedlingError,
    };

    fn service(
        fs: MockFilesystem,
        ts: MockTemplateStore,
        vcs: MockVcsClient,
        pm: MockPackageManager,
    ) -> ProvisionService {
        ProvisionService::new(Box::new(fs), Box::new(ts), Box::new(vcs), Box::new(pm))
    }

    fn options(profile: Profile, no_vcs: bool) -> Options {
        Options::new("demo", "/tmp", profile, no_vcs)
    }

    #[test]
    fn default_profile_executes_steps_in_registry_order() {
        let mut seq = Sequence::new();
        let mut fs = MockFilesystem::new();
        let mut vcs = MockVcsClient::new();

        fs.expect_create_project_dir()
            .withf(|p| p == Path::new("/tmp/demo"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_exists()
            .withf(|p| p == Path::new("/tmp/demo/.git"))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(false);
        vcs.expect_init_repo()
            .withf(|p| p == Path::new("/tmp/demo"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(CommandOutput::ok()));
        fs.expect_create_subdir()
            .withf(|p, name| p == Path::new("/tmp/demo") && name == "src")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|p, name| Ok(p.join(name)));

        let svc = service(fs, MockTemplateStore::new(), vcs, MockPackageManager::new());
        svc.run(&options(Profile::Default, false)).unwrap();
    }

    #[test]
    fn no_vcs_never_touches_the_vcs_client() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_project_dir().returning(|_| Ok(()));
        fs.expect_create_subdir().returning(|p, n| Ok(p.join(n)));
        // No expectations on the VCS mock: any call panics. exists() is not
        // consulted either — the skip happens before the metadata check.

        let svc = service(
            fs,
            MockTemplateStore::new(),
            MockVcsClient::new(),
            MockPackageManager::new(),
        );
        svc.run(&options(Profile::Default, true)).unwrap();
    }

    #[test]
    fn preexisting_metadata_dir_skips_invocation_and_continues() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_project_dir().returning(|_| Ok(()));
        fs.expect_exists()
            .withf(|p| p == Path::new("/tmp/demo/.git"))
            .return_const(true);
        fs.expect_create_subdir().returning(|p, n| Ok(p.join(n)));

        let svc = service(
            fs,
            MockTemplateStore::new(),
            MockVcsClient::new(), // init_repo must not be called
            MockPackageManager::new(),
        );
        svc.run(&options(Profile::Default, false)).unwrap();
    }

    #[test]
    fn vcs_failure_is_not_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_project_dir().returning(|_| Ok(()));
        fs.expect_exists().return_const(false);
        // The src/ step after the failed VCS step must still run.
        fs.expect_create_subdir()
            .times(1)
            .returning(|p, n| Ok(p.join(n)));

        let mut vcs = MockVcsClient::new();
        vcs.expect_init_repo()
            .returning(|_| Ok(CommandOutput::failed(128)));

        let svc = service(fs, MockTemplateStore::new(), vcs, MockPackageManager::new());
        svc.run(&options(Profile::Default, false)).unwrap();
    }

    #[test]
    fn vcs_spawn_error_is_not_fatal_either() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_project_dir().returning(|_| Ok(()));
        fs.expect_exists().return_const(false);
        fs.expect_create_subdir().returning(|p, n| Ok(p.join(n)));

        let mut vcs = MockVcsClient::new();
        vcs.expect_init_repo().returning(|_| {
            Err(ProvisionError::Spawn {
                command: "git".into(),
                reason: "No such file or directory".into(),
            }
            .into())
        });

        let svc = service(fs, MockTemplateStore::new(), vcs, MockPackageManager::new());
        svc.run(&options(Profile::Default, false)).unwrap();
    }

    #[test]
    fn fatal_root_creation_aborts_before_any_later_step() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_project_dir().returning(|p| {
            Err(ProvisionError::AlreadyExists {
                path: p.to_path_buf(),
            }
            .into())
        });
        // No create_subdir / exists expectations: reaching them panics.

        let svc = service(
            fs,
            MockTemplateStore::new(),
            MockVcsClient::new(),
            MockPackageManager::new(),
        );
        let err = svc.run(&options(Profile::Default, false)).unwrap_err();
        assert!(matches!(
            err,
            SeedlingError::Provision(ProvisionError::AlreadyExists { .. })
        ));
    }

    #[test]
    fn missing_template_aborts_with_created_dirs_left_behind() {
        let mut seq = Sequence::new();
        let mut fs = MockFilesystem::new();
        let mut ts = MockTemplateStore::new();

        // cpp recipe: root is created, then the Makefile template fails to
        // resolve; write_file and the src/include steps never run.
        fs.expect_create_project_dir()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        ts.expect_get()
            .withf(|id| *id == TemplateId::CppMakefile)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|id| Err(ProvisionError::TemplateNotFound { id }.into()));

        let svc = service(fs, ts, MockVcsClient::new(), MockPackageManager::new());
        let err = svc.run(&options(Profile::Cpp, true)).unwrap_err();
        assert!(matches!(
            err,
            SeedlingError::Provision(ProvisionError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn cpp_profile_writes_templates_to_their_destinations() {
        let mut fs = MockFilesystem::new();
        let mut ts = MockTemplateStore::new();

        fs.expect_create_project_dir().returning(|_| Ok(()));
        fs.expect_create_subdir().returning(|p, n| Ok(p.join(n)));
        ts.expect_get().returning(|id| Ok(format!("content of {id}")));

        let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = written.clone();
        fs.expect_write_file().returning(move |p, _| {
            sink.lock().unwrap().push(p.to_path_buf());
            Ok(())
        });

        let svc = service(fs, ts, MockVcsClient::new(), MockPackageManager::new());
        svc.run(&options(Profile::Cpp, true)).unwrap();

        assert_eq!(
            *written.lock().unwrap(),
            vec![
                PathBuf::from("/tmp/demo/Makefile"),
                PathBuf::from("/tmp/demo/src/main.cpp"),
            ]
        );
    }

    #[test]
    fn rust_profile_delegates_and_does_not_precheck() {
        let mut pm = MockPackageManager::new();
        pm.expect_new_project()
            .withf(|p| p == Path::new("/tmp/demo"))
            .times(1)
            .returning(|_| Ok(CommandOutput::ok()));

        let mut fs = MockFilesystem::new();
        // Only the .git metadata check runs; cargo already initialized one.
        fs.expect_exists().return_const(true);

        let svc = service(fs, MockTemplateStore::new(), MockVcsClient::new(), pm);
        svc.run(&options(Profile::Rust, false)).unwrap();
    }

    #[test]
    fn rust_delegate_failure_is_not_fatal() {
        let mut pm = MockPackageManager::new();
        pm.expect_new_project().returning(|_| {
            Err(ProvisionError::Spawn {
                command: "cargo".into(),
                reason: "No such file or directory".into(),
            }
            .into())
        });

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        let mut vcs = MockVcsClient::new();
        vcs.expect_init_repo()
            .times(1)
            .returning(|_| Ok(CommandOutput::ok()));

        let svc = service(fs, MockTemplateStore::new(), vcs, pm);
        svc.run(&options(Profile::Rust, false)).unwrap();
    }
}
