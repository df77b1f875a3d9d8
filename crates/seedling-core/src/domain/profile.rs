//! Profile registry: the fixed mapping from profile name to provisioning
//! recipe.
//!
//! A [`Profile`] names a project type; its [`Recipe`] is either an ordered,
//! static list of [`ProvisionStep`]s interpreted by the dispatcher, or a
//! delegation marker for profiles whose scaffolding is owned by an external
//! tool (`rust` → `cargo new`). The tables here are the single source of
//! truth — there are no per-profile functions anywhere else.

use serde::Serialize;

// ── Template identifiers ──────────────────────────────────────────────────────

/// Stable identifier for an embedded boilerplate template.
///
/// The string form (`cpp.makefile`, `baremetal.linker-script`, …) is the id
/// used in logs and error messages; resolution to content happens behind the
/// `TemplateStore` port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    CppMakefile,
    CppMain,
    CmakeLists,
    CmakeMain,
    BaremetalMakefile,
    BaremetalLinkerScript,
    BaremetalGrubCfg,
    BaremetalMultiboot2Header,
    BaremetalEntry,
}

impl TemplateId {
    /// All known template ids, in registry order.
    pub const ALL: [TemplateId; 9] = [
        TemplateId::CppMakefile,
        TemplateId::CppMain,
        TemplateId::CmakeLists,
        TemplateId::CmakeMain,
        TemplateId::BaremetalMakefile,
        TemplateId::BaremetalLinkerScript,
        TemplateId::BaremetalGrubCfg,
        TemplateId::BaremetalMultiboot2Header,
        TemplateId::BaremetalEntry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CppMakefile => "cpp.makefile",
            Self::CppMain => "cpp.main",
            Self::CmakeLists => "cpp-cmake.cmakelists",
            Self::CmakeMain => "cpp-cmake.main",
            Self::BaremetalMakefile => "baremetal.makefile",
            Self::BaremetalLinkerScript => "baremetal.linker-script",
            Self::BaremetalGrubCfg => "baremetal.grub-cfg",
            Self::BaremetalMultiboot2Header => "baremetal.multiboot2-header",
            Self::BaremetalEntry => "baremetal.entry",
        }
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Provision steps ───────────────────────────────────────────────────────────

/// One atomic unit of provisioning work.
///
/// Paths are relative to the project root; the empty string denotes the
/// project root itself. Steps are created at registry-definition time and
/// never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionStep {
    /// Create a directory. `""` is the project root (created with missing
    /// ancestors); anything else is a subdirectory of an already-created
    /// parent.
    CreateDir(&'static str),
    /// Copy an embedded template verbatim to a destination under the root.
    CopyTemplate {
        template: TemplateId,
        dest: &'static str,
    },
    /// Initialize a version-control repository at the project root.
    InitVcs,
}

/// How a profile is provisioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipe {
    /// Interpret these steps in order; the first fatal failure aborts the run.
    Steps(&'static [ProvisionStep]),
    /// Hand the whole project creation to the package manager (`cargo new`),
    /// best-effort, then initialize version control.
    DelegateToPackageManager,
}

// ── Step tables ───────────────────────────────────────────────────────────────
//
// Ordering is the contract: directories are created before any template lands
// under them. The dispatcher does no dependency resolution.

static DEFAULT_STEPS: [ProvisionStep; 3] = [
    ProvisionStep::CreateDir(""),
    ProvisionStep::InitVcs,
    ProvisionStep::CreateDir("src"),
];

static CPP_STEPS: [ProvisionStep; 6] = [
    ProvisionStep::CreateDir(""),
    ProvisionStep::InitVcs,
    ProvisionStep::CopyTemplate {
        template: TemplateId::CppMakefile,
        dest: "Makefile",
    },
    ProvisionStep::CreateDir("src"),
    ProvisionStep::CreateDir("include"),
    ProvisionStep::CopyTemplate {
        template: TemplateId::CppMain,
        dest: "src/main.cpp",
    },
];

static CPP_CMAKE_STEPS: [ProvisionStep; 6] = [
    ProvisionStep::CreateDir(""),
    ProvisionStep::InitVcs,
    ProvisionStep::CopyTemplate {
        template: TemplateId::CmakeLists,
        dest: "CMakeLists.txt",
    },
    ProvisionStep::CreateDir("src"),
    ProvisionStep::CreateDir("include"),
    ProvisionStep::CopyTemplate {
        template: TemplateId::CmakeMain,
        dest: "src/main.cpp",
    },
];

static CPP_BAREMETAL_GRUB_STEPS: [ProvisionStep; 9] = [
    ProvisionStep::CreateDir(""),
    ProvisionStep::InitVcs,
    ProvisionStep::CopyTemplate {
        template: TemplateId::BaremetalMakefile,
        dest: "Makefile",
    },
    ProvisionStep::CopyTemplate {
        template: TemplateId::BaremetalLinkerScript,
        dest: "linker.ld",
    },
    ProvisionStep::CopyTemplate {
        template: TemplateId::BaremetalGrubCfg,
        dest: "grub.cfg",
    },
    ProvisionStep::CreateDir("src"),
    ProvisionStep::CreateDir("include"),
    ProvisionStep::CopyTemplate {
        template: TemplateId::BaremetalMultiboot2Header,
        dest: "src/multiboot2_header.S",
    },
    ProvisionStep::CopyTemplate {
        template: TemplateId::BaremetalEntry,
        dest: "src/entry.cpp",
    },
];

// ── Profiles ──────────────────────────────────────────────────────────────────

/// A named, fixed recipe of provisioning steps for one project type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    #[default]
    Default,
    Cpp,
    CppCmake,
    CppBaremetalGrub,
    Rust,
}

impl Profile {
    /// All known profiles, in listing order.
    pub const ALL: [Profile; 5] = [
        Profile::Default,
        Profile::Cpp,
        Profile::CppCmake,
        Profile::CppBaremetalGrub,
        Profile::Rust,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Cpp => "cpp",
            Self::CppCmake => "cpp-cmake",
            Self::CppBaremetalGrub => "cpp-baremetal-grub",
            Self::Rust => "rust",
        }
    }

    /// Resolve this profile's recipe from the registry.
    pub fn recipe(&self) -> Recipe {
        match self {
            Self::Default => Recipe::Steps(&DEFAULT_STEPS),
            Self::Cpp => Recipe::Steps(&CPP_STEPS),
            Self::CppCmake => Recipe::Steps(&CPP_CMAKE_STEPS),
            Self::CppBaremetalGrub => Recipe::Steps(&CPP_BAREMETAL_GRUB_STEPS),
            Self::Rust => Recipe::DelegateToPackageManager,
        }
    }

    /// One-line human description, for `seedling profiles`.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Default => "bare project directory with src/ and a git repository",
            Self::Cpp => "C++ project with a Makefile, src/ and include/",
            Self::CppCmake => "C++ project built with CMake",
            Self::CppBaremetalGrub => "freestanding C++ kernel booted via GRUB/multiboot2",
            Self::Rust => "Rust project delegated to `cargo new`",
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_round_trips_through_as_str() {
        for profile in Profile::ALL {
            assert!(!profile.as_str().is_empty());
            assert_eq!(profile.to_string(), profile.as_str());
        }
    }

    #[test]
    fn every_step_recipe_starts_with_root_creation() {
        for profile in Profile::ALL {
            if let Recipe::Steps(steps) = profile.recipe() {
                assert_eq!(
                    steps[0],
                    ProvisionStep::CreateDir(""),
                    "{profile} must create the project root first"
                );
            }
        }
    }

    #[test]
    fn rust_profile_is_delegated() {
        assert_eq!(Profile::Rust.recipe(), Recipe::DelegateToPackageManager);
    }

    #[test]
    fn default_profile_steps_match_registry() {
        let Recipe::Steps(steps) = Profile::Default.recipe() else {
            panic!("default profile must be step-based");
        };
        assert_eq!(
            steps,
            &[
                ProvisionStep::CreateDir(""),
                ProvisionStep::InitVcs,
                ProvisionStep::CreateDir("src"),
            ]
        );
    }

    #[test]
    fn cpp_profile_copies_makefile_before_creating_src() {
        let Recipe::Steps(steps) = Profile::Cpp.recipe() else {
            panic!("cpp profile must be step-based");
        };
        let makefile_pos = steps
            .iter()
            .position(|&s| matches!(s, ProvisionStep::CopyTemplate { dest: "Makefile", .. }))
            .unwrap();
        let src_pos = steps
            .iter()
            .position(|&s| matches!(s, ProvisionStep::CreateDir("src")))
            .unwrap();
        assert!(makefile_pos < src_pos);
    }

    #[test]
    fn template_destinations_land_under_created_directories() {
        // Ordering is the only dependency mechanism; verify each recipe
        // creates a destination's parent before copying into it.
        for profile in Profile::ALL {
            let Recipe::Steps(steps) = profile.recipe() else {
                continue;
            };
            let mut created: Vec<&str> = Vec::new();
            for step in steps {
                match *step {
                    ProvisionStep::CreateDir(rel) => created.push(rel),
                    ProvisionStep::CopyTemplate { dest, .. } => {
                        let parent = dest.rsplit_once('/').map_or("", |(p, _)| p);
                        assert!(
                            created.contains(&parent),
                            "{profile}: {dest} copied before its parent directory exists"
                        );
                    }
                    ProvisionStep::InitVcs => {}
                }
            }
        }
    }

    #[test]
    fn baremetal_profile_has_three_root_templates() {
        let Recipe::Steps(steps) = Profile::CppBaremetalGrub.recipe() else {
            panic!("baremetal profile must be step-based");
        };
        let root_templates: Vec<_> = steps
            .iter()
            .filter(|&&s| matches!(s, ProvisionStep::CopyTemplate { dest, .. } if !dest.contains('/')))
            .collect();
        assert_eq!(root_templates.len(), 3);
    }

    #[test]
    fn template_ids_are_unique() {
        for (i, a) in TemplateId::ALL.iter().enumerate() {
            for b in &TemplateId::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}
