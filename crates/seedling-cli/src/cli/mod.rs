//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use seedling_core::domain::Profile as CoreProfile;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "seedling",
    bin_name = "seedling",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "\u{1f331} Profile-driven project scaffolding",
    long_about = "Seedling creates new project directories from named profiles: \
                  a directory tree, optional git initialization, and \
                  profile-specific boilerplate files.",
    after_help = "EXAMPLES:\n\
        \x20 seedling new my-app\n\
        \x20 seedling new my-tool --profile cpp --path ~/code\n\
        \x20 seedling new kernel --profile cpp-baremetal-grub --no-git\n\
        \x20 seedling profiles\n\
        \x20 seedling completions bash > /usr/share/bash-completion/completions/seedling",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project from a profile.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 seedling new my-app\n\
            \x20 seedling new my-api  --profile cpp-cmake\n\
            \x20 seedling new kernel  --profile cpp-baremetal-grub --path /tmp --no-git"
    )]
    New(NewArgs),

    /// List available profiles.
    #[command(
        visible_alias = "ls",
        about = "List available profiles",
        after_help = "EXAMPLES:\n\
            \x20 seedling profiles\n\
            \x20 seedling profiles --format json"
    )]
    Profiles(ProfilesArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 seedling completions bash > ~/.local/share/bash-completion/completions/seedling\n\
            \x20 seedling completions zsh  > ~/.zfunc/_seedling\n\
            \x20 seedling completions fish > ~/.config/fish/completions/seedling.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `seedling new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name; becomes the directory name under --path.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Parent directory to create the project in.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        default_value = ".",
        help = "Parent directory (default: current directory)"
    )]
    pub path: std::path::PathBuf,

    /// Provisioning profile.
    #[arg(
        long = "profile",
        value_name = "PROFILE",
        value_enum,
        default_value_t = Profile::Default,
        help = "Provisioning profile"
    )]
    pub profile: Profile,

    /// Skip git repository initialization.
    #[arg(long = "no-git", alias = "no_git", help = "Do not initialize git")]
    pub no_git: bool,

    /// Preview the plan without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── profiles ──────────────────────────────────────────────────────────────────

/// Arguments for `seedling profiles`.
#[derive(Debug, Args)]
pub struct ProfilesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ProfilesFormat,
}

/// Output format for the `profiles` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProfilesFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `seedling completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Known provisioning profiles.
///
/// An unrecognized profile never reaches the core: clap rejects it here with
/// the list of valid choices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    #[default]
    Default,
    Cpp,
    #[value(name = "cpp-cmake")]
    CppCmake,
    #[value(name = "cpp-baremetal-grub")]
    CppBaremetalGrub,
    Rust,
}

impl Profile {
    /// Convert to the core registry key.
    pub fn to_core(self) -> CoreProfile {
        match self {
            Self::Default => CoreProfile::Default,
            Self::Cpp => CoreProfile::Cpp,
            Self::CppCmake => CoreProfile::CppCmake,
            Self::CppBaremetalGrub => CoreProfile::CppBaremetalGrub,
            Self::Rust => CoreProfile::Rust,
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_core().as_str())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
