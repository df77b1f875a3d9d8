//! Implementation of the `seedling profiles` command.

use seedling_core::domain::{Profile, ProvisionStep, Recipe};

use crate::{
    cli::{ProfilesArgs, ProfilesFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ProfilesArgs, output: OutputManager) -> CliResult<()> {
    match args.format {
        ProfilesFormat::Table => {
            output.header("Available profiles:")?;
            for profile in Profile::ALL {
                output.print(&format!(
                    "  {:<20} {}  [{}]",
                    profile.as_str(),
                    profile.description(),
                    summarize(profile)
                ))?;
            }
        }

        ProfilesFormat::List => {
            for profile in Profile::ALL {
                println!("{profile}");
            }
        }

        ProfilesFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let entries: Vec<_> = Profile::ALL
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "name": p,
                        "description": p.description(),
                        "steps": summarize(*p),
                    })
                })
                .collect();
            let json = serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
    }

    Ok(())
}

/// Compact step summary, e.g. `3 dirs, 2 templates, git`.
fn summarize(profile: Profile) -> String {
    match profile.recipe() {
        Recipe::DelegateToPackageManager => "cargo new, git".to_string(),
        Recipe::Steps(steps) => {
            let dirs = steps
                .iter()
                .filter(|&&s| matches!(s, ProvisionStep::CreateDir(_)))
                .count();
            let templates = steps
                .iter()
                .filter(|&&s| matches!(s, ProvisionStep::CopyTemplate { .. }))
                .count();
            let vcs = steps.iter().any(|&s| matches!(s, ProvisionStep::InitVcs));

            let mut parts = vec![format!("{dirs} dirs")];
            if templates > 0 {
                parts.push(format!("{templates} templates"));
            }
            if vcs {
                parts.push("git".into());
            }
            parts.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summaries_cover_every_profile() {
        for profile in Profile::ALL {
            assert!(!summarize(profile).is_empty());
        }
    }

    #[test]
    fn cpp_summary_counts_steps() {
        assert_eq!(summarize(Profile::Cpp), "3 dirs, 2 templates, git");
    }

    #[test]
    fn rust_summary_names_the_delegate() {
        assert_eq!(summarize(Profile::Rust), "cargo new, git");
    }
}
