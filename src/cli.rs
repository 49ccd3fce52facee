//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `preflight`.
#[derive(Debug, Parser)]
#[command(name = "preflight", version, about = "Verify and ship Railway deployments")]
pub struct Cli {
    /// Project directory to operate on.
    #[arg(long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the deployment readiness checks.
    Verify {
        /// Emit the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Inspect the Railway config, or generate the canonical one.
    Config {
        /// Write the canonical railway.json.
        #[arg(long)]
        write: bool,
    },
    /// Stage, commit, and push the project.
    Push {
        /// Commit message.
        #[arg(short, long, default_value = "Deploy backend updates")]
        message: String,
        /// Branch to push (defaults to the current branch).
        #[arg(long)]
        branch: Option<String>,
        /// Print the plan without touching git.
        #[arg(long)]
        dry_run: bool,
    },
    /// Verify, then deploy via the Railway CLI.
    Deploy {
        /// Skip the verification gate.
        #[arg(long)]
        skip_verify: bool,
        /// Skip the post-deploy health probe.
        #[arg(long)]
        no_probe: bool,
        /// Health endpoint URL to probe after deploying.
        #[arg(long)]
        url: Option<String>,
    },
    /// Show the Railway project status.
    Status,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_verify_with_json_flag() {
        let cli = Cli::parse_from(["preflight", "verify", "--json"]);
        assert!(matches!(cli.command, Command::Verify { json: true }));
    }

    #[test]
    fn parses_global_project_dir_after_subcommand() {
        let cli = Cli::parse_from(["preflight", "verify", "--project-dir", "/tmp/proj"]);
        assert_eq!(cli.project_dir, std::path::PathBuf::from("/tmp/proj"));
    }

    #[test]
    fn push_defaults_to_a_deploy_message() {
        let cli = Cli::parse_from(["preflight", "push"]);
        match cli.command {
            Command::Push { message, branch, dry_run } => {
                assert_eq!(message, "Deploy backend updates");
                assert!(branch.is_none());
                assert!(!dry_run);
            }
            _ => panic!("expected push"),
        }
    }

    #[test]
    fn parses_deploy_flags() {
        let cli = Cli::parse_from(["preflight", "deploy", "--skip-verify", "--no-probe"]);
        match cli.command {
            Command::Deploy { skip_verify, no_probe, url } => {
                assert!(skip_verify);
                assert!(no_probe);
                assert!(url.is_none());
            }
            _ => panic!("expected deploy"),
        }
    }
}
