//! Command dispatch and handlers.

pub mod config;
pub mod deploy;
pub mod push;
pub mod status;
pub mod verify;

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::cli::{Cli, Command};
use crate::context::ServiceContext;
use crate::settings::CheckSettings;

/// Dispatch a parsed CLI invocation to its handler with live adapters.
///
/// # Errors
///
/// Returns an error string if settings loading or the selected command
/// handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let settings = CheckSettings::load(&LiveFileSystem, &cli.project_dir)?;
    let ctx = ServiceContext::live(&settings);
    dispatch_with_context(&cli.command, &ctx, &settings, &cli.project_dir)
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    settings: &CheckSettings,
    root: &std::path::Path,
) -> Result<(), String> {
    match command {
        Command::Verify { json } => verify::run_with_context(ctx, settings, root, *json),
        Command::Config { write } => config::run_with_context(ctx, settings, root, *write),
        Command::Push { message, branch, dry_run } => {
            push::run_with_context(ctx, settings, branch.as_deref(), message, *dry_run)
        }
        Command::Deploy { skip_verify, no_probe, url } => {
            deploy::run_with_context(ctx, settings, root, *skip_verify, *no_probe, url.clone())
        }
        Command::Status => status::run_with_context(ctx),
    }
}
