//! `preflight push` command.

use crate::context::ServiceContext;
use crate::release::push;
use crate::settings::CheckSettings;

/// Execute the `push` command: stage, commit, and push the project, or
/// print the plan when `dry_run` is set.
///
/// # Errors
///
/// Returns an error string if the plan cannot be resolved, the working
/// tree is clean, or a git operation fails.
pub fn run_with_context(
    ctx: &ServiceContext,
    settings: &CheckSettings,
    branch: Option<&str>,
    message: &str,
    dry_run: bool,
) -> Result<(), String> {
    let plan = push::resolve_plan(ctx, settings, branch, message)?;
    if dry_run {
        println!("{}", plan.describe());
        return Ok(());
    }

    let commit = push::execute(ctx, &plan)?;
    let short = commit.get(..7).unwrap_or(&commit);
    println!("✅ pushed {short} to {}/{}", plan.remote, plan.branch);
    Ok(())
}
