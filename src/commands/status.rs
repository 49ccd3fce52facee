//! `preflight status` command.

use crate::context::ServiceContext;

/// Execute the `status` command: print the Railway project status.
///
/// # Errors
///
/// Returns an error string if the status query fails.
pub fn run_with_context(ctx: &ServiceContext) -> Result<(), String> {
    let output =
        ctx.railway.status().map_err(|e| format!("railway status failed: {e}"))?;
    println!("{}", output.trim());
    Ok(())
}
