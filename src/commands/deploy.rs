//! `preflight deploy` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::release::deploy::{self, DeployOptions};
use crate::settings::CheckSettings;

/// Execute the `deploy` command: run the verification gate and the
/// Railway deploy sequence.
///
/// # Errors
///
/// Returns an error string if any gate fails or the deployment fails.
pub fn run_with_context(
    ctx: &ServiceContext,
    settings: &CheckSettings,
    root: &Path,
    skip_verify: bool,
    no_probe: bool,
    url: Option<String>,
) -> Result<(), String> {
    let options = DeployOptions { skip_verify, no_probe, health_url: url };
    deploy::run(ctx, settings, root, &options)?;
    println!("✅ Deployment complete");
    Ok(())
}
