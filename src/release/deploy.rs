//! Railway deploy sequence with a verification gate and health probe.

use std::path::Path;
use std::time::Duration;

use crate::context::ServiceContext;
use crate::readiness::{self, format_report};
use crate::settings::CheckSettings;

/// Caller-controlled switches for one deploy run.
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    /// Skip the readiness verification gate.
    pub skip_verify: bool,
    /// Skip the post-deploy health probe.
    pub no_probe: bool,
    /// Health endpoint URL, overriding the settings value.
    pub health_url: Option<String>,
}

/// Runs the deploy sequence: verification gate, login check, required
/// variables, `railway up`, then a bounded health probe.
///
/// # Errors
///
/// Returns an error if any gate fails or the deployment itself fails;
/// nothing later in the sequence runs after a failure.
pub fn run(
    ctx: &ServiceContext,
    settings: &CheckSettings,
    root: &Path,
    options: &DeployOptions,
) -> Result<(), String> {
    if !options.skip_verify {
        let report = readiness::run(ctx, settings, root);
        println!("{}", format_report(&report));
        if !report.overall_passed {
            return Err("verification failed, deploy aborted".to_string());
        }
    }

    let user = ctx.railway.whoami().map_err(|e| format!("Railway login check failed: {e}"))?;
    println!("🔐 Logged in as {user}");

    let configured = ctx
        .railway
        .variable_names()
        .map_err(|e| format!("could not list Railway variables: {e}"))?;
    let missing: Vec<String> = settings
        .required_variables
        .iter()
        .filter(|required| !configured.iter().any(|c| c == *required))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(format!("missing required Railway variables: {}", missing.join(", ")));
    }

    let output = ctx.railway.up().map_err(|e| format!("railway up failed: {e}"))?;
    println!("🚀 {}", output.trim());

    if options.no_probe {
        return Ok(());
    }
    let url = options.health_url.clone().or_else(|| settings.health_url.clone());
    match url {
        Some(url) => {
            probe_until_healthy(ctx, &url, settings.probe_attempts, settings.probe_delay_secs)
        }
        None => {
            println!("⚠️  no health URL configured, skipping probe");
            Ok(())
        }
    }
}

/// Probes `url` until it answers 2xx, up to `attempts` times with
/// `delay_secs` between attempts.
fn probe_until_healthy(
    ctx: &ServiceContext,
    url: &str,
    attempts: u32,
    delay_secs: u64,
) -> Result<(), String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))?;

    for attempt in 1..=attempts {
        match runtime.block_on(ctx.probe.get(url)) {
            Ok(response) if response.healthy() => {
                println!("✅ {url} healthy (status {})", response.status);
                return Ok(());
            }
            Ok(response) => {
                println!("⚠️  attempt {attempt}/{attempts}: status {}", response.status);
            }
            Err(e) => println!("⚠️  attempt {attempt}/{attempts}: {e}"),
        }
        if attempt < attempts {
            std::thread::sleep(Duration::from_secs(delay_secs));
        }
    }
    Err(format!("{url} did not become healthy after {attempts} attempts"))
}
