//! Live Railway adapter shelling out to the `railway` CLI.

use std::process::Command;

use crate::ports::railway::RailwayCli;

/// Live adapter that invokes the installed `railway` CLI.
pub struct LiveRailwayCli;

fn run_railway(args: &[&str]) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let output = Command::new("railway")
        .args(args)
        .output()
        .map_err(|e| format!("failed to run railway CLI (is it installed?): {e}"))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("railway {} failed: {stderr}", args.join(" ")).into());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

impl RailwayCli for LiveRailwayCli {
    fn whoami(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(run_railway(&["whoami"])?.trim().to_string())
    }

    fn variable_names(&self) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let raw = run_railway(&["variables", "--json"])?;
        let parsed: serde_json::Value = serde_json::from_str(&raw)
            .map_err(|e| format!("railway variables returned invalid JSON: {e}"))?;
        let names = parsed
            .as_object()
            .map(|map| map.keys().cloned().collect())
            .unwrap_or_default();
        Ok(names)
    }

    fn up(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        run_railway(&["up", "--detach"])
    }

    fn status(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        run_railway(&["status"])
    }
}
