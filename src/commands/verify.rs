//! `preflight verify` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::readiness::{self, format_report};
use crate::settings::CheckSettings;

/// Execute the `verify` command: run the readiness sequence and print
/// the report, as JSON when requested.
///
/// # Errors
///
/// Returns an error string when a blocking check failed, which maps to
/// a non-zero process exit.
pub fn run_with_context(
    ctx: &ServiceContext,
    settings: &CheckSettings,
    root: &Path,
    json: bool,
) -> Result<(), String> {
    let report = readiness::run(ctx, settings, root);

    if json {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("failed to render JSON report: {e}"))?;
        println!("{rendered}");
    } else {
        println!("{}", format_report(&report));
    }

    if report.overall_passed {
        Ok(())
    } else {
        Err(format!("{} blocking check(s) failed", report.blocking_failures().len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fake::{self, FakeFileSystem};

    #[test]
    fn failing_project_maps_to_an_error() {
        let mut ctx = fake::context();
        ctx.fs = Box::new(FakeFileSystem::new());
        let err = run_with_context(&ctx, &CheckSettings::default(), Path::new("/proj"), false)
            .unwrap_err();
        assert!(err.contains("blocking check"));
    }

    #[test]
    fn json_mode_still_fails_on_blocking_failure() {
        let mut ctx = fake::context();
        ctx.fs = Box::new(FakeFileSystem::new());
        let result =
            run_with_context(&ctx, &CheckSettings::default(), Path::new("/proj"), true);
        assert!(result.is_err());
    }
}
