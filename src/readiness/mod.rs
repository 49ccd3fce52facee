//! Deployment readiness validation.
//!
//! Runs a fixed, non-reorderable sequence of checks against a project
//! directory and produces an ordered [`VerificationReport`]. Checks are
//! either blocking (directory structure, requirements file, platform
//! config presence, syntax, importability) or advisory (timeout value,
//! route count, critical endpoint presence). The first blocking failure
//! stops the sequence; advisory failures never change the outcome.

pub mod checks;
pub mod report;

use std::path::Path;

pub use report::{format_report, CheckResult, CheckSeverity, VerificationReport};

use crate::context::ServiceContext;
use crate::settings::CheckSettings;

/// Runs the full readiness sequence against `root`.
#[must_use]
pub fn run(ctx: &ServiceContext, settings: &CheckSettings, root: &Path) -> VerificationReport {
    let run_id = ctx.id_gen.generate_id();
    let generated_at = ctx.clock.now();

    let mut results = Vec::new();
    let mut endpoint_count = 0;
    run_sequence(ctx, settings, root, &mut results, &mut endpoint_count);

    let overall_passed =
        results.iter().all(|c| c.passed || c.severity == CheckSeverity::Advisory);
    VerificationReport { run_id, generated_at, results, endpoint_count, overall_passed }
}

/// Pushes `result` and reports whether the sequence must halt.
fn record(results: &mut Vec<CheckResult>, result: CheckResult) -> bool {
    let halt = !result.passed && result.severity == CheckSeverity::Blocking;
    results.push(result);
    halt
}

fn run_sequence(
    ctx: &ServiceContext,
    settings: &CheckSettings,
    root: &Path,
    results: &mut Vec<CheckResult>,
    endpoint_count: &mut usize,
) {
    if record(results, checks::check_directory_structure(ctx, settings, root)) {
        return;
    }
    if record(results, checks::check_requirements_file(ctx, settings, root)) {
        return;
    }
    for result in checks::check_platform_config(ctx, settings, root) {
        if record(results, result) {
            return;
        }
    }

    let (count_result, count) = checks::count_endpoints(ctx, settings, root);
    *endpoint_count = count;
    results.push(count_result);

    if record(results, checks::check_syntax(ctx, settings, root)) {
        return;
    }
    if record(results, checks::check_importability(ctx, settings, root)) {
        return;
    }
    results.extend(checks::check_critical_endpoints(ctx, settings, root));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fake::{self, FakeFileSystem, FakeInterpreter};

    /// Entry file with twelve routes including every critical path.
    fn entry_source() -> String {
        let mut source = String::new();
        for path in [
            "/",
            "/health",
            "/auth/register",
            "/auth/login",
            "/practices",
            "/practices/daily",
            "/practices/complete",
            "/user/profile",
            "/user/progress",
            "/user/progress/metrics",
            "/user/streak",
            "/user/level",
        ] {
            source.push_str(&format!("@app.get(\"{path}\")\nasync def handler():\n    pass\n\n"));
        }
        source
    }

    fn ready_project() -> FakeFileSystem {
        FakeFileSystem::new()
            .with_file("/proj/app/main.py", entry_source())
            .with_file("/proj/app/config.py", "settings = object()\n")
            .with_file("/proj/requirements.txt", "fastapi\nuvicorn\n")
            .with_file(
                "/proj/railway.json",
                r#"{"deploy": {"healthcheckPath": "/health", "healthcheckTimeout": 60}}"#,
            )
    }

    fn run_on(fs: FakeFileSystem) -> VerificationReport {
        let mut ctx = fake::context();
        ctx.fs = Box::new(fs);
        run(&ctx, &CheckSettings::default(), Path::new("/proj"))
    }

    #[test]
    fn fully_ready_project_passes_with_twelve_endpoints() {
        let report = run_on(ready_project());
        assert!(report.overall_passed, "failures: {:?}", report.blocking_failures());
        assert_eq!(report.endpoint_count, 12);
        assert!(report.results.iter().all(|c| c.passed));
    }

    #[test]
    fn missing_entry_file_halts_before_any_later_check() {
        let report = run_on(FakeFileSystem::new().with_dir("/proj/app"));
        assert!(!report.overall_passed);
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].name, "app directory");
        assert_eq!(report.endpoint_count, 0);
    }

    #[test]
    fn missing_requirements_halts_after_directory_check() {
        let fs = FakeFileSystem::new().with_file("/proj/app/main.py", entry_source());
        let report = run_on(fs);
        assert!(!report.overall_passed);
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[1].name, "requirements file");
    }

    #[test]
    fn halting_failure_skips_interpreter_entirely() {
        let interpreter = FakeInterpreter::ok();
        let log = interpreter.log();
        let mut ctx = fake::context();
        ctx.fs = Box::new(FakeFileSystem::new());
        ctx.interpreter = Box::new(interpreter);

        let report = run(&ctx, &CheckSettings::default(), Path::new("/proj"));
        assert!(!report.overall_passed);
        assert_eq!(report.results.len(), 1);
        assert!(log.entries().is_empty());
    }

    #[test]
    fn timeout_mismatch_alone_still_passes_overall() {
        let fs = ready_project()
            .with_file("/proj/railway.json", r#"{"deploy": {"healthcheckTimeout": 80}}"#);
        let report = run_on(fs);
        assert!(report.overall_passed);
        let timeout = report.results.iter().find(|c| c.name == "healthcheck timeout").unwrap();
        assert!(!timeout.passed);
    }

    #[test]
    fn missing_critical_endpoint_does_not_fail_overall() {
        let source = entry_source().replace("\"/practices/daily\"", "\"/practices/today\"");
        let fs = ready_project().with_file("/proj/app/main.py", source);
        let report = run_on(fs);
        assert!(report.overall_passed);
        let missing =
            report.results.iter().find(|c| c.name == "endpoint /practices/daily").unwrap();
        assert!(!missing.passed);
    }

    #[test]
    fn import_failure_halts_with_overall_failure() {
        let mut ctx = fake::context();
        ctx.fs = Box::new(ready_project());
        ctx.interpreter = Box::new(FakeInterpreter::failing_import("ImportError: no module"));
        let report = run(&ctx, &CheckSettings::default(), Path::new("/proj"));
        assert!(!report.overall_passed);
        let last = report.results.last().unwrap();
        assert_eq!(last.name, "application import");
        // Critical endpoint checks never ran.
        assert!(report.results.iter().all(|c| !c.name.starts_with("endpoint ")));
    }

    #[test]
    fn reports_are_idempotent_for_unchanged_projects() {
        let first = run_on(ready_project());
        let second = run_on(ready_project());
        assert_eq!(first.results.len(), second.results.len());
        for (a, b) in first.results.iter().zip(&second.results) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.passed, b.passed);
            assert_eq!(a.detail, b.detail);
        }
        assert_eq!(first.endpoint_count, second.endpoint_count);
    }
}
