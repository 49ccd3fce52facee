//! The individual readiness checks.
//!
//! Every check is a one-shot, idempotent inspection of static state.
//! Route detection is literal string matching: a route declared via
//! string concatenation or a dynamically built path will be missed.

use std::path::{Path, PathBuf};

use crate::context::ServiceContext;
use crate::platform::RailwayConfig;
use crate::ports::interpreter::InterpreterRun;
use crate::readiness::report::{CheckResult, CheckSeverity};
use crate::settings::CheckSettings;

/// Verifies the application subdirectory and entry-point file exist.
#[must_use]
pub fn check_directory_structure(
    ctx: &ServiceContext,
    settings: &CheckSettings,
    root: &Path,
) -> CheckResult {
    let app_dir = root.join(&settings.app_dir);
    let entry = root.join(&settings.entry_file);
    if !ctx.fs.is_dir(&app_dir) {
        return CheckResult::fail(
            "app directory",
            format!("{}/ is missing", settings.app_dir),
            CheckSeverity::Blocking,
        );
    }
    if !ctx.fs.exists(&entry) {
        return CheckResult::fail(
            "app directory",
            format!("{} is missing", settings.entry_file),
            CheckSeverity::Blocking,
        );
    }
    CheckResult::pass(
        "app directory",
        format!("{}/ and {} present", settings.app_dir, settings.entry_file),
        CheckSeverity::Blocking,
    )
}

/// Verifies the dependency manifest exists at the project root.
#[must_use]
pub fn check_requirements_file(
    ctx: &ServiceContext,
    settings: &CheckSettings,
    root: &Path,
) -> CheckResult {
    let path = root.join(&settings.requirements_file);
    if ctx.fs.exists(&path) {
        CheckResult::pass(
            "requirements file",
            format!("{} present", settings.requirements_file),
            CheckSeverity::Blocking,
        )
    } else {
        CheckResult::fail(
            "requirements file",
            format!("{} is missing", settings.requirements_file),
            CheckSeverity::Blocking,
        )
    }
}

/// Verifies the platform config file exists, and when it does, that it
/// declares the expected health-check timeout.
///
/// A missing file is blocking; a wrong or undeclared timeout is
/// advisory. The timeout comparison parses the config and compares the
/// field exactly.
#[must_use]
pub fn check_platform_config(
    ctx: &ServiceContext,
    settings: &CheckSettings,
    root: &Path,
) -> Vec<CheckResult> {
    let path = root.join(&settings.platform_config);
    if !ctx.fs.exists(&path) {
        return vec![CheckResult::fail(
            "railway config",
            format!("{} is missing", settings.platform_config),
            CheckSeverity::Blocking,
        )];
    }
    let presence = CheckResult::pass(
        "railway config",
        format!("{} present", settings.platform_config),
        CheckSeverity::Blocking,
    );

    let expected = settings.expected_healthcheck_timeout;
    let parsed = ctx
        .fs
        .read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|contents| RailwayConfig::parse(&contents));
    let timeout = match parsed {
        Ok(config) => match config.healthcheck_timeout() {
            Some(t) if t == expected => {
                CheckResult::pass("healthcheck timeout", format!("{t}s"), CheckSeverity::Advisory)
            }
            Some(t) => CheckResult::fail(
                "healthcheck timeout",
                format!("declares {t}s, expected {expected}s"),
                CheckSeverity::Advisory,
            ),
            None => CheckResult::fail(
                "healthcheck timeout",
                format!("not declared, expected {expected}s"),
                CheckSeverity::Advisory,
            ),
        },
        Err(e) => CheckResult::fail("healthcheck timeout", e, CheckSeverity::Advisory),
    };

    vec![presence, timeout]
}

/// Counts route-declaration markers in the entry file.
///
/// Purely informational against the expected minimum; returns the count
/// alongside the result for the report.
#[must_use]
pub fn count_endpoints(
    ctx: &ServiceContext,
    settings: &CheckSettings,
    root: &Path,
) -> (CheckResult, usize) {
    match ctx.fs.read_to_string(&root.join(&settings.entry_file)) {
        Ok(source) => {
            let count = source.matches(settings.route_marker.as_str()).count();
            let detail =
                format!("{count} route declarations found (minimum {})", settings.min_endpoints);
            let result = if count >= settings.min_endpoints {
                CheckResult::pass("route declarations", detail, CheckSeverity::Advisory)
            } else {
                CheckResult::fail("route declarations", detail, CheckSeverity::Advisory)
            };
            (result, count)
        }
        Err(e) => (
            CheckResult::fail(
                "route declarations",
                format!("could not read {}: {e}", settings.entry_file),
                CheckSeverity::Advisory,
            ),
            0,
        ),
    }
}

/// Compile-checks the entry and config files without executing them.
#[must_use]
pub fn check_syntax(ctx: &ServiceContext, settings: &CheckSettings, root: &Path) -> CheckResult {
    let files = [PathBuf::from(&settings.entry_file), PathBuf::from(&settings.config_file)];
    match ctx.interpreter.compile_check(root, &files) {
        Ok(run) if run.success() => CheckResult::pass(
            "python syntax",
            format!("{} and {} compile", settings.entry_file, settings.config_file),
            CheckSeverity::Blocking,
        ),
        Ok(run) => {
            CheckResult::fail("python syntax", failure_detail(&run), CheckSeverity::Blocking)
        }
        Err(e) => CheckResult::fail("python syntax", e.to_string(), CheckSeverity::Blocking),
    }
}

/// Imports the application and settings objects and confirms no
/// exception is raised.
#[must_use]
pub fn check_importability(
    ctx: &ServiceContext,
    settings: &CheckSettings,
    root: &Path,
) -> CheckResult {
    match ctx.interpreter.import_check(root, &settings.import_program()) {
        Ok(run) if run.success() => CheckResult::pass(
            "application import",
            format!("{} and {} import cleanly", settings.app_object, settings.settings_object),
            CheckSeverity::Blocking,
        ),
        Ok(run) => {
            CheckResult::fail("application import", failure_detail(&run), CheckSeverity::Blocking)
        }
        Err(e) => CheckResult::fail("application import", e.to_string(), CheckSeverity::Blocking),
    }
}

/// Checks each critical path appears in the entry file as a quoted
/// literal, under either quote style.
#[must_use]
pub fn check_critical_endpoints(
    ctx: &ServiceContext,
    settings: &CheckSettings,
    root: &Path,
) -> Vec<CheckResult> {
    let source = match ctx.fs.read_to_string(&root.join(&settings.entry_file)) {
        Ok(source) => source,
        Err(e) => {
            return vec![CheckResult::fail(
                "critical endpoints",
                format!("could not read {}: {e}", settings.entry_file),
                CheckSeverity::Advisory,
            )];
        }
    };
    settings
        .critical_endpoints
        .iter()
        .map(|path| {
            let name = format!("endpoint {path}");
            let double_quoted = format!("\"{path}\"");
            let single_quoted = format!("'{path}'");
            if source.contains(&double_quoted) || source.contains(&single_quoted) {
                CheckResult::pass(&name, "declared", CheckSeverity::Advisory)
            } else {
                CheckResult::fail(
                    &name,
                    format!("not found in {}", settings.entry_file),
                    CheckSeverity::Advisory,
                )
            }
        })
        .collect()
}

/// Condenses an interpreter failure to its final stderr line (the actual
/// error in a Python traceback).
fn failure_detail(run: &InterpreterRun) -> String {
    run.stderr
        .trim()
        .lines()
        .last()
        .map_or_else(|| format!("interpreter exited with code {}", run.exit_code), String::from)
}
