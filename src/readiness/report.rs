//! Verification report types and rendering.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// How a check's failure affects the run.
///
/// A failed `Blocking` check stops the sequence and fails the run; a
/// failed `Advisory` check is reported and the run continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckSeverity {
    /// Failure halts the run with a non-zero exit.
    Blocking,
    /// Failure is informational only.
    Advisory,
}

/// Result of a single readiness check. Immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Short label naming the check. Downstream tooling greps these, so
    /// treat them as semi-stable.
    pub name: String,
    /// Whether the check passed.
    pub passed: bool,
    /// Human-readable detail (what was found, or why it failed).
    pub detail: String,
    /// Whether a failure halts the run.
    pub severity: CheckSeverity,
}

impl CheckResult {
    /// A passing check result.
    #[must_use]
    pub fn pass(name: &str, detail: impl Into<String>, severity: CheckSeverity) -> Self {
        Self { name: name.to_string(), passed: true, detail: detail.into(), severity }
    }

    /// A failing check result.
    #[must_use]
    pub fn fail(name: &str, detail: impl Into<String>, severity: CheckSeverity) -> Self {
        Self { name: name.to_string(), passed: false, detail: detail.into(), severity }
    }
}

/// Aggregated outcome of one verification run.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    /// Unique identifier for this run.
    pub run_id: String,
    /// When the run happened.
    pub generated_at: DateTime<Utc>,
    /// Per-check results, in execution order. When a blocking check
    /// fails the sequence stops, so later checks never appear.
    pub results: Vec<CheckResult>,
    /// Route declarations counted in the entry file (0 if the count
    /// check never ran).
    pub endpoint_count: usize,
    /// True iff every blocking check passed.
    pub overall_passed: bool,
}

impl VerificationReport {
    /// Returns the blocking checks that failed.
    #[must_use]
    pub fn blocking_failures(&self) -> Vec<&CheckResult> {
        self.results
            .iter()
            .filter(|c| !c.passed && c.severity == CheckSeverity::Blocking)
            .collect()
    }
}

/// Formats a report as the emoji-prefixed line output callers grep.
#[must_use]
pub fn format_report(report: &VerificationReport) -> String {
    let mut lines = Vec::new();
    lines.push("🔍 Verifying deployment readiness".to_string());
    for check in &report.results {
        let prefix = if check.passed {
            "✅"
        } else if check.severity == CheckSeverity::Blocking {
            "❌"
        } else {
            "⚠️ "
        };
        if check.detail.is_empty() {
            lines.push(format!("{prefix} {}", check.name));
        } else {
            lines.push(format!("{prefix} {}: {}", check.name, check.detail));
        }
    }
    lines.push(String::new());
    if report.overall_passed {
        lines.push("✅ Ready to deploy".to_string());
    } else {
        lines.push("❌ Not ready to deploy".to_string());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_report() -> VerificationReport {
        VerificationReport {
            run_id: "run-001".to_string(),
            generated_at: Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap(),
            results: vec![
                CheckResult::pass("app directory", "app/main.py present", CheckSeverity::Blocking),
                CheckResult::fail(
                    "healthcheck timeout",
                    "declares 80s, expected 60s",
                    CheckSeverity::Advisory,
                ),
            ],
            endpoint_count: 12,
            overall_passed: true,
        }
    }

    #[test]
    fn advisory_failures_do_not_count_as_blocking() {
        let report = sample_report();
        assert!(report.blocking_failures().is_empty());
        assert!(report.overall_passed);
    }

    #[test]
    fn format_marks_pass_fail_and_warning_lines() {
        let report = sample_report();
        let text = format_report(&report);
        assert!(text.contains("✅ app directory: app/main.py present"));
        assert!(text.contains("⚠️  healthcheck timeout: declares 80s, expected 60s"));
        assert!(text.ends_with("✅ Ready to deploy"));
    }

    #[test]
    fn format_reports_blocking_failure_outcome() {
        let mut report = sample_report();
        report.results.push(CheckResult::fail(
            "python syntax",
            "SyntaxError: invalid syntax",
            CheckSeverity::Blocking,
        ));
        report.overall_passed = false;
        let text = format_report(&report);
        assert!(text.contains("❌ python syntax: SyntaxError: invalid syntax"));
        assert!(text.ends_with("❌ Not ready to deploy"));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = sample_report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["run_id"], "run-001");
        assert_eq!(json["overall_passed"], true);
        assert_eq!(json["results"][0]["severity"], "blocking");
        assert_eq!(json["results"][1]["severity"], "advisory");
    }
}
