//! End-to-end CLI tests over the fixtures in `tests/fixtures/`.
//!
//! Each fixture contains:
//! - `context.json`: the project facts to evaluate
//! - `stagegate.toml` (optional): config overrides
//! - `expected.json`: the stage to run, the exit code, the result count, and failing checks

use assert_cmd::Command;
use serde_json::Value;
use stagegate_test_util::normalize_nondeterministic;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(deprecated)]
fn stagegate_cmd() -> Command {
    Command::cargo_bin("stagegate").expect("stagegate binary not found - run `cargo build` first")
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("stagegate-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

fn load_expected(fixture: &str) -> Value {
    let path = fixtures_dir().join(fixture).join("expected.json");
    let content = std::fs::read_to_string(&path).expect("Failed to read expected.json");
    serde_json::from_str(&content).expect("Failed to parse expected.json")
}

/// Run a fixture's stage, writing the JSON report into a temp dir.
fn run_fixture(fixture: &str, extra: &[&str]) -> (i32, Value) {
    let dir = fixtures_dir().join(fixture);
    let expected = load_expected(fixture);
    let stage = expected["stage"].as_str().expect("expected.stage");

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let report_path = temp_dir.path().join("report.json");

    let output = stagegate_cmd()
        .current_dir(temp_dir.path())
        .arg("--config")
        .arg(dir.join("stagegate.toml"))
        .args(["run", stage, "json", "--context"])
        .arg(dir.join("context.json"))
        .arg("--output")
        .arg(&report_path)
        .args(extra)
        .output()
        .expect("Failed to run command");

    let exit_code = output.status.code().unwrap_or(-1);
    let content = std::fs::read_to_string(&report_path).expect("Failed to read report");
    let report: Value = serde_json::from_str(&content).expect("Failed to parse report JSON");
    (exit_code, normalize_nondeterministic(report))
}

fn failed_names(report: &Value) -> Vec<String> {
    report["results"]
        .as_array()
        .expect("results array")
        .iter()
        .filter(|r| r["passed"] == false)
        .filter_map(|r| r["name"].as_str().map(String::from))
        .collect()
}

fn check_fixture(fixture: &str) {
    let expected = load_expected(fixture);
    let (exit_code, report) = run_fixture(fixture, &[]);

    assert_eq!(
        Some(i64::from(exit_code)),
        expected["exit_code"].as_i64(),
        "{fixture}: exit code"
    );
    assert_eq!(
        report["summary"]["total"], expected["total"],
        "{fixture}: total"
    );
    assert_eq!(
        report["summary"]["passed"],
        Value::Bool(exit_code == 0),
        "{fixture}: verdict"
    );

    let expected_failed: Vec<String> = expected["failed"]
        .as_array()
        .expect("expected.failed")
        .iter()
        .filter_map(|v| v.as_str().map(String::from))
        .collect();
    assert_eq!(failed_names(&report), expected_failed, "{fixture}: failures");
}

#[test]
fn fixture_production_clean() {
    check_fixture("production_clean");
}

#[test]
fn fixture_insecure_http() {
    check_fixture("insecure_http");

    let (_, report) = run_fixture("insecure_http", &[]);
    let security = &report["results"][1];
    assert_eq!(security["name"], "Security");
    assert_eq!(
        security["details"]["issues"],
        serde_json::json!([
            "HTTPS is required but HTTP protocol detected",
            "1 critical vulnerabilities found in dependencies",
            "Secrets or sensitive data detected in code"
        ])
    );
}

#[test]
fn fixture_mvp_low_coverage() {
    check_fixture("mvp_low_coverage");
}

#[test]
fn fixture_enterprise_compliance_gap() {
    check_fixture("enterprise_compliance_gap");

    let (_, report) = run_fixture("enterprise_compliance_gap", &[]);
    let compliance = &report["results"][4];
    assert_eq!(
        compliance["details"]["issues"],
        serde_json::json!([
            "Non-compliant with GDPR standard",
            "Audit logging is required but not implemented"
        ])
    );
}

#[test]
fn fixture_security_disabled() {
    check_fixture("security_disabled");
}

#[test]
fn concurrent_runs_report_the_same_failures() {
    for fixture in ["insecure_http", "mvp_low_coverage", "enterprise_compliance_gap"] {
        let (_, sequential) = run_fixture(fixture, &[]);
        let (_, concurrent) = run_fixture(fixture, &["--concurrent"]);

        let mut a = failed_names(&sequential);
        let mut b = failed_names(&concurrent);
        a.sort();
        b.sort();
        assert_eq!(a, b, "{fixture}: concurrent failures differ");
        assert_eq!(sequential["summary"]["total"], concurrent["summary"]["total"]);
    }
}
