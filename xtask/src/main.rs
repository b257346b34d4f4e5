//! Developer tasks (schema generation, fixture conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use serde::Deserialize;
use serde_json::Value;
use stagegate_test_util::normalize_nondeterministic;
use stagegate_types::ids;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .or_else(|_| std::env::current_dir())
        .unwrap_or_else(|_| PathBuf::from("."));

    // If we're in the xtask directory, go up one level
    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(manifest_dir)
    } else {
        manifest_dir
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(stagegate_types::ReportDocument)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(stagegate_settings::StagegateConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "stagegate.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "stagegate.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {name}");
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {name}");
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Run every fixture through the stagegate binary and validate");
}

/// What a fixture's `expected.json` declares.
#[derive(Debug, Deserialize)]
struct FixtureExpectation {
    stage: String,
    exit_code: i32,
    total: u64,
    #[serde(default)]
    failed: Vec<String>,
}

/// Internal consistency of a report: counts add up and names are known checks.
fn report_hygiene(report: &Value) -> Vec<String> {
    let mut errors = Vec::new();
    let known = [
        ids::NAME_CODE_QUALITY,
        ids::NAME_SECURITY,
        ids::NAME_PERFORMANCE,
        ids::NAME_DOCUMENTATION,
        ids::NAME_COMPLIANCE,
    ];

    let results = report["results"].as_array().cloned().unwrap_or_default();
    let summary = &report["summary"];
    let passed_results = results.iter().filter(|r| r["passed"] == true).count() as u64;
    let failed_results = results.len() as u64 - passed_results;

    if summary["total"].as_u64() != Some(results.len() as u64) {
        errors.push(format!(
            "summary.total {} != {} results",
            summary["total"],
            results.len()
        ));
    }
    if summary["passed_count"].as_u64() != Some(passed_results) {
        errors.push(format!(
            "summary.passed_count {} != {passed_results}",
            summary["passed_count"]
        ));
    }
    if summary["failed_count"].as_u64() != Some(failed_results) {
        errors.push(format!(
            "summary.failed_count {} != {failed_results}",
            summary["failed_count"]
        ));
    }
    if summary["passed"].as_bool() != Some(failed_results == 0) {
        errors.push("summary.passed disagrees with results".to_string());
    }

    for (i, result) in results.iter().enumerate() {
        let name = result["name"].as_str().unwrap_or_default();
        if !known.contains(&name) {
            errors.push(format!("results[{i}].name '{name}' is not a built-in check"));
        }
        let issues = result["details"][ids::DETAIL_ISSUES].as_array();
        if result["passed"] == false && issues.is_none_or(Vec::is_empty) {
            errors.push(format!("results[{i}] failed without itemized issues"));
        }
    }

    errors
}

/// Run the stagegate binary on every fixture and check the reports.
///
/// For each directory under `tests/fixtures/` with an `expected.json`:
/// 1. the report validates against the generated report schema
/// 2. summary counts agree with the results
/// 3. exit code, result count, and failing checks match the expectation
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_report_schema())
        .context("Failed to serialize report schema")?;
    let compiled = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {e}"))?;
    println!("✓ stagegate.report.v1 schema compiles");

    let mut bin = project_root().join("target").join("debug").join("stagegate");
    if cfg!(target_os = "windows") {
        bin.set_extension("exe");
    }
    if !bin.exists() {
        bail!(
            "stagegate binary not found at {}.\n\
            Run `cargo build -p stagegate-cli` first.",
            bin.display()
        );
    }

    let mut fixture_count = 0;
    let mut errors = Vec::new();

    let mut dirs: Vec<PathBuf> = fs::read_dir(fixtures_dir())
        .context("Failed to read tests/fixtures/")?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.join("expected.json").exists())
        .collect();
    dirs.sort();

    for dir in dirs {
        let name = dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let expected: FixtureExpectation = serde_json::from_str(
            &fs::read_to_string(dir.join("expected.json"))
                .with_context(|| format!("Failed to read {name}/expected.json"))?,
        )
        .with_context(|| format!("Failed to parse {name}/expected.json"))?;

        let temp_dir = tempfile::tempdir().context("Failed to create temp dir")?;
        let report_out = temp_dir.path().join("report.json");

        let output = std::process::Command::new(&bin)
            .current_dir(temp_dir.path())
            .arg("--config")
            .arg(dir.join("stagegate.toml"))
            .args(["run", &expected.stage, "json", "--context"])
            .arg(dir.join("context.json"))
            .arg("--output")
            .arg(&report_out)
            .output()
            .with_context(|| format!("Failed to run stagegate on fixture '{name}'"))?;

        if output.status.code() != Some(expected.exit_code) {
            errors.push(format!(
                "fixture '{name}': exit code {:?}, expected {}: {}",
                output.status.code(),
                expected.exit_code,
                String::from_utf8_lossy(&output.stderr)
            ));
            continue;
        }

        let report: Value = serde_json::from_str(
            &fs::read_to_string(&report_out)
                .with_context(|| format!("fixture '{name}': no report written"))?,
        )
        .with_context(|| format!("Failed to parse report for fixture '{name}'"))?;

        for err in compiled.iter_errors(&report) {
            errors.push(format!("fixture '{name}': schema validation: {err}"));
        }
        for err in report_hygiene(&report) {
            errors.push(format!("fixture '{name}': {err}"));
        }

        let report = normalize_nondeterministic(report);
        if report["summary"]["total"].as_u64() != Some(expected.total) {
            errors.push(format!(
                "fixture '{name}': {} results, expected {}",
                report["summary"]["total"], expected.total
            ));
        }
        let failed: Vec<String> = report["results"]
            .as_array()
            .into_iter()
            .flatten()
            .filter(|r| r["passed"] == false)
            .filter_map(|r| r["name"].as_str().map(String::from))
            .collect();
        if failed != expected.failed {
            errors.push(format!(
                "fixture '{name}': failed checks {failed:?}, expected {:?}",
                expected.failed
            ));
        }

        fixture_count += 1;
        println!("  ✓ {name}");
    }

    if fixture_count == 0 && errors.is_empty() {
        bail!("No fixtures found in {}", fixtures_dir().display());
    }

    if !errors.is_empty() {
        eprintln!("\nConformance errors:");
        for err in &errors {
            eprintln!("  - {err}");
        }
        bail!("Conformance validation failed with {} errors", errors.len());
    }

    println!("\n✓ All {fixture_count} fixtures pass conformance checks!");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "print-schema-ids" => {
            println!("{}", stagegate_types::SCHEMA_REPORT_V1);
            println!("{}", stagegate_settings::SCHEMA_CONFIG_V1);
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
