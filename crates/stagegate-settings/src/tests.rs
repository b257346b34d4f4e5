use super::*;
use stagegate_domain::checks::{BuiltinCheck, CodeQualityConfig, SecurityConfig};
use stagegate_domain::{Context, RunnerOptions};
use stagegate_types::{Severity, ids};

fn resolve(toml: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve_config(parse_config_toml(toml)?, overrides)
}

#[test]
fn empty_config_is_the_mvp_preset() {
    let resolved = resolve("", Overrides::default()).expect("resolves");
    assert_eq!(resolved.spec, preset(Stage::Mvp));
    assert_eq!(resolved.format, None);
    assert_eq!(resolved.output, None);
}

#[test]
fn cli_overrides_win_over_config() {
    let toml = r#"
stage = "enterprise"
concurrent = false

[report]
format = "json"
"#;
    let resolved = resolve(
        toml,
        Overrides {
            stage: Some("production".into()),
            concurrent: Some(true),
            format: Some("html".into()),
            ..Overrides::default()
        },
    )
    .expect("resolves");

    assert_eq!(resolved.spec.stage, Stage::Production);
    assert_eq!(resolved.spec.options, RunnerOptions::concurrent());
    assert_eq!(resolved.format.as_deref(), Some("html"));
}

#[test]
fn explicit_false_overrides_turn_config_options_off() {
    let toml = r#"
concurrent = true
stop_on_first_failure = true
"#;
    let resolved = resolve(
        toml,
        Overrides {
            concurrent: Some(false),
            stop_on_first_failure: Some(false),
            ..Overrides::default()
        },
    )
    .expect("resolves");

    assert!(!resolved.spec.options.concurrent);
    assert!(!resolved.spec.options.stop_on_first_failure);
}

#[test]
fn config_overrides_preset_parameters_and_severity() {
    let toml = r#"
schema = "stagegate.config.v1"
stage = "production"
stop_on_first_failure = true

[checks.code_quality]
min_coverage = 60
severity = "warning"

[checks.security]
enabled = false
"#;
    let resolved = resolve(toml, Overrides::default()).expect("resolves");
    let spec = &resolved.spec;

    assert!(spec.options.stop_on_first_failure);

    let quality = spec.check(ids::CHECK_CODE_QUALITY).expect("present");
    assert_eq!(quality.settings.severity, Severity::Warning);
    assert_eq!(
        quality.check,
        BuiltinCheck::CodeQuality(CodeQualityConfig {
            min_coverage: 60.0,
            max_complexity: 10.0,
        })
    );

    let security = spec.check(ids::CHECK_SECURITY).expect("still listed");
    assert!(!security.settings.enabled);
    assert_eq!(security.check, BuiltinCheck::Security(SecurityConfig::default()));

    let report = spec
        .build_runner()
        .execute_blocking(&Context::new().with(ids::KEY_PROTOCOL, "http"));
    assert!(report.outcomes().iter().all(|o| o.name() != "Security"));
}

#[test]
fn checks_outside_the_stage_need_explicit_enable() {
    let toml = r#"
[checks.performance]
max_memory_mb = 128

[checks.compliance]
enabled = true
standards = ["GDPR"]
"#;
    let resolved = resolve(toml, Overrides::default()).expect("resolves");
    let spec = &resolved.spec;

    assert!(spec.check(ids::CHECK_PERFORMANCE).is_none());
    let compliance = spec.check(ids::CHECK_COMPLIANCE).expect("added");
    assert_eq!(compliance.settings.severity, Severity::Error);
    assert_eq!(compliance.check.parameters()["standards"], serde_json::json!(["GDPR"]));
    assert_eq!(spec.checks.last().map(|c| c.check.id()), Some(ids::CHECK_COMPLIANCE));
}

#[test]
fn unknown_stage_is_rejected() {
    let err = resolve(r#"stage = "beta""#, Overrides::default()).unwrap_err();
    assert!(err.to_string().contains("valid stages: mvp, production, enterprise"));
}

#[test]
fn unknown_check_id_is_rejected() {
    let err = resolve("[checks.lint]\nenabled = true\n", Overrides::default()).unwrap_err();
    assert_eq!(err.to_string(), "unknown check id: lint");
}

#[test]
fn unknown_parameter_is_rejected_with_context() {
    let err = resolve(
        "[checks.code_quality]\nmin_covrage = 50\n",
        Overrides::default(),
    )
    .unwrap_err();
    let rendered = format!("{err:#}");
    assert!(rendered.starts_with("invalid parameters for code_quality"));
    assert!(rendered.contains("min_covrage"));
}

#[test]
fn mistyped_parameter_is_rejected() {
    let err = resolve(
        "[checks.security]\nrequire_https = \"yes\"\n",
        Overrides::default(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "invalid parameters for security");
}

#[test]
fn invalid_severity_is_rejected() {
    let err = resolve(
        "[checks.documentation]\nseverity = \"fatal\"\n",
        Overrides::default(),
    )
    .unwrap_err();
    assert_eq!(format!("{err:#}"), "invalid severity for documentation: unknown severity: fatal (expected info|warning|error)");
}

#[test]
fn foreign_schema_and_unknown_top_level_keys_are_rejected() {
    assert!(parse_config_toml(r#"schema = "depcheck.v9""#).is_err());
    assert!(parse_config_toml("profile = \"strict\"\n").is_err());
}
