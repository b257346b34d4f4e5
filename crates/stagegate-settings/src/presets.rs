use crate::stage::{Stage, StageMetadata};
use stagegate_domain::checks::{
    BuiltinCheck, CodeQualityConfig, ComplianceConfig, DocumentationConfig, PerformanceConfig,
    SecurityConfig,
};
use stagegate_domain::{CheckSettings, Runner, RunnerOptions};
use stagegate_types::Severity;

/// A built-in check with the settings it runs under.
#[derive(Clone, Debug, PartialEq)]
pub struct CheckSpec {
    pub check: BuiltinCheck,
    pub settings: CheckSettings,
}

impl CheckSpec {
    pub fn new(check: BuiltinCheck, severity: Severity) -> Self {
        Self {
            check,
            settings: CheckSettings::enabled(severity),
        }
    }
}

/// Everything needed to build a runner for one stage.
#[derive(Clone, Debug, PartialEq)]
pub struct StageSpec {
    pub stage: Stage,
    pub options: RunnerOptions,
    pub checks: Vec<CheckSpec>,
}

impl StageSpec {
    pub fn metadata(&self) -> StageMetadata {
        self.stage.metadata()
    }

    pub fn check(&self, id: &str) -> Option<&CheckSpec> {
        self.checks.iter().find(|c| c.check.id() == id)
    }

    /// Register every check, in preset order, on a fresh runner.
    pub fn build_runner(&self) -> Runner {
        let mut runner = Runner::new(self.options);
        runner.register_many(
            self.checks
                .iter()
                .map(|spec| spec.check.clone().into_check(spec.settings)),
        );
        runner
    }
}

/// The built-in preset for `stage`. Presets run sequentially without fail-fast.
pub fn preset(stage: Stage) -> StageSpec {
    let checks = match stage {
        Stage::Mvp => mvp_checks(),
        Stage::Production => production_checks(),
        Stage::Enterprise => enterprise_checks(),
    };
    StageSpec {
        stage,
        options: RunnerOptions::sequential(),
        checks,
    }
}

fn mvp_checks() -> Vec<CheckSpec> {
    vec![
        CheckSpec::new(
            BuiltinCheck::CodeQuality(CodeQualityConfig {
                min_coverage: 60.0,
                max_complexity: 15.0,
            }),
            Severity::Warning,
        ),
        CheckSpec::new(
            BuiltinCheck::Security(SecurityConfig {
                require_https: false,
                check_dependencies: true,
            }),
            Severity::Error,
        ),
        CheckSpec::new(
            BuiltinCheck::Documentation(DocumentationConfig {
                require_readme: true,
                require_api_docs: false,
                min_doc_coverage: 50.0,
            }),
            Severity::Warning,
        ),
    ]
}

fn production_checks() -> Vec<CheckSpec> {
    vec![
        CheckSpec::new(
            BuiltinCheck::CodeQuality(CodeQualityConfig {
                min_coverage: 80.0,
                max_complexity: 10.0,
            }),
            Severity::Error,
        ),
        CheckSpec::new(
            BuiltinCheck::Security(SecurityConfig::default()),
            Severity::Error,
        ),
        CheckSpec::new(
            BuiltinCheck::Performance(PerformanceConfig {
                max_response_time_ms: 1000.0,
                max_memory_mb: 512.0,
            }),
            Severity::Error,
        ),
        CheckSpec::new(
            BuiltinCheck::Documentation(DocumentationConfig {
                require_readme: true,
                require_api_docs: true,
                min_doc_coverage: 80.0,
            }),
            Severity::Error,
        ),
        CheckSpec::new(
            BuiltinCheck::Compliance(ComplianceConfig {
                require_license: true,
                standards: Vec::new(),
            }),
            Severity::Error,
        ),
    ]
}

fn enterprise_checks() -> Vec<CheckSpec> {
    vec![
        CheckSpec::new(
            BuiltinCheck::CodeQuality(CodeQualityConfig {
                min_coverage: 90.0,
                max_complexity: 8.0,
            }),
            Severity::Error,
        ),
        CheckSpec::new(
            BuiltinCheck::Security(SecurityConfig::default()),
            Severity::Error,
        ),
        CheckSpec::new(
            BuiltinCheck::Performance(PerformanceConfig {
                max_response_time_ms: 500.0,
                max_memory_mb: 256.0,
            }),
            Severity::Error,
        ),
        CheckSpec::new(
            BuiltinCheck::Documentation(DocumentationConfig {
                require_readme: true,
                require_api_docs: true,
                min_doc_coverage: 90.0,
            }),
            Severity::Error,
        ),
        CheckSpec::new(
            BuiltinCheck::Compliance(ComplianceConfig {
                require_license: true,
                standards: ["ISO-27001", "SOC-2", "GDPR"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
            }),
            Severity::Error,
        ),
    ]
}
