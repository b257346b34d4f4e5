use super::utils::{issues_outcome, parameters_of};
use crate::{Check, CheckError, CheckSettings, Context, Outcome};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stagegate_types::ids;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodeQualityConfig {
    /// Minimum test coverage, percent. Default 80.
    pub min_coverage: f64,
    /// Maximum complexity score. Default 10.
    pub max_complexity: f64,
}

impl Default for CodeQualityConfig {
    fn default() -> Self {
        Self {
            min_coverage: 80.0,
            max_complexity: 10.0,
        }
    }
}

/// Test coverage and complexity thresholds.
#[derive(Clone, Debug, Default)]
pub struct CodeQualityCheck {
    settings: CheckSettings,
    config: CodeQualityConfig,
}

impl CodeQualityCheck {
    pub fn new(config: CodeQualityConfig) -> Self {
        Self {
            settings: CheckSettings::default(),
            config,
        }
    }

    pub fn with_settings(self, settings: CheckSettings) -> Self {
        Self { settings, ..self }
    }

    pub fn config(&self) -> &CodeQualityConfig {
        &self.config
    }

    pub fn inspect(&self, ctx: &Context) -> Outcome {
        let mut issues = Vec::new();

        if let Some(coverage) = ctx.number(ids::KEY_COVERAGE)
            && coverage < self.config.min_coverage
        {
            issues.push(format!(
                "Test coverage {coverage}% is below minimum {}%",
                self.config.min_coverage
            ));
        }

        if let Some(complexity) = ctx.number(ids::KEY_COMPLEXITY)
            && complexity > self.config.max_complexity
        {
            issues.push(format!(
                "Code complexity {complexity} exceeds maximum {}",
                self.config.max_complexity
            ));
        }

        issues_outcome(
            ids::NAME_CODE_QUALITY,
            "Code quality",
            issues,
            [
                (ids::KEY_COVERAGE, ctx.echo(ids::KEY_COVERAGE)),
                (ids::KEY_COMPLEXITY, ctx.echo(ids::KEY_COMPLEXITY)),
            ],
        )
    }
}

#[async_trait]
impl Check for CodeQualityCheck {
    fn name(&self) -> &str {
        ids::NAME_CODE_QUALITY
    }

    fn settings(&self) -> CheckSettings {
        self.settings
    }

    fn parameters(&self) -> Value {
        parameters_of(&self.config)
    }

    async fn evaluate(&self, ctx: &Context) -> Result<Outcome, CheckError> {
        Ok(self.inspect(ctx))
    }
}
