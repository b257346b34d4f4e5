use super::utils::{issues_outcome, parameters_of};
use crate::{Check, CheckError, CheckSettings, Context, Outcome};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stagegate_types::ids;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceConfig {
    /// Default 1000.
    pub max_response_time_ms: f64,
    /// Default 512.
    pub max_memory_mb: f64,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            max_response_time_ms: 1000.0,
            max_memory_mb: 512.0,
        }
    }
}

/// Response time and memory ceilings.
#[derive(Clone, Debug, Default)]
pub struct PerformanceCheck {
    settings: CheckSettings,
    config: PerformanceConfig,
}

impl PerformanceCheck {
    pub fn new(config: PerformanceConfig) -> Self {
        Self {
            settings: CheckSettings::default(),
            config,
        }
    }

    pub fn with_settings(self, settings: CheckSettings) -> Self {
        Self { settings, ..self }
    }

    pub fn config(&self) -> &PerformanceConfig {
        &self.config
    }

    pub fn inspect(&self, ctx: &Context) -> Outcome {
        let mut issues = Vec::new();

        if let Some(response_time) = ctx.number(ids::KEY_RESPONSE_TIME)
            && response_time > self.config.max_response_time_ms
        {
            issues.push(format!(
                "Response time {response_time}ms exceeds maximum {}ms",
                self.config.max_response_time_ms
            ));
        }

        if let Some(memory) = ctx.number(ids::KEY_MEMORY_USAGE)
            && memory > self.config.max_memory_mb
        {
            issues.push(format!(
                "Memory usage {memory}MB exceeds maximum {}MB",
                self.config.max_memory_mb
            ));
        }

        issues_outcome(
            ids::NAME_PERFORMANCE,
            "Performance",
            issues,
            [
                (ids::KEY_RESPONSE_TIME, ctx.echo(ids::KEY_RESPONSE_TIME)),
                (ids::KEY_MEMORY_USAGE, ctx.echo(ids::KEY_MEMORY_USAGE)),
            ],
        )
    }
}

#[async_trait]
impl Check for PerformanceCheck {
    fn name(&self) -> &str {
        ids::NAME_PERFORMANCE
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
