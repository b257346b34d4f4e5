use super::utils::{issues_outcome, parameters_of};
use crate::{Check, CheckError, CheckSettings, Context, Outcome};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use stagegate_types::ids;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComplianceConfig {
    /// Default true.
    pub require_license: bool,
    /// Standards the project must declare, e.g. `GDPR`. Default empty.
    pub standards: Vec<String>,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            require_license: true,
            standards: Vec::new(),
        }
    }
}

/// License, declared standards, and audit logging.
#[derive(Clone, Debug, Default)]
pub struct ComplianceCheck {
    settings: CheckSettings,
    config: ComplianceConfig,
}

impl ComplianceCheck {
    pub fn new(config: ComplianceConfig) -> Self {
        Self {
            settings: CheckSettings::default(),
            config,
        }
    }

    pub fn with_settings(self, settings: CheckSettings) -> Self {
        Self { settings, ..self }
    }

    pub fn config(&self) -> &ComplianceConfig {
        &self.config
    }

    pub fn inspect(&self, ctx: &Context) -> Outcome {
        let mut issues = Vec::new();

        if self.config.require_license && ctx.flag(ids::KEY_HAS_LICENSE) == Some(false) {
            issues.push("LICENSE file is required".to_string());
        }

        // Only judged when the project declares its standards at all.
        if let Some(declared) = ctx.strings(ids::KEY_STANDARDS) {
            for standard in &self.config.standards {
                if !declared.contains(&standard.as_str()) {
                    issues.push(format!("Non-compliant with {standard} standard"));
                }
            }
        }

        if ctx.flag(ids::KEY_REQUIRE_AUDIT_LOGS) == Some(true)
            && ctx.flag(ids::KEY_HAS_AUDIT_LOGS) == Some(false)
        {
            issues.push("Audit logging is required but not implemented".to_string());
        }

        issues_outcome(
            ids::NAME_COMPLIANCE,
            "Compliance",
            issues,
            [
                (ids::KEY_HAS_LICENSE, ctx.echo(ids::KEY_HAS_LICENSE)),
                (ids::KEY_STANDARDS, json!(self.config.standards)),
            ],
        )
    }
}

#[async_trait]
impl Check for ComplianceCheck {
    fn name(&self) -> &str {
        ids::NAME_COMPLIANCE
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
