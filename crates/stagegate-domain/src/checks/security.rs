use super::utils::{issues_outcome, parameters_of};
use crate::{Check, CheckError, CheckSettings, Context, Outcome};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use stagegate_types::ids;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SecurityConfig {
    /// Flag plain `http` as an issue. Default true.
    pub require_https: bool,
    /// Flag critical dependency vulnerabilities. Default true.
    pub check_dependencies: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            require_https: true,
            check_dependencies: true,
        }
    }
}

/// Transport, dependency vulnerability, and leaked-secret checks.
#[derive(Clone, Debug, Default)]
pub struct SecurityCheck {
    settings: CheckSettings,
    config: SecurityConfig,
}

impl SecurityCheck {
    pub fn new(config: SecurityConfig) -> Self {
        Self {
            settings: CheckSettings::default(),
            config,
        }
    }

    pub fn with_settings(self, settings: CheckSettings) -> Self {
        Self { settings, ..self }
    }

    pub fn config(&self) -> &SecurityConfig {
        &self.config
    }

    pub fn inspect(&self, ctx: &Context) -> Outcome {
        let mut issues = Vec::new();

        if self.config.require_https && ctx.text(ids::KEY_PROTOCOL) == Some("http") {
            issues.push("HTTPS is required but HTTP protocol detected".to_string());
        }

        if self.config.check_dependencies
            && let Some(vulns) = ctx.list(ids::KEY_VULNERABILITIES)
        {
            let critical = vulns
                .iter()
                .filter(|v| v.get("severity").and_then(Value::as_str) == Some("critical"))
                .count();
            if critical > 0 {
                issues.push(format!(
                    "{critical} critical vulnerabilities found in dependencies"
                ));
            }
        }

        if ctx.flag(ids::KEY_HAS_SECRETS) == Some(true) {
            issues.push("Secrets or sensitive data detected in code".to_string());
        }

        issues_outcome(
            ids::NAME_SECURITY,
            "Security",
            issues,
            [
                ("require_https", json!(self.config.require_https)),
                ("check_dependencies", json!(self.config.check_dependencies)),
            ],
        )
    }
}

#[async_trait]
impl Check for SecurityCheck {
    fn name(&self) -> &str {
        ids::NAME_SECURITY
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
