use super::utils::{issues_outcome, parameters_of};
use crate::{Check, CheckError, CheckSettings, Context, Outcome};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stagegate_types::ids;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentationConfig {
    /// Default true.
    pub require_readme: bool,
    /// Default false.
    pub require_api_docs: bool,
    /// Minimum documentation coverage, percent. Default 70.
    pub min_doc_coverage: f64,
}

impl Default for DocumentationConfig {
    fn default() -> Self {
        Self {
            require_readme: true,
            require_api_docs: false,
            min_doc_coverage: 70.0,
        }
    }
}

/// README, API docs, and documentation coverage.
#[derive(Clone, Debug, Default)]
pub struct DocumentationCheck {
    settings: CheckSettings,
    config: DocumentationConfig,
}

impl DocumentationCheck {
    pub fn new(config: DocumentationConfig) -> Self {
        Self {
            settings: CheckSettings::default(),
            config,
        }
    }

    pub fn with_settings(self, settings: CheckSettings) -> Self {
        Self { settings, ..self }
    }

    pub fn config(&self) -> &DocumentationConfig {
        &self.config
    }

    pub fn inspect(&self, ctx: &Context) -> Outcome {
        let mut issues = Vec::new();

        if self.config.require_readme && ctx.flag(ids::KEY_HAS_README) == Some(false) {
            issues.push("README.md file is required".to_string());
        }

        if self.config.require_api_docs && ctx.flag(ids::KEY_HAS_API_DOCS) == Some(false) {
            issues.push("API documentation is required".to_string());
        }

        if let Some(coverage) = ctx.number(ids::KEY_DOC_COVERAGE)
            && coverage < self.config.min_doc_coverage
        {
            issues.push(format!(
                "Documentation coverage {coverage}% is below minimum {}%",
                self.config.min_doc_coverage
            ));
        }

        issues_outcome(
            ids::NAME_DOCUMENTATION,
            "Documentation",
            issues,
            [
                (ids::KEY_HAS_README, ctx.echo(ids::KEY_HAS_README)),
                (ids::KEY_HAS_API_DOCS, ctx.echo(ids::KEY_HAS_API_DOCS)),
                (ids::KEY_DOC_COVERAGE, ctx.echo(ids::KEY_DOC_COVERAGE)),
            ],
        )
    }
}

#[async_trait]
impl Check for DocumentationCheck {
    fn name(&self) -> &str {
        ids::NAME_DOCUMENTATION
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
