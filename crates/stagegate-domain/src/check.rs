use crate::context::Context;
use crate::error::CheckError;
use crate::outcome::Outcome;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use stagegate_types::Severity;

/// Settings every check carries regardless of its own parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSettings {
    pub severity: Severity,
    pub enabled: bool,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self::enabled(Severity::Error)
    }
}

impl CheckSettings {
    pub fn enabled(severity: Severity) -> Self {
        Self {
            severity,
            enabled: true,
        }
    }

    /// Switched off; severity keeps its default so metadata still reports it.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Introspection view of a check.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckMetadata {
    pub name: String,
    pub severity: Severity,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub parameters: Value,
}

/// A single named rule evaluated against a [`Context`].
///
/// Implementations must be reentrant: `evaluate` takes `&self` and may run concurrently
/// with other checks reading the same context. Return a failing [`Outcome`] for rule
/// violations; reserve `Err` (or a panic) for unexpected faults, which the runner turns
/// into a failing outcome.
#[async_trait]
pub trait Check: Send + Sync {
    fn name(&self) -> &str;

    fn settings(&self) -> CheckSettings {
        CheckSettings::default()
    }

    /// Check-specific configuration, echoed by [`Check::metadata`].
    fn parameters(&self) -> Value {
        Value::Null
    }

    /// The default body reports the check as unimplemented through the normal fault path.
    async fn evaluate(&self, _ctx: &Context) -> Result<Outcome, CheckError> {
        Err(CheckError::NotImplemented {
            check: self.name().to_string(),
        })
    }

    fn should_run(&self, _ctx: &Context) -> bool {
        self.settings().enabled
    }

    fn metadata(&self) -> CheckMetadata {
        let settings = self.settings();
        CheckMetadata {
            name: self.name().to_string(),
            severity: settings.severity,
            enabled: settings.enabled,
            parameters: self.parameters(),
        }
    }
}
