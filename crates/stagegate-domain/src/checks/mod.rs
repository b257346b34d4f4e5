//! Built-in checks and the catalog used to construct them by id.

pub mod code_quality;
pub mod compliance;
pub mod documentation;
pub mod performance;
pub mod security;
pub mod utils;


pub use code_quality::{CodeQualityCheck, CodeQualityConfig};
pub use compliance::{ComplianceCheck, ComplianceConfig};
pub use documentation::{DocumentationCheck, DocumentationConfig};
pub use performance::{PerformanceCheck, PerformanceConfig};
pub use security::{SecurityCheck, SecurityConfig};

use crate::{Check, CheckSettings};
use serde_json::{Map, Value};
use stagegate_types::ids;

/// A built-in check together with its parameters, before settings are attached.
#[derive(Clone, Debug, PartialEq)]
pub enum BuiltinCheck {
    CodeQuality(CodeQualityConfig),
    Security(SecurityConfig),
    Performance(PerformanceConfig),
    Documentation(DocumentationConfig),
    Compliance(ComplianceConfig),
}

impl BuiltinCheck {
    /// Stable snake_case id (`code_quality`, `security`, ...).
    pub fn id(&self) -> &'static str {
        match self {
            Self::CodeQuality(_) => ids::CHECK_CODE_QUALITY,
            Self::Security(_) => ids::CHECK_SECURITY,
            Self::Performance(_) => ids::CHECK_PERFORMANCE,
            Self::Documentation(_) => ids::CHECK_DOCUMENTATION,
            Self::Compliance(_) => ids::CHECK_COMPLIANCE,
        }
    }

    /// Display name the constructed check reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CodeQuality(_) => ids::NAME_CODE_QUALITY,
            Self::Security(_) => ids::NAME_SECURITY,
            Self::Performance(_) => ids::NAME_PERFORMANCE,
            Self::Documentation(_) => ids::NAME_DOCUMENTATION,
            Self::Compliance(_) => ids::NAME_COMPLIANCE,
        }
    }

    /// The check with default parameters, or `None` for an unknown id.
    pub fn default_for(id: &str) -> Option<Self> {
        match id {
            ids::CHECK_CODE_QUALITY => Some(Self::CodeQuality(CodeQualityConfig::default())),
            ids::CHECK_SECURITY => Some(Self::Security(SecurityConfig::default())),
            ids::CHECK_PERFORMANCE => Some(Self::Performance(PerformanceConfig::default())),
            ids::CHECK_DOCUMENTATION => {
                Some(Self::Documentation(DocumentationConfig::default()))
            }
            ids::CHECK_COMPLIANCE => Some(Self::Compliance(ComplianceConfig::default())),
            _ => None,
        }
    }

    pub fn parameters(&self) -> Value {
        match self {
            Self::CodeQuality(cfg) => utils::parameters_of(cfg),
            Self::Security(cfg) => utils::parameters_of(cfg),
            Self::Performance(cfg) => utils::parameters_of(cfg),
            Self::Documentation(cfg) => utils::parameters_of(cfg),
            Self::Compliance(cfg) => utils::parameters_of(cfg),
        }
    }

    /// Overlay `overrides` onto the current parameters.
    ///
    /// Keys not present in `overrides` keep their current value. Unknown keys and
    /// mistyped values are rejected.
    pub fn with_parameters(&self, overrides: &Map<String, Value>) -> serde_json::Result<Self> {
        let mut merged = match self.parameters() {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for (key, value) in overrides {
            merged.insert(key.clone(), value.clone());
        }
        let merged = Value::Object(merged);

        Ok(match self {
            Self::CodeQuality(_) => Self::CodeQuality(serde_json::from_value(merged)?),
            Self::Security(_) => Self::Security(serde_json::from_value(merged)?),
            Self::Performance(_) => Self::Performance(serde_json::from_value(merged)?),
            Self::Documentation(_) => Self::Documentation(serde_json::from_value(merged)?),
            Self::Compliance(_) => Self::Compliance(serde_json::from_value(merged)?),
        })
    }

    pub fn into_check(self, settings: CheckSettings) -> Box<dyn Check> {
        match self {
            Self::CodeQuality(cfg) => Box::new(CodeQualityCheck::new(cfg).with_settings(settings)),
            Self::Security(cfg) => Box::new(SecurityCheck::new(cfg).with_settings(settings)),
            Self::Performance(cfg) => {
                Box::new(PerformanceCheck::new(cfg).with_settings(settings))
            }
            Self::Documentation(cfg) => {
                Box::new(DocumentationCheck::new(cfg).with_settings(settings))
            }
            Self::Compliance(cfg) => Box::new(ComplianceCheck::new(cfg).with_settings(settings)),
        }
    }
}
