use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use time::OffsetDateTime;

/// Stable schema identifier for serialized reports.
pub const SCHEMA_REPORT_V1: &str = "stagegate.report.v1";

/// Severity is a display tag only; it never changes pass/fail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
    Info,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Summary block computed once when the report was built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportSummary {
    pub passed: bool,
    pub total: u32,
    pub passed_count: u32,
    pub failed_count: u32,
    pub duration_ms: u64,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// One check outcome as it appears in the interchange document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ResultEntry {
    pub name: String,
    pub passed: bool,
    pub message: String,

    /// Check-specific payload; `issues` (list of strings) is the conventional key.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub details: JsonValue,

    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,

    /// Hash of the outcome content (name, passed, message, details).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

impl ResultEntry {
    /// Itemized issues from `details.issues`; non-string entries are skipped.
    pub fn issues(&self) -> Vec<&str> {
        self.details
            .get(ids::DETAIL_ISSUES)
            .and_then(JsonValue::as_array)
            .map(|items| items.iter().filter_map(JsonValue::as_str).collect())
            .unwrap_or_default()
    }
}

/// The canonical nested structure every renderer consumes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportDocument {
    /// Versioned schema identifier for the document shape.
    pub schema: String,
    pub tool: ToolMeta,
    pub summary: ReportSummary,
    pub results: Vec<ResultEntry>,
}

impl ReportDocument {
    pub fn failures(&self) -> impl Iterator<Item = &ResultEntry> {
        self.results.iter().filter(|r| !r.passed)
    }
}
