use crate::fingerprint::fingerprint_for_outcome;
use serde_json::Value;
use stagegate_types::{ResultEntry, ids};
use time::OffsetDateTime;

/// Result of evaluating one check against one context.
///
/// Fields are private: an outcome is never changed after construction. The timestamp is
/// captured when the outcome is created.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    name: String,
    passed: bool,
    message: String,
    details: Value,
    timestamp: OffsetDateTime,
}

impl Outcome {
    pub fn new(
        name: impl Into<String>,
        passed: bool,
        message: impl Into<String>,
        details: Value,
    ) -> Self {
        Self {
            name: name.into(),
            passed,
            message: message.into(),
            details,
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, true, message, Value::Null)
    }

    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, false, message, Value::Null)
    }

    pub fn with_details(self, details: Value) -> Self {
        Self { details, ..self }
    }

    /// Pin the capture time, e.g. when replaying stored outcomes.
    pub fn at(self, timestamp: OffsetDateTime) -> Self {
        Self { timestamp, ..self }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &Value {
        &self.details
    }

    pub fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    pub fn issues(&self) -> Vec<&str> {
        self.details
            .get(ids::DETAIL_ISSUES)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn fingerprint(&self) -> String {
        fingerprint_for_outcome(&self.name, self.passed, &self.message, &self.details)
    }

    /// Equal in everything except the capture time.
    pub fn same_content(&self, other: &Outcome) -> bool {
        self.name == other.name
            && self.passed == other.passed
            && self.message == other.message
            && self.details == other.details
    }

    pub fn to_entry(&self) -> ResultEntry {
        ResultEntry {
            name: self.name.clone(),
            passed: self.passed,
            message: self.message.clone(),
            details: self.details.clone(),
            timestamp: self.timestamp,
            fingerprint: Some(self.fingerprint()),
        }
    }
}
