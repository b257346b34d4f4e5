use crate::outcome::Outcome;
use stagegate_types::{ReportDocument, ReportSummary, SCHEMA_REPORT_V1, ToolMeta};
use time::OffsetDateTime;

/// Aggregate of every outcome produced by one execution.
///
/// Counts and the verdict are computed once in [`Report::new`]; a report is never
/// modified afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    outcomes: Vec<Outcome>,
    duration_ms: u64,
    passed: bool,
    total: u32,
    passed_count: u32,
    failed_count: u32,
    created_at: OffsetDateTime,
}

impl Report {
    pub fn new(outcomes: Vec<Outcome>, duration_ms: u64) -> Self {
        let passed = outcomes.iter().filter(|o| o.passed()).count();
        let failed = outcomes.len() - passed;

        Self {
            passed: failed == 0,
            total: saturating_count(outcomes.len()),
            passed_count: saturating_count(passed),
            failed_count: saturating_count(failed),
            outcomes,
            duration_ms,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    /// Outcomes in execution order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// True when every outcome passed; vacuously true for an empty report.
    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn passed_count(&self) -> u32 {
        self.passed_count
    }

    pub fn failed_count(&self) -> u32 {
        self.failed_count
    }

    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    /// Failing outcomes, in report order.
    pub fn failures(&self) -> Vec<&Outcome> {
        self.outcomes.iter().filter(|o| !o.passed()).collect()
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            passed: self.passed,
            total: self.total,
            passed_count: self.passed_count,
            failed_count: self.failed_count,
            duration_ms: self.duration_ms,
            timestamp: self.created_at,
        }
    }

    /// The interchange document renderers consume.
    pub fn to_serializable(&self) -> ReportDocument {
        ReportDocument {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "stagegate".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            summary: self.summary(),
            results: self.outcomes.iter().map(Outcome::to_entry).collect(),
        }
    }

    /// Whether two reports hold the same outcome content in the same order, ignoring
    /// timestamps and duration.
    pub fn same_content(&self, other: &Report) -> bool {
        self.passed == other.passed
            && self.outcomes.len() == other.outcomes.len()
            && self
                .outcomes
                .iter()
                .zip(&other.outcomes)
                .all(|(a, b)| a.same_content(b))
    }
}

/// Report counts are `u32` on the wire; clamp instead of wrapping.
fn saturating_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
