//! Stable DTOs and IDs used across the stagegate workspace.
//!
//! This crate is intentionally boring:
//! - the serializable report document renderers consume
//! - severities
//! - stable check ids, display names, and context keys

#![forbid(unsafe_code)]

pub mod ids;
pub mod report;

pub use report::{
    ReportDocument, ReportSummary, ResultEntry, SCHEMA_REPORT_V1, Severity, ToolMeta,
};
