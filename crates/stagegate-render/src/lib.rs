//! Rendering of validation reports (plain text, JSON, Markdown, HTML).
//!
//! Every renderer is a pure function of a [`ReportDocument`].

#![forbid(unsafe_code)]

mod format;
mod html;
mod markdown;
mod text;

pub use format::{Format, UnknownFormat, render};
pub use html::render_html;
pub use markdown::render_markdown;
pub use text::render_text;

use stagegate_types::{ReportDocument, ReportSummary};
use time::format_description::well_known::Rfc3339;

/// Pretty-printed JSON of the whole document.
pub fn render_json(report: &ReportDocument) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}

fn status_mark(passed: bool) -> &'static str {
    if passed { "✓" } else { "✗" }
}

fn status_label(summary: &ReportSummary) -> &'static str {
    if summary.passed {
        "✓ PASSED"
    } else {
        "✗ FAILED"
    }
}

fn timestamp(summary: &ReportSummary) -> String {
    summary
        .timestamp
        .format(&Rfc3339)
        .unwrap_or_else(|_| summary.timestamp.to_string())
}
