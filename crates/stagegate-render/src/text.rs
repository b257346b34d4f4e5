use crate::{status_label, status_mark, timestamp};
use stagegate_types::ReportDocument;

const RULE_WIDTH: usize = 60;

/// Console report: summary block, then one entry per outcome with its issues.
pub fn render_text(report: &ReportDocument) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let summary = &report.summary;
    let mut lines: Vec<String> = Vec::new();

    lines.push(rule.clone());
    lines.push("VALIDATION REPORT".to_string());
    lines.push(rule.clone());
    lines.push(String::new());
    lines.push(format!("Status: {}", status_label(summary)));
    lines.push(format!("Total Checks: {}", summary.total));
    lines.push(format!("Passed: {}", summary.passed_count));
    lines.push(format!("Failed: {}", summary.failed_count));
    lines.push(format!("Duration: {}ms", summary.duration_ms));
    lines.push(format!("Timestamp: {}", timestamp(summary)));
    lines.push(String::new());
    lines.push(rule.clone());
    lines.push("RESULTS".to_string());
    lines.push(rule.clone());

    for result in &report.results {
        lines.push(String::new());
        lines.push(format!("{} {}", status_mark(result.passed), result.name));
        lines.push(format!("  {}", result.message));

        let issues = result.issues();
        if !issues.is_empty() {
            lines.push("  Issues:".to_string());
            for issue in issues {
                lines.push(format!("    - {issue}"));
            }
        }
    }

    lines.push(String::new());
    lines.push(rule);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
