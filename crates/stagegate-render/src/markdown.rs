use crate::{status_label, status_mark, timestamp};
use stagegate_types::ReportDocument;

pub fn render_markdown(report: &ReportDocument) -> String {
    let summary = &report.summary;
    let mut out = String::new();

    out.push_str("# Validation Report\n\n");
    out.push_str("## Summary\n\n");
    out.push_str(&format!("- **Status**: {}\n", status_label(summary)));
    out.push_str(&format!("- **Total Checks**: {}\n", summary.total));
    out.push_str(&format!("- **Passed**: {}\n", summary.passed_count));
    out.push_str(&format!("- **Failed**: {}\n", summary.failed_count));
    out.push_str(&format!("- **Duration**: {}ms\n", summary.duration_ms));
    out.push_str(&format!("- **Timestamp**: {}\n\n", timestamp(summary)));

    out.push_str("## Results\n\n");

    if report.results.is_empty() {
        out.push_str("No checks ran.\n");
        return out;
    }

    for result in &report.results {
        out.push_str(&format!(
            "### {} {}\n\n",
            status_mark(result.passed),
            result.name
        ));
        out.push_str(&format!("{}\n\n", result.message));

        let issues = result.issues();
        if !issues.is_empty() {
            out.push_str("**Issues:**\n\n");
            for issue in issues {
                out.push_str(&format!("- {issue}\n"));
            }
            out.push('\n');
        }
    }

    out
}
