use crate::{status_mark, timestamp};
use stagegate_types::ReportDocument;

const STYLE: &str = r#"    body { font-family: Arial, sans-serif; margin: 20px; background: #f5f5f5; }
    .container { max-width: 900px; margin: 0 auto; background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
    h1 { color: #333; border-bottom: 3px solid #007bff; padding-bottom: 10px; }
    .summary { background: #f8f9fa; padding: 15px; border-radius: 5px; margin: 20px 0; }
    .summary-item { margin: 8px 0; }
    .status { font-size: 24px; font-weight: bold; padding: 10px; border-radius: 5px; text-align: center; margin: 20px 0; }
    .success { background: #d4edda; color: #155724; }
    .failure { background: #f8d7da; color: #721c24; }
    .result { margin: 20px 0; padding: 15px; border-left: 4px solid #007bff; background: #f8f9fa; border-radius: 5px; }
    .result.passed { border-left-color: #28a745; }
    .result.failed { border-left-color: #dc3545; }
    .result-header { font-size: 18px; font-weight: bold; margin-bottom: 10px; }
    .result-message { margin: 10px 0; color: #666; }
    .issues ul { margin: 5px 0; padding-left: 20px; }
    .issues li { color: #d9534f; margin: 5px 0; }
"#;

/// Standalone HTML page. All report text is escaped before interpolation.
pub fn render_html(report: &ReportDocument) -> String {
    let summary = &report.summary;
    let (status_class, status_text) = if summary.passed {
        ("success", "PASSED")
    } else {
        ("failure", "FAILED")
    };

    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("  <meta charset=\"utf-8\">\n");
    out.push_str("  <title>Validation Report</title>\n");
    out.push_str("  <style>\n");
    out.push_str(STYLE);
    out.push_str("  </style>\n</head>\n<body>\n");
    out.push_str("  <div class=\"container\">\n");
    out.push_str("    <h1>Validation Report</h1>\n");
    out.push_str(&format!(
        "    <div class=\"status {status_class}\">{status_text}</div>\n"
    ));

    out.push_str("    <div class=\"summary\">\n      <h2>Summary</h2>\n");
    for (label, value) in [
        ("Total Checks", summary.total.to_string()),
        ("Passed", summary.passed_count.to_string()),
        ("Failed", summary.failed_count.to_string()),
        ("Duration", format!("{}ms", summary.duration_ms)),
        ("Timestamp", timestamp(summary)),
    ] {
        out.push_str(&format!(
            "      <div class=\"summary-item\"><strong>{label}:</strong> {}</div>\n",
            escape(&value)
        ));
    }
    out.push_str("    </div>\n");

    out.push_str("    <h2>Results</h2>\n");
    for result in &report.results {
        let class = if result.passed { "passed" } else { "failed" };
        out.push_str(&format!("    <div class=\"result {class}\">\n"));
        out.push_str(&format!(
            "      <div class=\"result-header\">{} {}</div>\n",
            status_mark(result.passed),
            escape(&result.name)
        ));
        out.push_str(&format!(
            "      <div class=\"result-message\">{}</div>\n",
            escape(&result.message)
        ));

        let issues = result.issues();
        if !issues.is_empty() {
            out.push_str("      <div class=\"issues\">\n        <strong>Issues:</strong>\n");
            out.push_str("        <ul>\n");
            for issue in issues {
                out.push_str(&format!("          <li>{}</li>\n", escape(issue)));
            }
            out.push_str("        </ul>\n      </div>\n");
        }
        out.push_str("    </div>\n");
    }

    out.push_str("  </div>\n</body>\n</html>\n");
    out
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
