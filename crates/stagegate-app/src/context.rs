//! Loading the evaluation context.

use anyhow::Context as _;
use camino::Utf8Path;
use serde_json::json;
use stagegate_domain::Context;

/// Parse a JSON object into a context.
pub fn parse_context(text: &str) -> anyhow::Result<Context> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse context JSON")?;
    Ok(Context::from_value(value)?)
}

/// Read and parse a context file.
pub fn read_context(path: &Utf8Path) -> anyhow::Result<Context> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read context: {path}"))?;
    parse_context(&text).with_context(|| format!("invalid context file: {path}"))
}

/// Sample project facts used when no context file is given.
///
/// Passes the `mvp` and `production` presets; falls short of `enterprise` on code and
/// documentation coverage.
pub fn default_context() -> Context {
    let value = json!({
        "coverage": 85,
        "complexity": 8,
        "protocol": "https",
        "vulnerabilities": [],
        "has_secrets": false,
        "response_time": 450,
        "memory_usage": 200,
        "has_readme": true,
        "has_api_docs": true,
        "doc_coverage": 85,
        "has_license": true,
        "standards": ["ISO-27001", "SOC-2", "GDPR"],
        "has_audit_logs": true,
    });
    match value {
        serde_json::Value::Object(map) => Context::from(map),
        _ => Context::new(),
    }
}
