//! Stable identifiers for checks, stages, and context keys.
//!
//! `CHECK_*` ids are snake_case and used in config files. `NAME_*` values are the
//! display names outcomes are reported under.

// Checks
pub const CHECK_CODE_QUALITY: &str = "code_quality";
pub const CHECK_SECURITY: &str = "security";
pub const CHECK_PERFORMANCE: &str = "performance";
pub const CHECK_DOCUMENTATION: &str = "documentation";
pub const CHECK_COMPLIANCE: &str = "compliance";

pub const ALL_CHECKS: [&str; 5] = [
    CHECK_CODE_QUALITY,
    CHECK_SECURITY,
    CHECK_PERFORMANCE,
    CHECK_DOCUMENTATION,
    CHECK_COMPLIANCE,
];

// Outcome names
pub const NAME_CODE_QUALITY: &str = "CodeQuality";
pub const NAME_SECURITY: &str = "Security";
pub const NAME_PERFORMANCE: &str = "Performance";
pub const NAME_DOCUMENTATION: &str = "Documentation";
pub const NAME_COMPLIANCE: &str = "Compliance";

// Stages
pub const STAGE_MVP: &str = "mvp";
pub const STAGE_PRODUCTION: &str = "production";
pub const STAGE_ENTERPRISE: &str = "enterprise";

pub const ALL_STAGES: [&str; 3] = [STAGE_MVP, STAGE_PRODUCTION, STAGE_ENTERPRISE];

// Context keys: code_quality
pub const KEY_COVERAGE: &str = "coverage";
pub const KEY_COMPLEXITY: &str = "complexity";

// Context keys: security
pub const KEY_PROTOCOL: &str = "protocol";
pub const KEY_VULNERABILITIES: &str = "vulnerabilities";
pub const KEY_HAS_SECRETS: &str = "has_secrets";

// Context keys: performance
pub const KEY_RESPONSE_TIME: &str = "response_time";
pub const KEY_MEMORY_USAGE: &str = "memory_usage";

// Context keys: documentation
pub const KEY_HAS_README: &str = "has_readme";
pub const KEY_HAS_API_DOCS: &str = "has_api_docs";
pub const KEY_DOC_COVERAGE: &str = "doc_coverage";

// Context keys: compliance
pub const KEY_HAS_LICENSE: &str = "has_license";
pub const KEY_STANDARDS: &str = "standards";
pub const KEY_REQUIRE_AUDIT_LOGS: &str = "require_audit_logs";
pub const KEY_HAS_AUDIT_LOGS: &str = "has_audit_logs";

// Details keys
pub const DETAIL_ISSUES: &str = "issues";
pub const DETAIL_ERROR: &str = "error";
pub const DETAIL_FAULT_KIND: &str = "fault";
