//! Stage-gated readiness checks.
//!
//! Register [`Check`]s on a [`Runner`], execute them against a [`Context`] of project
//! facts, and read the verdict off the resulting [`Report`]. The built-in checks live in
//! [`checks`]; [`preset`] builds the standard check set for a [`Stage`].
//!
//! ```
//! use stagegate::{Context, Stage, preset};
//!
//! let ctx = Context::new().with("coverage", 70).with("protocol", "https");
//! let report = preset(Stage::Production).build_runner().execute_blocking(&ctx);
//!
//! assert!(!report.passed());
//! assert_eq!(report.failures()[0].name(), "CodeQuality");
//! ```

#![forbid(unsafe_code)]

pub use stagegate_domain::{
    Check, CheckError, CheckMetadata, CheckSettings, Context, ContextError, Outcome, Report,
    Runner, RunnerOptions, async_trait, checks,
};
pub use stagegate_settings::{CheckSpec, Stage, StageMetadata, StageSpec, preset};
pub use stagegate_types::{
    ReportDocument, ReportSummary, ResultEntry, SCHEMA_REPORT_V1, Severity, ids,
};
