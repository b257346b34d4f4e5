//! The `run` use case: resolve a stage, execute its checks, and build the report.

use anyhow::Context as _;
use stagegate_domain::{Context, Report};
use stagegate_settings::{Overrides, ResolvedConfig, StagegateConfigV1};
use stagegate_types::ReportDocument;

/// Input for the run use case.
#[derive(Clone, Debug)]
pub struct RunInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Facts the checks are evaluated against.
    pub context: Context,
}

/// Output from the run use case.
#[derive(Debug)]
pub struct RunOutput {
    pub report: Report,
    pub document: ReportDocument,
    pub resolved: ResolvedConfig,
}

/// Parse and resolve the config without running anything.
pub fn resolve(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    // Empty is allowed, defaults apply.
    let cfg = if config_text.trim().is_empty() {
        StagegateConfigV1::default()
    } else {
        stagegate_settings::parse_config_toml(config_text).context("parse config")?
    };

    stagegate_settings::resolve_config(cfg, overrides).context("resolve config")
}

/// Run the stage selected by config and overrides against `input.context`.
pub fn run_stage(input: RunInput<'_>) -> anyhow::Result<RunOutput> {
    let resolved = resolve(input.config_text, input.overrides)?;
    let runner = resolved.spec.build_runner();
    log::debug!("running stage {} with {:?}", resolved.spec.stage, runner);

    let report = futures::executor::block_on(runner.execute(&input.context));
    let document = report.to_serializable();

    Ok(RunOutput {
        report,
        document,
        resolved,
    })
}

/// Map the overall verdict to a process exit code: 0 = passed, 1 = failed.
pub fn exit_code(passed: bool) -> i32 {
    if passed { 0 } else { 1 }
}
