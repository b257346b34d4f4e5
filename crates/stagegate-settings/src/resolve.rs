use crate::model::StagegateConfigV1;
use crate::presets::{self, CheckSpec, StageSpec};
use crate::stage::Stage;
use anyhow::Context;
use serde_json::Map;
use stagegate_domain::CheckSettings;
use stagegate_domain::checks::BuiltinCheck;
use stagegate_types::Severity;

/// Values supplied on the command line; they win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub stage: Option<String>,
    pub concurrent: Option<bool>,
    pub stop_on_first_failure: Option<bool>,
    pub format: Option<String>,
    pub output: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub spec: StageSpec,
    pub format: Option<String>,
    pub output: Option<String>,
}

pub fn resolve_config(
    cfg: StagegateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let stage: Stage = match overrides.stage.as_deref().or(cfg.stage.as_deref()) {
        Some(name) => name.parse()?,
        None => Stage::Mvp,
    };

    let mut spec = presets::preset(stage);

    if let Some(concurrent) = overrides.concurrent.or(cfg.concurrent) {
        spec.options.concurrent = concurrent;
    }
    if let Some(stop) = overrides.stop_on_first_failure.or(cfg.stop_on_first_failure) {
        spec.options.stop_on_first_failure = stop;
    }

    // per-check overrides
    for (check_id, cc) in &cfg.checks {
        let index = match spec.checks.iter().position(|c| c.check.id() == check_id.as_str()) {
            Some(index) => index,
            None => {
                let check = BuiltinCheck::default_for(check_id)
                    .with_context(|| format!("unknown check id: {check_id}"))?;
                // Only added to the stage when explicitly switched on.
                if cc.enabled != Some(true) {
                    continue;
                }
                spec.checks.push(CheckSpec {
                    check,
                    settings: CheckSettings::default(),
                });
                spec.checks.len() - 1
            }
        };
        let entry = &mut spec.checks[index];

        if let Some(enabled) = cc.enabled {
            entry.settings.enabled = enabled;
        }
        if let Some(sev) = cc.severity.as_deref() {
            entry.settings.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {check_id}"))?;
        }
        if !cc.params.is_empty() {
            let params: Map<String, serde_json::Value> = cc.params.clone().into_iter().collect();
            entry.check = entry
                .check
                .with_parameters(&params)
                .with_context(|| format!("invalid parameters for {check_id}"))?;
        }
    }

    let report = cfg.report.unwrap_or_default();
    Ok(ResolvedConfig {
        spec,
        format: overrides.format.or(report.format),
        output: overrides.output.or(report.output),
    })
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}
