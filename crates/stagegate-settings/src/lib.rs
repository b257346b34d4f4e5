//! Stage presets, config parsing, and override resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;
mod stage;

pub use model::{CheckConfig, ReportConfig, StagegateConfigV1};
pub use presets::{CheckSpec, StageSpec, preset};
pub use resolve::{Overrides, ResolvedConfig};
pub use stage::{Stage, StageMetadata};

/// Schema id accepted in the `schema` field of `stagegate.toml`.
pub const SCHEMA_CONFIG_V1: &str = "stagegate.config.v1";

/// Parse `stagegate.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<StagegateConfigV1> {
    let cfg: StagegateConfigV1 = toml::from_str(input)?;
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }
    Ok(cfg)
}

/// Resolve the stage spec the runner is built from (preset + config + overrides).
pub fn resolve_config(
    cfg: StagegateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

#[cfg(test)]
mod tests;
