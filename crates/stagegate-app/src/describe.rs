//! The `stages` and `describe` use cases: stage metadata for humans and tools.

use serde::Serialize;
use stagegate_domain::CheckMetadata;
use stagegate_settings::{Stage, StageMetadata, StageSpec};

/// A resolved stage with the metadata of every configured check.
#[derive(Clone, Debug, Serialize)]
pub struct StageDescription {
    pub stage: String,
    #[serde(flatten)]
    pub metadata: StageMetadata,
    pub concurrent: bool,
    pub stop_on_first_failure: bool,
    pub checks: Vec<CheckMetadata>,
}

pub fn describe_stage(spec: &StageSpec) -> StageDescription {
    StageDescription {
        stage: spec.stage.as_str().to_string(),
        metadata: spec.metadata(),
        concurrent: spec.options.concurrent,
        stop_on_first_failure: spec.options.stop_on_first_failure,
        checks: spec.build_runner().metadata(),
    }
}

/// Banner printed before a run.
pub fn format_stage_banner(metadata: &StageMetadata) -> String {
    let mut out = String::new();

    out.push_str(&format!("Stage: {}\n", metadata.name));
    out.push_str(&format!("Description: {}\n", metadata.description));
    out.push_str("\nRequirements:\n");
    for req in &metadata.requirements {
        out.push_str(&format!("  - {req}\n"));
    }
    out.push('\n');
    out.push_str(&"=".repeat(60));
    out.push('\n');

    out
}

/// Every built-in stage with its description and requirements.
pub fn format_stage_list() -> String {
    let mut out = String::new();

    for (i, stage) in Stage::ALL.into_iter().enumerate() {
        let metadata = stage.metadata();
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{} ({})\n", stage.as_str(), metadata.name));
        out.push_str(&format!("  {}\n", metadata.description));
        for req in &metadata.requirements {
            out.push_str(&format!("  - {req}\n"));
        }
    }

    out
}
