use serde::{Deserialize, Serialize};
use stagegate_types::ids;
use std::fmt;
use std::str::FromStr;

/// Maturity level a project is validated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Mvp,
    Production,
    Enterprise,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Mvp, Stage::Production, Stage::Enterprise];

    /// Lowercase id accepted on the command line and in config.
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Mvp => ids::STAGE_MVP,
            Stage::Production => ids::STAGE_PRODUCTION,
            Stage::Enterprise => ids::STAGE_ENTERPRISE,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Stage::Mvp => "MVP",
            Stage::Production => "Production",
            Stage::Enterprise => "Enterprise",
        }
    }

    pub fn metadata(self) -> StageMetadata {
        let (description, requirements): (&str, &[&str]) = match self {
            Stage::Mvp => (
                "Minimum Viable Product validation stage",
                &[
                    "Basic code quality (60% coverage)",
                    "Security vulnerability checks",
                    "README documentation",
                ],
            ),
            Stage::Production => (
                "Production-ready validation stage",
                &[
                    "High code quality (80% coverage)",
                    "Strict security (HTTPS required)",
                    "Performance requirements met",
                    "Comprehensive documentation",
                    "License file required",
                ],
            ),
            Stage::Enterprise => (
                "Enterprise-grade validation stage",
                &[
                    "Highest code quality (90% coverage)",
                    "Strictest security requirements",
                    "Optimal performance (500ms response, 256MB memory)",
                    "Complete documentation (90% coverage)",
                    "Full compliance (ISO-27001, SOC-2, GDPR)",
                ],
            ),
        };

        StageMetadata {
            name: self.display_name().to_string(),
            description: description.to_string(),
            requirements: requirements.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = anyhow::Error;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            ids::STAGE_MVP => Ok(Stage::Mvp),
            ids::STAGE_PRODUCTION => Ok(Stage::Production),
            ids::STAGE_ENTERPRISE => Ok(Stage::Enterprise),
            _ => anyhow::bail!(
                "unknown stage: {s} (valid stages: {})",
                ids::ALL_STAGES.join(", ")
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageMetadata {
    pub name: String,
    pub description: String,
    pub requirements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_stages_case_insensitively() {
        assert_eq!("mvp".parse::<Stage>().unwrap(), Stage::Mvp);
        assert_eq!("Production".parse::<Stage>().unwrap(), Stage::Production);
        assert_eq!("ENTERPRISE".parse::<Stage>().unwrap(), Stage::Enterprise);
    }

    #[test]
    fn unknown_stage_lists_valid_names() {
        let err = "beta".parse::<Stage>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown stage: beta (valid stages: mvp, production, enterprise)"
        );
    }

    #[test]
    fn every_stage_round_trips_through_its_id() {
        for stage in Stage::ALL {
            assert_eq!(stage.as_str().parse::<Stage>().unwrap(), stage);
            assert_eq!(stage.to_string(), stage.as_str());
        }
    }

    #[test]
    fn metadata_names_and_requirements() {
        let meta = Stage::Mvp.metadata();
        assert_eq!(meta.name, "MVP");
        assert_eq!(meta.description, "Minimum Viable Product validation stage");
        assert_eq!(meta.requirements.len(), 3);

        assert_eq!(Stage::Production.metadata().requirements.len(), 5);
        assert!(
            Stage::Enterprise
                .metadata()
                .requirements
                .iter()
                .any(|r| r.contains("GDPR"))
        );
    }
}
