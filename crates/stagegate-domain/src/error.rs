use thiserror::Error;

/// Unexpected fault raised while evaluating a check.
///
/// Rule violations are never errors; they are failing outcomes. Every variant here is
/// converted into a failing outcome by the runner.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The check never overrode `evaluate`.
    #[error("evaluate() is not implemented by {check}")]
    NotImplemented { check: String },

    /// The check returned an error.
    #[error("{0}")]
    Fault(String),

    /// The check panicked during evaluation.
    #[error("panicked: {0}")]
    Panicked(String),
}

impl CheckError {
    pub fn fault(message: impl Into<String>) -> Self {
        CheckError::Fault(message.into())
    }

    /// Short discriminator recorded in the synthetic outcome's details.
    pub const fn kind(&self) -> &'static str {
        match self {
            CheckError::NotImplemented { .. } => "not_implemented",
            CheckError::Fault(_) => "fault",
            CheckError::Panicked(_) => "panic",
        }
    }
}

impl From<anyhow::Error> for CheckError {
    fn from(err: anyhow::Error) -> Self {
        CheckError::Fault(format!("{err:#}"))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("context must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context as _;

    #[test]
    fn anyhow_chain_is_kept_in_fault_message() {
        let err: anyhow::Result<()> = Err(anyhow::anyhow!("disk gone")).context("read probe");
        let converted = CheckError::from(err.unwrap_err());
        assert_eq!(converted.kind(), "fault");
        assert_eq!(converted.to_string(), "read probe: disk gone");
    }

    #[test]
    fn not_implemented_names_the_check() {
        let err = CheckError::NotImplemented {
            check: "Bare".to_string(),
        };
        assert_eq!(err.to_string(), "evaluate() is not implemented by Bare");
        assert_eq!(err.kind(), "not_implemented");
    }
}
