use std::fmt;
use thiserror::Error;

/// Which parse checkpoint rejected the text last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The checkpoint after comma/bracket balancing (fallback disabled).
    Balance,
    /// The final checkpoint after the aggressive rewrites.
    Fallback,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Balance => f.write_str("balance"),
            Stage::Fallback => f.write_str("fallback"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepairError {
    /// The input was empty. Anything non-empty goes through the pipeline.
    #[error("input must be a non-empty string")]
    InputInvalid,
    /// Every repair stage ran and the text still does not parse.
    /// `diagnostic` is the underlying parser's message from the last attempt.
    #[error("unable to repair JSON ({stage} stage): {diagnostic}")]
    RepairFailed { stage: Stage, diagnostic: String },
}

impl RepairError {
    pub(crate) fn failed(stage: Stage, err: serde_json::Error) -> Self {
        RepairError::RepairFailed {
            stage,
            diagnostic: err.to_string(),
        }
    }
}
