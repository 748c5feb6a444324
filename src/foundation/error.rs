/// Crate-wide result alias.
pub type ReelResult<T> = Result<T, ReelError>;

/// Errors surfaced by configuration loading, probing and evaluation.
///
/// Probe errors are produced by [`crate::AudioProbe`] implementations but never escape the
/// duration reconciler; they exist so probes can report what went wrong for logging.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Malformed configuration or composition parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Asset probe failure (missing file, unparseable container, tool not available).
    #[error("probe error: {0}")]
    Probe(String),

    /// Frame evaluation failure (for example an out-of-range frame).
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, with its source preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Probe`].
    pub fn probe(msg: impl Into<String>) -> Self {
        Self::Probe(msg.into())
    }

    /// Build a [`ReelError::Evaluation`].
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ReelError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
