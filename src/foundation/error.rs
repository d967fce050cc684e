/// Convenience alias for results produced by this crate.
pub type CuelightResult<T> = Result<T, CuelightError>;

/// Errors surfaced by timeline construction and frame evaluation.
#[derive(thiserror::Error, Debug)]
pub enum CuelightError {
    /// Structurally invalid configuration or input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid cue timeline data.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// Failure while evaluating a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Any other error bubbled up from a collaborator.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CuelightError {
    /// Build a [`CuelightError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CuelightError::Timeline`].
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    /// Build a [`CuelightError::Evaluation`].
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }
}
