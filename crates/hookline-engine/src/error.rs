//! Error types for the decision pipeline.

use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Errors from the decision pipeline.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid segment: {0}")]
    InvalidSegment(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl EngineError {
    pub fn invalid_segment(msg: impl Into<String>) -> Self {
        Self::InvalidSegment(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
