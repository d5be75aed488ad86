//! Error types for the pigeonhole generator

use thiserror::Error;

/// Errors raised while validating input or emitting an instance
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The hole count is missing, not an integer, below one, or too large
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The clauses written disagree with the counts in the problem line
    #[error("wrote {written} clauses but the problem line announced {announced}")]
    ClauseCountMismatch { announced: u64, written: u64 },

    #[error("failed to write instance: {0}")]
    Io(#[from] std::io::Error),
}

impl GeneratorError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
