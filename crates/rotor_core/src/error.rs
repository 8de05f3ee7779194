//! Error types for the Rotor engine.

use thiserror::Error;

/// All errors that can be produced by the Rotor engine.
#[derive(Debug, Error)]
pub enum RotorError {
    /// A JavaScript SyntaxError was raised while parsing.
    #[error("SyntaxError: {0}")]
    SyntaxError(String),

    /// An internal engine error that should not occur in normal operation.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenient `Result` alias for fallible engine operations.
pub type RotorResult<T> = Result<T, RotorError>;
