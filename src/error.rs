//! Error types for braid entropy computations

use thiserror::Error;

/// Errors raised by loop, braid, entropy and time-stamped braid operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BraidError {
    // Configuration errors
    #[error("Unsupported length flag '{0}': expected intaxis (0), minlength (1) or l2norm (2)")]
    BadLengthFlag(String),

    #[error("Invalid tolerance {0}: must be finite and non-negative")]
    InvalidTolerance(f64),

    #[error("Tolerance 0 requires a positive maximum iteration count")]
    MissingIterationCap,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid generator {generator} for a braid on {strands} strands")]
    InvalidGenerator { generator: i32, strands: usize },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Length mismatch: {generators} generators but {times} crossing times")]
    LengthMismatch { generators: usize, times: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // Invariant violations
    #[error("Loop length must never be negative (got {0})")]
    BadLength(f64),

    // Chronology errors
    #[error("Invalid crossing times at index {index}: {reason}")]
    InvalidTimestamps { index: usize, reason: &'static str },

    #[error("Non-chronological composition: left ends at {left_max}, right starts at {right_min}")]
    NonChronological { left_max: f64, right_min: f64 },

    // Unsupported operations
    #[error("{operation} is not defined for time-stamped braids; use ftbe instead")]
    UnsupportedOnChrono { operation: &'static str },

    // Numeric errors
    #[error("Numerical error: {0}")]
    Numerical(String),

    #[error("Loop coordinates exceeded exact floating-point range after {generators} generators; use the projective ftbe")]
    PrecisionLoss { generators: usize },

    // External collaborators
    #[error("Collaborator error: {0}")]
    Collaborator(String),
}

impl BraidError {
    /// Numeric-path failures that may be retried on the reference kernel
    pub fn is_recoverable(&self) -> bool {
        matches!(self, BraidError::Numerical(_))
    }
}

/// Result type for braid operations
pub type BraidResult<T> = Result<T, BraidError>;
