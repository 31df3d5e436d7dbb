//! Error Types
//!
//! Crate-wide error type for the pairwise generator. Mirrors the
//! one-variant-per-failure-kind `thiserror` pattern used throughout this
//! crate's generator and preprocessing layers.

use thiserror::Error;

/// Errors surfaced by construction and generation APIs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenError {
    /// A required argument was null, empty, or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A user-supplied rule callback panicked during evaluation.
    #[error("rule callback failed: {0}")]
    RuleFailure(String),
}

/// Result type for fallible generator operations.
pub type GenResult<T> = Result<T, GenError>;
