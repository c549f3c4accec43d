//! Error types for the amount normalizer
//!
//! The by-contract normalization surface never fails — it signals "could not
//! confidently resolve" with an empty string. These types exist for callers
//! that want the failure as a value instead of a sentinel (the CLI, the
//! typed [`CanonicalAmount`](crate::CanonicalAmount) constructor).

use thiserror::Error;

/// Amount normalization error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Non-empty input could not be confidently normalized to a number
    #[error("not a recognizable amount: {0:?}")]
    NotAnAmount(String),

    /// A string does not match the canonical amount grammar
    /// `('-')? digit+ ('.' digit{1,2})?`
    #[error("not in canonical form: {0:?}")]
    NotCanonical(String),
}

/// Result type alias for amount operations
pub type Result<T> = std::result::Result<T, Error>;
