//! Error taxonomy
//!
//! Two classes only: malformed input caught before any simulation starts,
//! and internal-consistency failures that indicate a bug. This is a one-shot
//! batch computation with no external dependencies, so there is no
//! recoverable or retryable class.

use thiserror::Error;

/// Errors produced by the sampler and estimator
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimateError {
    /// Malformed or out-of-range parameter, detected before simulation
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Should never occur if argument validation is enforced
    #[error("internal consistency failure: {0}")]
    Internal(String),
}
