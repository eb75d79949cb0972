//! Error types for explanation providers.

use thiserror::Error;

/// Errors an explanation provider may return.
///
/// Every variant is advisory: callers substitute a locally generated
/// narrative on failure and never propagate these into a report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExplainError {
    /// The provider is not configured or reachable.
    #[error("explanation provider unavailable: {0}")]
    Unavailable(String),

    /// The provider returned an error response.
    #[error("explanation request failed: {0}")]
    RequestFailed(String),

    /// The provider responded with a payload we could not interpret.
    #[error("malformed explanation response: {0}")]
    MalformedResponse(String),

    /// The request exceeded its deadline.
    #[error("explanation request timed out after {0} ms")]
    Timeout(u64),
}

/// Result type for explanation operations.
pub type ExplainResult<T> = Result<T, ExplainError>;
