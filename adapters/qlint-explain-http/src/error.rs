//! Error types for the HTTP explain adapter.

use thiserror::Error;

use qlint_explain::ExplainError;

/// Result type for HTTP explain operations.
pub type HttpExplainResult<T> = Result<T, HttpExplainError>;

/// Errors that can occur when talking to a completion endpoint.
#[derive(Debug, Error)]
pub enum HttpExplainError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing API token.
    #[error("Missing explain token: set QLINT_EXPLAIN_TOKEN environment variable")]
    MissingToken,

    /// Endpoint returned an error response.
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// Response body lacked a usable completion.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<HttpExplainError> for ExplainError {
    fn from(e: HttpExplainError) -> Self {
        match e {
            HttpExplainError::MissingToken => ExplainError::Unavailable(e.to_string()),
            HttpExplainError::ApiError { .. } | HttpExplainError::Http(_) => {
                ExplainError::RequestFailed(e.to_string())
            }
            HttpExplainError::Json(_) | HttpExplainError::MalformedResponse(_) => {
                ExplainError::MalformedResponse(e.to_string())
            }
        }
    }
}
