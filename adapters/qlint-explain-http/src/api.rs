//! Completion endpoint REST client.
//!
//! Speaks the minimal JSON completion protocol: POST a prompt, read back a
//! `completion` string. Authentication is an optional static Bearer token
//! read from `QLINT_EXPLAIN_TOKEN`.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{HttpExplainError, HttpExplainResult};

/// Environment variable holding the Bearer token, if the endpoint needs one.
pub const TOKEN_ENV: &str = "QLINT_EXPLAIN_TOKEN";

/// Token budget sent with every completion request.
const MAX_TOKENS: u32 = 800;

/// Sampling temperature sent with every completion request.
const TEMPERATURE: f64 = 0.7;

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    prompt: &'a str,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    completion: String,
}

/// Completion endpoint REST client.
pub struct ExplainClient {
    /// HTTP client with timeouts configured.
    client: Client,
    /// Full completion endpoint URL.
    endpoint: String,
    /// Optional Bearer token.
    token: Option<String>,
}

impl std::fmt::Debug for ExplainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExplainClient")
            .field("endpoint", &self.endpoint)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl ExplainClient {
    /// Create a client for the given endpoint.
    ///
    /// Reads the token from `QLINT_EXPLAIN_TOKEN` if set; endpoints that do
    /// not authenticate work without it.
    pub fn new(endpoint: impl Into<String>) -> HttpExplainResult<Self> {
        let token = std::env::var(TOKEN_ENV).ok().filter(|t| !t.is_empty());
        Self::with_token(endpoint, token)
    }

    /// Create a client with an explicit token (or none).
    pub fn with_token(
        endpoint: impl Into<String>,
        token: Option<String>,
    ) -> HttpExplainResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(HttpExplainError::Http)?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// The endpoint this client targets.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit a prompt and return the completion text.
    #[instrument(skip(self, prompt), fields(endpoint = %self.endpoint))]
    pub async fn complete(&self, prompt: &str) -> HttpExplainResult<String> {
        let body = CompletionRequest {
            prompt,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };
        debug!("POST {}", self.endpoint);

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(self.status_error(status, message));
        }

        let parsed: CompletionResponse = resp.json().await?;
        if parsed.completion.trim().is_empty() {
            return Err(HttpExplainError::MalformedResponse(
                "empty completion field".to_string(),
            ));
        }
        Ok(parsed.completion)
    }

    fn status_error(&self, status: StatusCode, message: String) -> HttpExplainError {
        if status == StatusCode::UNAUTHORIZED && self.token.is_none() {
            return HttpExplainError::MissingToken;
        }
        HttpExplainError::ApiError {
            status: status.as_u16(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trailing_slash_stripped() {
        let client = ExplainClient::with_token("http://localhost:8080/v1/complete/", None).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8080/v1/complete");
    }

    #[test]
    fn test_debug_redacts_token() {
        let client =
            ExplainClient::with_token("http://localhost:8080", Some("secret".to_string())).unwrap();
        let rendered = format!("{client:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("REDACTED"));
    }

    #[test]
    fn test_request_body_shape() {
        let body = CompletionRequest {
            prompt: "2 gates",
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["prompt"], "2 gates");
        assert_eq!(json["max_tokens"], 800);
        assert_eq!(json["temperature"], 0.7);
    }
}
