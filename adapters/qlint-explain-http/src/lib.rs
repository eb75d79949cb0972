//! qlint adapter for HTTP completion endpoints
//!
//! Implements the [`Explain`] capability on top of any service that accepts
//! `POST {prompt, max_tokens, temperature}` and answers `{completion}`.
//! The analyzer treats every failure here as advisory, so this adapter
//! reports errors faithfully and leaves the fallback decision to the caller.
//!
//! # Authentication
//!
//! If the endpoint requires a token, set it in the `QLINT_EXPLAIN_TOKEN`
//! environment variable:
//!
//! ```bash
//! export QLINT_EXPLAIN_TOKEN="your-token"
//! ```
//!
//! Unauthenticated endpoints (local model servers) work without it.
//!
//! # Example
//!
//! ```rust,no_run
//! use qlint_explain::Explain;
//! use qlint_explain_http::HttpExplainer;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let explainer = HttpExplainer::new("http://localhost:8080/v1/complete")?;
//! let text = explainer.explain("2 gates, 1 finding").await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;

pub use api::{ExplainClient, TOKEN_ENV};
pub use error::{HttpExplainError, HttpExplainResult};

use async_trait::async_trait;

use qlint_explain::{Explain, ExplainResult};

/// An [`Explain`] provider backed by an HTTP completion endpoint.
#[derive(Debug)]
pub struct HttpExplainer {
    client: ExplainClient,
}

impl HttpExplainer {
    /// Create an explainer for the given endpoint.
    ///
    /// Reads `QLINT_EXPLAIN_TOKEN` for the optional Bearer token.
    pub fn new(endpoint: impl Into<String>) -> HttpExplainResult<Self> {
        Ok(Self {
            client: ExplainClient::new(endpoint)?,
        })
    }

    /// Create an explainer with an explicit token (or none).
    pub fn with_token(
        endpoint: impl Into<String>,
        token: Option<String>,
    ) -> HttpExplainResult<Self> {
        Ok(Self {
            client: ExplainClient::with_token(endpoint, token)?,
        })
    }

    /// The endpoint this explainer targets.
    pub fn endpoint(&self) -> &str {
        self.client.endpoint()
    }
}

#[async_trait]
impl Explain for HttpExplainer {
    fn name(&self) -> &str {
        "http"
    }

    async fn explain(&self, prompt: &str) -> ExplainResult<String> {
        let completion = self.client.complete(prompt).await?;
        Ok(completion)
    }
}
