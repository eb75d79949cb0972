//! qlint narrative explanation capability
//!
//! The analyzer's structured output is computed locally and never depends on
//! the network. The optional natural-language narrative is obtained through
//! the [`Explain`] trait defined here, so the scoring logic has zero
//! dependency on provider behavior and can be tested without any external
//! service.
//!
//! # Contract
//!
//! - `explain()` is called at most once per report, with a bounded timeout
//!   enforced by the caller.
//! - Any failure is advisory: the caller substitutes a deterministic
//!   fallback narrative and never fails the report.
//! - Implementations must be `Send + Sync`; one provider instance may serve
//!   arbitrarily many concurrent analyses.

pub mod error;

pub use error::{ExplainError, ExplainResult};

use async_trait::async_trait;

/// A provider of natural-language explanations.
#[async_trait]
pub trait Explain: Send + Sync {
    /// Get the name of this provider.
    fn name(&self) -> &str;

    /// Produce an explanation for the given prompt.
    async fn explain(&self, prompt: &str) -> ExplainResult<String>;
}

/// A deterministic local provider that echoes a fixed preamble.
///
/// Useful for offline runs and tests; the qlint analyzer itself falls back
/// to an internally generated narrative when no provider is configured, so
/// this type exists for callers that want the provider path exercised
/// without network access.
#[derive(Debug, Clone, Default)]
pub struct StaticExplainer {
    preamble: Option<String>,
}

impl StaticExplainer {
    /// Create a provider with the default preamble.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider with a custom preamble.
    pub fn with_preamble(preamble: impl Into<String>) -> Self {
        Self {
            preamble: Some(preamble.into()),
        }
    }
}

#[async_trait]
impl Explain for StaticExplainer {
    fn name(&self) -> &str {
        "static"
    }

    async fn explain(&self, prompt: &str) -> ExplainResult<String> {
        let preamble = self.preamble.as_deref().unwrap_or("Analysis summary");
        Ok(format!("{preamble}: {prompt}"))
    }
}
