//! Error types for the analysis crate.

use thiserror::Error;

/// Errors the analyzer entry point can return.
///
/// Structural validation is the only failure mode: semantic defects are
/// findings inside the report, and narrative failures are substituted, so
/// a caller always gets a complete report for structurally valid input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AnalyzeError {
    /// The circuit description failed structural validation.
    #[error(transparent)]
    InvalidCircuit(#[from] qlint_ir::IrError),
}

/// Result type for analysis operations.
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;
