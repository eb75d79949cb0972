//! Error types for the IR crate.

use thiserror::Error;

/// Errors raised while validating a circuit description.
///
/// These cover the structural tier only: a payload that is well-typed but
/// semantically defective (unknown gate kind, missing target on a two-qubit
/// kind, out-of-range index) passes validation and surfaces as findings in
/// the analysis report instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A qubit or target index is negative.
    #[error("gate {index}: {field} index {value} is negative")]
    NegativeIndex {
        /// Index of the offending gate in the description.
        index: usize,
        /// Which field carried the value (`qubit` or `target`).
        field: &'static str,
        /// The offending value.
        value: i64,
    },

    /// A qubit or target index exceeds the representable range.
    #[error("gate {index}: {field} index {value} exceeds the supported range")]
    IndexOverflow {
        /// Index of the offending gate in the description.
        index: usize,
        /// Which field carried the value (`qubit` or `target`).
        field: &'static str,
        /// The offending value.
        value: i64,
    },

    /// Control and target refer to the same qubit.
    #[error("gate {index}: control and target refer to the same qubit q{qubit}")]
    DuplicateQubit {
        /// Index of the offending gate in the description.
        index: usize,
        /// The duplicated qubit index.
        qubit: u32,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
