//! qlint circuit analysis
//!
//! A static analysis and optimization advisor for small quantum-gate
//! circuits. The analyzer inspects a circuit's structure — it never
//! executes it — and produces a [`DebugReport`]: an aggregate profile,
//! classified findings, peephole optimization hints, leveled guidance, and
//! a 0–100 quality score.
//!
//! # Stages
//!
//! Four ordered stages, each a pure function of the circuit (and, for the
//! later two, of the stage before it):
//!
//! 1. **Structural analyzer** — [`CircuitProfile::of`] builds the gate
//!    histogram, qubit usage set, entangling edges, and complexity score.
//! 2. **Error detector** — [`detect`] runs the fixed rule battery
//!    (gate validity, connectivity, depth, measurement, entanglement
//!    depth) in deterministic order.
//! 3. **Optimization finder** — [`find_optimizations`] scans for adjacent
//!    duplicates and global complexity warnings.
//! 4. **Advisor/scorer** — [`advise`](advise()) and [`score`](score())
//!    turn the findings into prioritized guidance and a clamped score.
//!
//! [`Debugger`] wires the stages together and optionally asks an external
//! [`Explain`](qlint_explain::Explain) provider for a narrative; that call
//! fails soft and never affects the structured fields.
//!
//! # Example
//!
//! ```rust
//! use qlint_analyze::{Debugger, UserLevel};
//! use qlint_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new();
//! circuit.h(QubitId(0)).cnot(QubitId(0), QubitId(1));
//!
//! let report = Debugger::new().report(&circuit, UserLevel::Beginner);
//!
//! // The Bell pair is clean except for the missing measurement.
//! assert_eq!(report.score, 90);
//! assert_eq!(report.findings.len(), 1);
//! ```

pub mod advise;
pub mod check;
pub mod checks;
pub mod config;
pub mod debugger;
pub mod error;
pub mod history;
pub mod optimize;
pub mod profile;
pub mod report;

pub use advise::{UserLevel, advise, build_prompt, fallback_narrative, score};
pub use check::{Check, detect};
pub use config::AnalyzerConfig;
pub use debugger::Debugger;
pub use error::{AnalyzeError, AnalyzeResult};
pub use history::{DebugHistory, HistoryEntry};
pub use optimize::find_optimizations;
pub use profile::{CircuitProfile, EntanglingEdge};
pub use report::{
    DebugReport, Finding, FindingCategory, HintCategory, Location, OptimizationHint, Severity,
};
