//! qlint circuit value types
//!
//! This crate provides the core data structures for describing quantum
//! circuits to the qlint analyzer: gate kinds, gates, circuits, and the
//! JSON wire format with its validation tier.
//!
//! # Overview
//!
//! A [`Circuit`] is an ordered, immutable sequence of [`Gate`] values;
//! order is application order and is semantically significant. The qubit
//! count is implicit — one past the largest index any gate references.
//! Circuits are never executed here, only inspected.
//!
//! # Example: Building a Bell pair
//!
//! ```rust
//! use qlint_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new();
//! circuit.h(QubitId(0)).cnot(QubitId(0), QubitId(1)).measure(QubitId(0));
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! ```
//!
//! # Example: Parsing the wire format
//!
//! ```rust
//! use qlint_ir::CircuitDescription;
//!
//! let json = r#"{"gates":[{"type":"H","qubit":0},{"type":"CNOT","qubit":0,"target":1}]}"#;
//! let description: CircuitDescription = serde_json::from_str(json)?;
//! let circuit = description.into_circuit()?;
//!
//! assert_eq!(circuit.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod circuit;
pub mod description;
pub mod error;
pub mod gate;
pub mod qubit;

pub use circuit::Circuit;
pub use description::{CircuitDescription, GateRecord};
pub use error::{IrError, IrResult};
pub use gate::{Gate, GateKind, VALID_NAMES};
pub use qubit::QubitId;
