//! Circuit value type.

use serde::{Deserialize, Serialize};

use crate::gate::{Gate, GateKind};
use crate::qubit::QubitId;

/// An ordered sequence of gates.
///
/// A circuit is a value: the analyzer never mutates it, and the qubit count
/// is implicit — one past the largest index any gate references. The builder
/// methods are conveniences for constructing circuits in tests and demos.
///
/// # Example
///
/// ```rust
/// use qlint_ir::{Circuit, QubitId};
///
/// let mut circuit = Circuit::new();
/// circuit.h(QubitId(0)).cnot(QubitId(0), QubitId(1)).measure(QubitId(0));
///
/// assert_eq!(circuit.len(), 3);
/// assert_eq!(circuit.num_qubits(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuit {
    gates: Vec<Gate>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a circuit from an existing gate sequence.
    pub fn from_gates(gates: Vec<Gate>) -> Self {
        Self { gates }
    }

    /// Append a gate.
    pub fn push(&mut self, gate: Gate) -> &mut Self {
        self.gates.push(gate);
        self
    }

    /// The gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check if the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Implicit qubit count: one past the largest referenced index,
    /// or 0 for an empty circuit.
    pub fn num_qubits(&self) -> u32 {
        self.gates
            .iter()
            .map(|g| g.max_index() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Iterate over the gates.
    pub fn iter(&self) -> impl Iterator<Item = &Gate> {
        self.gates.iter()
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> &mut Self {
        self.push(Gate::single(GateKind::H, qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> &mut Self {
        self.push(Gate::single(GateKind::X, qubit))
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> &mut Self {
        self.push(Gate::single(GateKind::Y, qubit))
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> &mut Self {
        self.push(Gate::single(GateKind::Z, qubit))
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> &mut Self {
        self.push(Gate::single(GateKind::S, qubit))
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> &mut Self {
        self.push(Gate::single(GateKind::T, qubit))
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, qubit: QubitId) -> &mut Self {
        self.push(Gate::single(GateKind::Rx, qubit))
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, qubit: QubitId) -> &mut Self {
        self.push(Gate::single(GateKind::Ry, qubit))
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, qubit: QubitId) -> &mut Self {
        self.push(Gate::single(GateKind::Rz, qubit))
    }

    /// Measure a qubit in the computational basis.
    pub fn measure(&mut self, qubit: QubitId) -> &mut Self {
        self.push(Gate::single(GateKind::Measure, qubit))
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT gate.
    pub fn cnot(&mut self, control: QubitId, target: QubitId) -> &mut Self {
        self.push(Gate::two(GateKind::Cnot, control, target))
    }

    /// Apply controlled-Z gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> &mut Self {
        self.push(Gate::two(GateKind::Cz, control, target))
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, a: QubitId, b: QubitId) -> &mut Self {
        self.push(Gate::two(GateKind::Swap, a, b))
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Gate;
    type IntoIter = std::slice::Iter<'a, Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_circuit() {
        let circuit = Circuit::new();
        assert!(circuit.is_empty());
        assert_eq!(circuit.len(), 0);
        assert_eq!(circuit.num_qubits(), 0);
    }

    #[test]
    fn test_bell_pair() {
        let mut circuit = Circuit::new();
        circuit.h(QubitId(0)).cnot(QubitId(0), QubitId(1));

        assert_eq!(circuit.len(), 2);
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.gates()[1].kind, GateKind::Cnot);
        assert_eq!(circuit.gates()[1].target, Some(QubitId(1)));
    }

    #[test]
    fn test_num_qubits_sparse_indices() {
        // A lone gate on q5 implies 6 qubits.
        let mut circuit = Circuit::new();
        circuit.h(QubitId(5));
        assert_eq!(circuit.num_qubits(), 6);
    }
}
