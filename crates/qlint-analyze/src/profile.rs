//! Structural analyzer: aggregate circuit profiles.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use qlint_ir::{Circuit, GateKind, QubitId};

/// Weight per gate in the complexity score.
const GATE_WEIGHT: u32 = 2;
/// Weight per entangling edge in the complexity score.
const EDGE_WEIGHT: u32 = 5;
/// Weight per qubit in the complexity score.
const QUBIT_WEIGHT: u32 = 3;

/// A two-qubit gate viewed as a directed link between qubit indices.
///
/// Direction is preserved — `(control, target)` in original order, never
/// canonicalized — because the connectivity check cares which operand is
/// which. A malformed two-qubit gate with no target still contributes an
/// edge with `target: None` so entanglement thresholds see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntanglingEdge {
    /// The entangling kind (CNOT, CZ, or SWAP).
    pub kind: GateKind,
    /// The control (first) operand.
    pub control: QubitId,
    /// The target (second) operand, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<QubitId>,
}

/// Read-only aggregate profile of a circuit.
///
/// Built by a single linear pass over the gate sequence; total on any
/// well-typed circuit. An empty circuit yields all-zero fields and an
/// empty qubit set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CircuitProfile {
    /// Total number of gates.
    pub gate_count: usize,
    /// Gate-kind histogram, keyed by canonical kind name.
    pub histogram: FxHashMap<String, usize>,
    /// Distinct qubit indices referenced anywhere in the circuit.
    pub qubits_used: BTreeSet<QubitId>,
    /// Entangling edges in application order.
    pub entangling_edges: Vec<EntanglingEdge>,
    /// Number of measurement gates.
    pub measurement_count: usize,
    /// Implicit qubit count: one past the largest referenced index,
    /// 0 for an empty circuit.
    pub qubit_count: u32,
    /// Heuristic complexity scalar:
    /// `2·gate_count + 5·edge_count + 3·qubit_count`.
    pub complexity_score: u32,
}

impl CircuitProfile {
    /// Build the profile of a circuit.
    pub fn of(circuit: &Circuit) -> Self {
        let mut profile = Self {
            gate_count: circuit.len(),
            qubit_count: circuit.num_qubits(),
            ..Self::default()
        };

        for gate in circuit {
            *profile
                .histogram
                .entry(gate.kind.name().to_string())
                .or_insert(0) += 1;

            profile.qubits_used.extend(gate.operands());

            if gate.kind.is_measure() {
                profile.measurement_count += 1;
            }

            if gate.kind.is_entangling() {
                profile.entangling_edges.push(EntanglingEdge {
                    kind: gate.kind.clone(),
                    control: gate.qubit,
                    target: gate.target,
                });
            }
        }

        profile.complexity_score = GATE_WEIGHT * profile.gate_count as u32
            + EDGE_WEIGHT * profile.entangling_edges.len() as u32
            + QUBIT_WEIGHT * profile.qubit_count;

        profile
    }

    /// Number of entangling edges.
    pub fn entangling_count(&self) -> usize {
        self.entangling_edges.len()
    }
}
