//! Gate kinds and gate value objects.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::qubit::QubitId;

/// The kind of a gate operation.
///
/// This is a closed set: every rule check matches on it exhaustively, so
/// adding a kind is a compile-checked change in every consumer. A wire
/// `type` that is not recognized is preserved in the [`GateKind::Unknown`]
/// arm — it survives input validation and is reported as a finding by the
/// gate-validity check, never as a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Controlled-NOT gate.
    Cnot,
    /// Controlled-Z gate.
    Cz,
    /// SWAP gate.
    Swap,
    /// T gate (fourth root of Z).
    T,
    /// S gate (sqrt(Z)).
    S,
    /// Rotation around X axis.
    Rx,
    /// Rotation around Y axis.
    Ry,
    /// Rotation around Z axis.
    Rz,
    /// Measurement in the computational basis.
    Measure,
    /// An unrecognized gate name, preserved verbatim from the wire format.
    Unknown(String),
}

/// Canonical names of the valid gate set, in declaration order.
pub const VALID_NAMES: [&str; 13] = [
    "H", "X", "Y", "Z", "CNOT", "CZ", "SWAP", "T", "S", "RX", "RY", "RZ", "MEASURE",
];

impl GateKind {
    /// Parse a gate name from the wire format.
    ///
    /// Matching is case-insensitive and `M` is accepted as an alias for
    /// `MEASURE`. Unrecognized names are preserved in [`GateKind::Unknown`].
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "H" => GateKind::H,
            "X" => GateKind::X,
            "Y" => GateKind::Y,
            "Z" => GateKind::Z,
            "CNOT" => GateKind::Cnot,
            "CZ" => GateKind::Cz,
            "SWAP" => GateKind::Swap,
            "T" => GateKind::T,
            "S" => GateKind::S,
            "RX" => GateKind::Rx,
            "RY" => GateKind::Ry,
            "RZ" => GateKind::Rz,
            "MEASURE" | "M" => GateKind::Measure,
            _ => GateKind::Unknown(name.to_string()),
        }
    }

    /// Get the canonical name of this kind.
    ///
    /// For [`GateKind::Unknown`] this is the raw wire name.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            GateKind::H => "H",
            GateKind::X => "X",
            GateKind::Y => "Y",
            GateKind::Z => "Z",
            GateKind::Cnot => "CNOT",
            GateKind::Cz => "CZ",
            GateKind::Swap => "SWAP",
            GateKind::T => "T",
            GateKind::S => "S",
            GateKind::Rx => "RX",
            GateKind::Ry => "RY",
            GateKind::Rz => "RZ",
            GateKind::Measure => "MEASURE",
            GateKind::Unknown(name) => name,
        }
    }

    /// Check if this kind is a member of the valid gate set.
    #[inline]
    pub fn is_known(&self) -> bool {
        !matches!(self, GateKind::Unknown(_))
    }

    /// Check if this is a two-qubit entangling kind (CNOT, CZ, SWAP).
    #[inline]
    pub fn is_entangling(&self) -> bool {
        matches!(self, GateKind::Cnot | GateKind::Cz | GateKind::Swap)
    }

    /// Check if this kind is self-inverse (a consecutive pair cancels
    /// to identity). Only the single-qubit Paulis and Hadamard qualify
    /// for the consecutive-duplicate rule.
    #[inline]
    pub fn is_self_inverse(&self) -> bool {
        matches!(
            self,
            GateKind::H | GateKind::X | GateKind::Y | GateKind::Z
        )
    }

    /// Check if this is a measurement.
    #[inline]
    pub fn is_measure(&self) -> bool {
        matches!(self, GateKind::Measure)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for GateKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for GateKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(GateKind::from_name(&name))
    }
}

/// An atomic gate operation: a kind, a primary/control qubit, and an
/// optional target for two-qubit kinds.
///
/// Gates are immutable value objects; a [`Circuit`](crate::Circuit) owns an
/// ordered sequence of them, and order is semantically significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    /// The kind of gate.
    pub kind: GateKind,
    /// The primary (or control) qubit.
    pub qubit: QubitId,
    /// The target qubit, for two-qubit kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<QubitId>,
}

impl Gate {
    /// Create a single-qubit gate.
    pub fn single(kind: GateKind, qubit: QubitId) -> Self {
        Self {
            kind,
            qubit,
            target: None,
        }
    }

    /// Create a two-qubit gate.
    pub fn two(kind: GateKind, qubit: QubitId, target: QubitId) -> Self {
        Self {
            kind,
            qubit,
            target: Some(target),
        }
    }

    /// The largest qubit index this gate references.
    pub fn max_index(&self) -> u32 {
        match self.target {
            Some(target) => self.qubit.0.max(target.0),
            None => self.qubit.0,
        }
    }

    /// Iterate over the qubit indices this gate references.
    pub fn operands(&self) -> impl Iterator<Item = QubitId> + '_ {
        std::iter::once(self.qubit).chain(self.target)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Some(target) => write!(f, "{}({}, {})", self.kind, self.qubit, target),
            None => write!(f, "{}({})", self.kind, self.qubit),
        }
    }
}
