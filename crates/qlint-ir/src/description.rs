//! Wire format for circuit descriptions.
//!
//! A [`CircuitDescription`] is the plain structured record a caller submits
//! for analysis: `{ "gates": [ { "type": "H", "qubit": 0, "target": 1 } ] }`.
//! Converting it into a [`Circuit`] performs the structural validation tier:
//! indices must be non-negative and a present target must differ from the
//! control. Everything else — unknown gate names, missing targets on
//! two-qubit kinds, out-of-range indices — deliberately passes through so
//! the analysis checks can report it as findings.

use serde::{Deserialize, Serialize};

use crate::circuit::Circuit;
use crate::error::{IrError, IrResult};
use crate::gate::{Gate, GateKind};
use crate::qubit::QubitId;

/// One gate record in the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateRecord {
    /// Gate name, e.g. `"H"` or `"CNOT"`. Unrecognized names are accepted.
    #[serde(rename = "type")]
    pub kind: String,
    /// Primary (control) qubit index.
    pub qubit: i64,
    /// Target qubit index for two-qubit kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<i64>,
}

/// A circuit description as submitted by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitDescription {
    /// The gate records in application order.
    pub gates: Vec<GateRecord>,
}

impl CircuitDescription {
    /// Create an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the description and convert it into a [`Circuit`].
    ///
    /// Fails fast on the first structural violation, identifying the
    /// offending gate index. The circuit is never partially built.
    pub fn into_circuit(self) -> IrResult<Circuit> {
        let mut gates = Vec::with_capacity(self.gates.len());

        for (index, record) in self.gates.into_iter().enumerate() {
            let qubit = check_index(index, "qubit", record.qubit)?;
            let target = match record.target {
                Some(value) => {
                    let target = check_index(index, "target", value)?;
                    if target == qubit {
                        return Err(IrError::DuplicateQubit {
                            index,
                            qubit: qubit.0,
                        });
                    }
                    Some(target)
                }
                None => None,
            };

            gates.push(Gate {
                kind: GateKind::from_name(&record.kind),
                qubit,
                target,
            });
        }

        Ok(Circuit::from_gates(gates))
    }
}

impl From<&Circuit> for CircuitDescription {
    fn from(circuit: &Circuit) -> Self {
        Self {
            gates: circuit
                .iter()
                .map(|gate| GateRecord {
                    kind: gate.kind.name().to_string(),
                    qubit: i64::from(gate.qubit.0),
                    target: gate.target.map(|t| i64::from(t.0)),
                })
                .collect(),
        }
    }
}

fn check_index(index: usize, field: &'static str, value: i64) -> IrResult<QubitId> {
    if value < 0 {
        return Err(IrError::NegativeIndex {
            index,
            field,
            value,
        });
    }
    u32::try_from(value)
        .map(QubitId)
        .map_err(|_| IrError::IndexOverflow {
            index,
            field,
            value,
        })
}
