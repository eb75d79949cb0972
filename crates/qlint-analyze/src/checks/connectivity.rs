//! Qubit connectivity check.

use qlint_ir::{Circuit, Gate};

use crate::check::Check;
use crate::config::AnalyzerConfig;
use crate::profile::CircuitProfile;
use crate::report::{Finding, FindingCategory, Location, Severity};

/// Flags two-qubit gates with no target and out-of-range qubit indices.
///
/// The out-of-range bound is self-referential: a gate's operands are
/// compared against the maximum index used by *other* gates, not against an
/// externally declared qubit count. A single-gate circuit is therefore never
/// flagged, and a circuit whose gates all share one high index is
/// self-consistent. At most one out-of-range finding is emitted per gate.
pub struct Connectivity;

impl Check for Connectivity {
    fn name(&self) -> &'static str {
        "connectivity"
    }

    fn run(
        &self,
        circuit: &Circuit,
        _profile: &CircuitProfile,
        _config: &AnalyzerConfig,
    ) -> Vec<Finding> {
        let mut findings = Vec::new();
        let gates = circuit.gates();
        let bounds = elsewhere_max(gates);

        for (index, gate) in gates.iter().enumerate() {
            if gate.kind.is_entangling() && gate.target.is_none() {
                findings.push(Finding {
                    category: FindingCategory::Connectivity,
                    severity: Severity::Critical,
                    description: format!("{} gate missing target qubit", gate.kind),
                    location: Location::gate(index, gate.qubit),
                    suggestion: "Specify a target qubit for two-qubit gates".to_string(),
                    fix: format!("Add a target qubit to the {} gate", gate.kind),
                });
            }

            let Some(bound) = bounds[index] else {
                continue;
            };
            if gate.operands().any(|q| q.0 > bound) {
                let mut location = Location::gate(index, gate.qubit);
                if let Some(target) = gate.target {
                    location = location.with_target(target);
                }
                findings.push(Finding {
                    category: FindingCategory::Connectivity,
                    severity: Severity::High,
                    description: "Qubit index out of range".to_string(),
                    location,
                    suggestion: format!(
                        "No other gate references an index above q{bound}"
                    ),
                    fix: "Adjust qubit indices to the range the circuit uses".to_string(),
                });
            }
        }

        findings
    }
}

/// For each gate, the largest qubit index referenced by any *other* gate.
/// `None` when there are no other gates. Computed with prefix/suffix maxima
/// in one pass each.
fn elsewhere_max(gates: &[Gate]) -> Vec<Option<u32>> {
    let n = gates.len();
    let mut prefix: Vec<Option<u32>> = vec![None; n];
    let mut running: Option<u32> = None;
    for (i, gate) in gates.iter().enumerate() {
        prefix[i] = running;
        running = Some(running.map_or(gate.max_index(), |m| m.max(gate.max_index())));
    }

    let mut bounds = vec![None; n];
    let mut suffix: Option<u32> = None;
    for i in (0..n).rev() {
        bounds[i] = match (prefix[i], suffix) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        };
        let max = gates[i].max_index();
        suffix = Some(suffix.map_or(max, |m| m.max(max)));
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use qlint_ir::{Gate, GateKind, QubitId};

    fn run(circuit: &Circuit) -> Vec<Finding> {
        let profile = CircuitProfile::of(circuit);
        Connectivity.run(circuit, &profile, &AnalyzerConfig::default())
    }

    #[test]
    fn test_missing_target_is_critical() {
        let mut circuit = Circuit::new();
        circuit.push(Gate::single(GateKind::Cnot, QubitId(0)));

        let findings = run(&circuit);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Critical);
        assert!(findings[0].description.contains("missing target"));
    }

    #[test]
    fn test_single_gate_never_out_of_range() {
        // q5 alone: no other gate exists to define a bound.
        let mut circuit = Circuit::new();
        circuit.h(QubitId(5));
        assert!(run(&circuit).is_empty());
    }

    #[test]
    fn test_uniform_high_index_self_consistent() {
        // Every gate on q7: each gate's bound is 7, nothing is flagged.
        let mut circuit = Circuit::new();
        circuit.h(QubitId(7)).x(QubitId(7)).z(QubitId(7));
        assert!(run(&circuit).is_empty());
    }

    #[test]
    fn test_outlier_index_flagged_once() {
        // Gates on {0,1} plus one gate on q7: only the outlier is flagged.
        let mut circuit = Circuit::new();
        circuit
            .h(QubitId(0))
            .cnot(QubitId(0), QubitId(1))
            .x(QubitId(7));

        let findings = run(&circuit);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::High);
        assert_eq!(findings[0].location.gate_index, Some(2));
        assert!(findings[0].description.contains("out of range"));
    }

    #[test]
    fn test_two_outliers_cover_each_other() {
        // q7 and q9: the q9 gate exceeds the bound set by q7; the q7 gate
        // does not exceed the bound set by q9.
        let mut circuit = Circuit::new();
        circuit.h(QubitId(0)).x(QubitId(7)).y(QubitId(9));

        let findings = run(&circuit);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].location.gate_index, Some(2));
    }

    #[test]
    fn test_out_of_range_target_flagged() {
        let mut circuit = Circuit::new();
        circuit
            .h(QubitId(0))
            .h(QubitId(1))
            .cnot(QubitId(0), QubitId(6));

        let findings = run(&circuit);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].location.target, Some(QubitId(6)));
    }

    #[test]
    fn test_valid_two_qubit_gates_clean() {
        let mut circuit = Circuit::new();
        circuit
            .h(QubitId(0))
            .cnot(QubitId(0), QubitId(1))
            .cz(QubitId(1), QubitId(0));
        assert!(run(&circuit).is_empty());
    }
}
