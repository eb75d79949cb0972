//! Gate validity check.

use qlint_ir::{Circuit, GateKind, VALID_NAMES};

use crate::check::Check;
use crate::config::AnalyzerConfig;
use crate::profile::CircuitProfile;
use crate::report::{Finding, FindingCategory, Location, Severity};

/// Flags unknown gate kinds and consecutive self-inverse duplicates.
///
/// The two sub-rules are not exclusive: a gate can be reported for both.
/// A consecutive identical H/X/Y/Z pair on one qubit cancels to identity —
/// it is reported here as a finding (likely unintended duplication) and
/// again by the optimization finder as a gate-merging hint.
pub struct GateValidity;

impl Check for GateValidity {
    fn name(&self) -> &'static str {
        "gate_validity"
    }

    fn run(
        &self,
        circuit: &Circuit,
        _profile: &CircuitProfile,
        _config: &AnalyzerConfig,
    ) -> Vec<Finding> {
        let mut findings = Vec::new();
        let gates = circuit.gates();

        for (index, gate) in gates.iter().enumerate() {
            if let GateKind::Unknown(name) = &gate.kind {
                findings.push(Finding {
                    category: FindingCategory::GateValidity,
                    severity: Severity::High,
                    description: format!("Invalid gate type: {name}"),
                    location: Location::gate(index, gate.qubit),
                    suggestion: format!("Use one of: {}", VALID_NAMES.join(", ")),
                    fix: format!("Replace {name} with a valid gate"),
                });
            }

            if index > 0 {
                let prev = &gates[index - 1];
                if prev.kind == gate.kind
                    && prev.qubit == gate.qubit
                    && gate.kind.is_self_inverse()
                {
                    findings.push(Finding {
                        category: FindingCategory::GateValidity,
                        severity: Severity::Medium,
                        description: format!(
                            "Consecutive {} gates on qubit {}",
                            gate.kind, gate.qubit
                        ),
                        location: Location::gate(index, gate.qubit),
                        suggestion: "These gates cancel and can be removed".to_string(),
                        fix: format!("Remove one of the consecutive {} gates", gate.kind),
                    });
                }
            }
        }

        findings
    }
}
