//! Measurement presence check.

use qlint_ir::Circuit;

use crate::check::Check;
use crate::config::AnalyzerConfig;
use crate::profile::CircuitProfile;
use crate::report::{Finding, FindingCategory, Location, Severity};

/// Flags circuits with no measurement gate.
///
/// A circuit that never measures has no observable classical output. This
/// fires for the empty circuit too.
pub struct MeasurementPresence;

impl Check for MeasurementPresence {
    fn name(&self) -> &'static str {
        "measurement"
    }

    fn run(
        &self,
        _circuit: &Circuit,
        profile: &CircuitProfile,
        _config: &AnalyzerConfig,
    ) -> Vec<Finding> {
        if profile.measurement_count > 0 {
            return vec![];
        }

        vec![Finding {
            category: FindingCategory::Measurement,
            severity: Severity::Medium,
            description: "No measurement gates found".to_string(),
            location: Location::global(),
            suggestion: "Add measurement gates to observe results".to_string(),
            fix: "Add measurement gates to the qubits you want to observe".to_string(),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qlint_ir::QubitId;

    #[test]
    fn test_empty_circuit_flagged() {
        let circuit = Circuit::new();
        let profile = CircuitProfile::of(&circuit);
        let findings = MeasurementPresence.run(&circuit, &profile, &AnalyzerConfig::default());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Medium);
    }

    #[test]
    fn test_measured_circuit_clean() {
        let mut circuit = Circuit::new();
        circuit.h(QubitId(0)).measure(QubitId(0));
        let profile = CircuitProfile::of(&circuit);
        let findings = MeasurementPresence.run(&circuit, &profile, &AnalyzerConfig::default());
        assert!(findings.is_empty());
    }
}
