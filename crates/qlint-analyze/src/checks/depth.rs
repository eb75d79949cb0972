//! Circuit depth check.

use qlint_ir::Circuit;

use crate::check::Check;
use crate::config::AnalyzerConfig;
use crate::profile::CircuitProfile;
use crate::report::{Finding, FindingCategory, Location, Severity};

/// Flags circuits whose gate count exceeds the configured maximum.
///
/// This is a scalar threshold on total gate count, not a critical-path
/// depth computation: gates on independent qubits count the same as gates
/// in a dependent chain.
pub struct DepthLimit;

impl Check for DepthLimit {
    fn name(&self) -> &'static str {
        "depth"
    }

    fn run(
        &self,
        _circuit: &Circuit,
        profile: &CircuitProfile,
        config: &AnalyzerConfig,
    ) -> Vec<Finding> {
        if profile.gate_count <= config.max_depth {
            return vec![];
        }

        vec![Finding {
            category: FindingCategory::Depth,
            severity: Severity::Medium,
            description: format!(
                "Circuit depth ({}) exceeds recommended maximum ({})",
                profile.gate_count, config.max_depth
            ),
            location: Location::global(),
            suggestion: "Consider circuit optimization".to_string(),
            fix: "Reduce circuit depth through gate merging and optimization".to_string(),
        }]
    }
}
