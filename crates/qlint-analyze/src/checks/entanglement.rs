//! Entanglement depth check.

use qlint_ir::Circuit;

use crate::check::Check;
use crate::config::AnalyzerConfig;
use crate::profile::CircuitProfile;
use crate::report::{Finding, FindingCategory, Location, Severity};

/// Flags circuits whose entangling-edge count exceeds the configured maximum.
pub struct EntanglementDepth;

impl Check for EntanglementDepth {
    fn name(&self) -> &'static str {
        "entanglement_depth"
    }

    fn run(
        &self,
        _circuit: &Circuit,
        profile: &CircuitProfile,
        config: &AnalyzerConfig,
    ) -> Vec<Finding> {
        let count = profile.entangling_count();
        if count <= config.max_entanglement {
            return vec![];
        }

        vec![Finding {
            category: FindingCategory::EntanglementDepth,
            severity: Severity::Low,
            description: format!("High entanglement depth ({count})"),
            location: Location::global(),
            suggestion: "Consider entanglement optimization".to_string(),
            fix: "Review entanglement patterns for optimization opportunities".to_string(),
        }]
    }
}
