//! Check trait and the fixed-order detector.

use tracing::debug;

use qlint_ir::Circuit;

use crate::checks::{
    Connectivity, DepthLimit, EntanglementDepth, GateValidity, MeasurementPresence,
};
use crate::config::AnalyzerConfig;
use crate::profile::CircuitProfile;
use crate::report::Finding;

/// A rule check over an immutable circuit and its profile.
///
/// Checks are pure: they read the circuit and profile, never modify them,
/// and never fail on structurally well-formed input. Each is independently
/// callable; [`detect`] runs the stock battery in its fixed order.
pub trait Check: Send + Sync {
    /// Get the name of this check.
    fn name(&self) -> &'static str;

    /// Run the check, returning zero or more findings.
    fn run(
        &self,
        circuit: &Circuit,
        profile: &CircuitProfile,
        config: &AnalyzerConfig,
    ) -> Vec<Finding>;
}

/// Run the stock rule battery in its fixed, deterministic order:
/// gate validity, connectivity, depth, measurement, entanglement depth.
///
/// The order is part of the output contract — reports are reproducible and
/// the advisor sees critical items grouped the same way every run.
pub fn detect(
    circuit: &Circuit,
    profile: &CircuitProfile,
    config: &AnalyzerConfig,
) -> Vec<Finding> {
    let checks: [&dyn Check; 5] = [
        &GateValidity,
        &Connectivity,
        &DepthLimit,
        &MeasurementPresence,
        &EntanglementDepth,
    ];

    let mut findings = Vec::new();
    for check in checks {
        let found = check.run(circuit, profile, config);
        debug!(check = check.name(), count = found.len(), "check complete");
        findings.extend(found);
    }
    findings
}
