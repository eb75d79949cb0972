//! Optimization finder: peephole hints and global complexity warnings.

use tracing::debug;

use qlint_ir::Circuit;

use crate::config::AnalyzerConfig;
use crate::profile::CircuitProfile;
use crate::report::{HintCategory, OptimizationHint};

/// Heuristic target the depth-reduction hint aims for, in gates.
const DEPTH_REDUCTION_TARGET: usize = 10;

/// Scan for rewrite opportunities. Three passes, concatenated in order:
/// gate merging, depth reduction, entanglement simplification.
///
/// Gate merging is a literal window-of-two adjacency scan: only strictly
/// adjacent duplicates (same kind, same qubit, same target) are caught. It
/// does not look through intervening gates on other qubits and applies no
/// commutation reasoning.
pub fn find_optimizations(
    circuit: &Circuit,
    profile: &CircuitProfile,
    config: &AnalyzerConfig,
) -> Vec<OptimizationHint> {
    let mut hints = Vec::new();
    let gates = circuit.gates();

    for (i, pair) in gates.windows(2).enumerate() {
        let (current, next) = (&pair[0], &pair[1]);
        if current.kind == next.kind
            && current.qubit == next.qubit
            && current.target == next.target
        {
            hints.push(OptimizationHint {
                category: HintCategory::GateMerging,
                description: format!("Merge consecutive {} gates", current.kind),
                range: Some((i, i + 1)),
                savings: "1 gate reduction".to_string(),
                action: format!("Remove the gate at index {}", i + 1),
            });
        }
    }

    if profile.gate_count > config.optimization_threshold {
        hints.push(OptimizationHint {
            category: HintCategory::DepthReduction,
            description: "Optimize circuit depth".to_string(),
            range: None,
            savings: format!(
                "Potential {} gate reduction",
                profile.gate_count - DEPTH_REDUCTION_TARGET
            ),
            action: "Apply gate merging and circuit optimization".to_string(),
        });
    }

    if profile.entangling_count() > config.entanglement_hint_threshold {
        hints.push(OptimizationHint {
            category: HintCategory::EntanglementSimplification,
            description: "Optimize entanglement patterns".to_string(),
            range: None,
            savings: "Reduced entanglement complexity".to_string(),
            action: "Review and optimize CNOT/CZ gate sequences".to_string(),
        });
    }

    debug!(count = hints.len(), "optimization scan complete");
    hints
}
