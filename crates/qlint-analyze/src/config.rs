//! Analyzer thresholds.

use serde::{Deserialize, Serialize};

/// Tunable thresholds for the rule checks and the optimization finder.
///
/// The defaults reproduce the advisor's stock rule set. All thresholds are
/// heuristic scalars, not calibrated cost models: the depth checks count
/// gates, not critical-path depth, so gates on independent qubits weigh the
/// same as gates in a dependent chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Gate count above which the depth check reports a finding.
    pub max_depth: usize,
    /// Gate count above which the optimization finder suggests a depth
    /// reduction. Deliberately lower than `max_depth` so the hint fires
    /// before the finding does.
    pub optimization_threshold: usize,
    /// Entangling-edge count above which the entanglement-depth check
    /// reports a finding.
    pub max_entanglement: usize,
    /// Entangling-edge count above which the optimization finder suggests
    /// reviewing CNOT/CZ sequences.
    pub entanglement_hint_threshold: usize,
    /// Complexity score above which the scorer applies a flat penalty.
    pub complexity_penalty_threshold: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_depth: 20,
            optimization_threshold: 15,
            max_entanglement: 5,
            entanglement_hint_threshold: 3,
            complexity_penalty_threshold: 50,
        }
    }
}

impl AnalyzerConfig {
    /// Create a config with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the depth-finding threshold.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the depth-hint threshold.
    #[must_use]
    pub fn with_optimization_threshold(mut self, threshold: usize) -> Self {
        self.optimization_threshold = threshold;
        self
    }

    /// Set the entanglement-finding threshold.
    #[must_use]
    pub fn with_max_entanglement(mut self, max_entanglement: usize) -> Self {
        self.max_entanglement = max_entanglement;
        self
    }
}
