//! Report model: findings, hints, and the debug report.

use serde::{Deserialize, Serialize};
use std::fmt;

use qlint_ir::QubitId;

use crate::profile::CircuitProfile;

/// Severity of a finding, totally ordered for scoring and prioritization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Cosmetic or efficiency concern.
    Low,
    /// Worth fixing before the circuit grows.
    Medium,
    /// Likely to produce wrong or meaningless results.
    High,
    /// The circuit cannot run as written.
    Critical,
}

impl Severity {
    /// Score penalty applied per finding of this severity.
    pub fn penalty(self) -> i32 {
        match self {
            Severity::Critical => 20,
            Severity::High => 15,
            Severity::Medium => 10,
            Severity::Low => 5,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        };
        f.write_str(name)
    }
}

/// Taxonomy of defects the rule checks can report.
///
/// The declaration order here is also the order in which findings appear in
/// a report: checks run in this fixed sequence so reports are reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    /// Unknown gate kinds and consecutive self-inverse duplicates.
    GateValidity,
    /// Missing targets and out-of-range qubit indices.
    Connectivity,
    /// Gate count beyond the configured maximum.
    Depth,
    /// No measurement anywhere in the circuit.
    Measurement,
    /// Entangling-edge count beyond the configured maximum.
    EntanglementDepth,
}

/// Where in the circuit a finding points.
///
/// Global findings (depth, measurement, entanglement depth) carry an empty
/// location. When `gate_index` is present it is a valid index into the
/// analyzed circuit at the time the finding was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Index of the implicated gate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate_index: Option<usize>,
    /// The implicated primary qubit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qubit: Option<QubitId>,
    /// The implicated target qubit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<QubitId>,
}

impl Location {
    /// A location pointing at a gate and its primary qubit.
    pub fn gate(gate_index: usize, qubit: QubitId) -> Self {
        Self {
            gate_index: Some(gate_index),
            qubit: Some(qubit),
            target: None,
        }
    }

    /// Attach the target qubit.
    #[must_use]
    pub fn with_target(mut self, target: QubitId) -> Self {
        self.target = Some(target);
        self
    }

    /// A location for circuit-wide findings.
    pub fn global() -> Self {
        Self::default()
    }
}

/// One detected defect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Which rule family reported this.
    pub category: FindingCategory,
    /// How bad it is.
    pub severity: Severity,
    /// Human-readable description of the defect.
    pub description: String,
    /// Where it was found.
    pub location: Location,
    /// What to consider doing about it.
    pub suggestion: String,
    /// One concrete remediation.
    pub fix: String,
}

/// Taxonomy of rewrite opportunities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintCategory {
    /// Adjacent duplicate gates that collapse into one.
    GateMerging,
    /// The whole circuit would benefit from a shortening pass.
    DepthReduction,
    /// Entangling-gate sequences worth reviewing.
    EntanglementSimplification,
}

/// One proposed rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationHint {
    /// What kind of rewrite this is.
    pub category: HintCategory,
    /// Human-readable description of the opportunity.
    pub description: String,
    /// Gate index range the hint applies to, inclusive on both ends.
    /// `None` for circuit-wide hints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<(usize, usize)>,
    /// Estimated magnitude of the savings.
    pub savings: String,
    /// Concrete action to take.
    pub action: String,
}

/// The analyzer's sole output: profile, findings, hints, leveled guidance,
/// optional narrative, and the 0–100 quality score.
///
/// A report is created fresh per analysis call and never mutated after
/// construction; ownership transfers entirely to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebugReport {
    /// Aggregate structural profile of the circuit.
    pub profile: CircuitProfile,
    /// Defects, in fixed check order.
    pub findings: Vec<Finding>,
    /// Rewrite opportunities, in fixed pass order.
    pub optimizations: Vec<OptimizationHint>,
    /// Leveled guidance lines.
    pub suggestions: Vec<String>,
    /// Natural-language narrative; a locally generated fallback when no
    /// external provider answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    /// Quality score, clamped to [0, 100].
    pub score: u8,
}

impl DebugReport {
    /// Check whether any finding is [`Severity::Critical`].
    pub fn has_critical(&self) -> bool {
        self.findings
            .iter()
            .any(|f| f.severity == Severity::Critical)
    }

    /// The structured fields without the narrative, for callers that need
    /// to compare two runs for idempotence.
    pub fn without_narrative(mut self) -> Self {
        self.narrative = None;
        self
    }
}
