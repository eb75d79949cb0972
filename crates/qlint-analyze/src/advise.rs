//! Advisor and scorer: leveled guidance, quality score, narrative text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::AnalyzerConfig;
use crate::profile::CircuitProfile;
use crate::report::{Finding, OptimizationHint, Severity};

/// Self-reported skill level of the user the report is addressed to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserLevel {
    /// New to quantum circuits.
    Beginner,
    /// Comfortable with the basics.
    #[default]
    Intermediate,
    /// Optimizing for real hardware.
    Advanced,
}

impl UserLevel {
    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            UserLevel::Beginner => "beginner",
            UserLevel::Intermediate => "intermediate",
            UserLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for UserLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UserLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(UserLevel::Beginner),
            "intermediate" => Ok(UserLevel::Intermediate),
            "advanced" => Ok(UserLevel::Advanced),
            other => Err(format!(
                "unknown user level '{other}' (expected beginner, intermediate, or advanced)"
            )),
        }
    }
}

/// Pedagogical guidance per level. These are static by design — the
/// circuit-specific material lives in the findings and hints.
fn level_suggestions(level: UserLevel) -> &'static [&'static str] {
    match level {
        UserLevel::Beginner => &[
            "Start with simple single-qubit gates (H, X, Y, Z)",
            "Use CNOT gates to create entanglement between qubits",
            "Always add measurement gates to see results",
            "Keep circuits simple and well-documented",
        ],
        UserLevel::Intermediate => &[
            "Consider circuit optimization for better performance",
            "Use appropriate entanglement patterns for your algorithm",
            "Implement error correction for complex circuits",
            "Test circuits with different input states",
        ],
        UserLevel::Advanced => &[
            "Implement advanced optimization techniques",
            "Consider noise mitigation strategies",
            "Use quantum error correction codes",
            "Optimize for specific hardware constraints",
        ],
    }
}

/// Assemble the suggestion list: the static leveled guidance, plus a
/// critical-errors line iff any finding is critical, plus an optimization
/// line iff any hint exists.
pub fn advise(
    findings: &[Finding],
    optimizations: &[OptimizationHint],
    level: UserLevel,
) -> Vec<String> {
    let mut suggestions: Vec<String> = level_suggestions(level)
        .iter()
        .map(|s| (*s).to_string())
        .collect();

    if findings.iter().any(|f| f.severity == Severity::Critical) {
        suggestions.push("Fix critical errors before running the circuit".to_string());
    }

    if !optimizations.is_empty() {
        suggestions
            .push("Apply available optimizations to improve circuit performance".to_string());
    }

    suggestions
}

/// Compute the 0–100 quality score.
///
/// Starts at 100; subtracts per finding by severity (critical −20, high
/// −15, medium −10, low −5); adds +5 per hint — a circuit with fixable
/// issues outscores one with unfixable structural errors of the same
/// count; subtracts a flat 10 when the complexity score crosses the
/// configured threshold; clamps to [0, 100]. Order-independent.
pub fn score(
    profile: &CircuitProfile,
    findings: &[Finding],
    optimizations: &[OptimizationHint],
    config: &AnalyzerConfig,
) -> u8 {
    let mut score: i32 = 100;

    for finding in findings {
        score -= finding.severity.penalty();
    }

    score += 5 * optimizations.len() as i32;

    if profile.complexity_score > config.complexity_penalty_threshold {
        score -= 10;
    }

    score.clamp(0, 100) as u8
}

/// Build the prompt handed to an explanation provider.
pub fn build_prompt(
    profile: &CircuitProfile,
    findings: &[Finding],
    optimizations: &[OptimizationHint],
    level: UserLevel,
) -> String {
    format!(
        "Explain the analysis of a quantum circuit with {} gates on {} qubits. \
         Errors found: {}. Optimizations available: {}. \
         Provide a clear, educational explanation for a {} user: summarize the \
         circuit's structure, explain the errors in simple terms, suggest \
         improvements, and encourage continued learning.",
        profile.gate_count,
        profile.qubit_count,
        findings.len(),
        optimizations.len(),
        level,
    )
}

/// Deterministic narrative used when no provider answered.
///
/// Interpolates the same structured data the provider would have seen, so
/// a report is always complete regardless of network behavior.
pub fn fallback_narrative(
    profile: &CircuitProfile,
    findings: &[Finding],
    optimizations: &[OptimizationHint],
    level: UserLevel,
) -> String {
    let issue_summary = if findings.is_empty() {
        "no issues".to_string()
    } else {
        let critical = findings
            .iter()
            .filter(|f| f.severity == Severity::Critical)
            .count();
        if critical > 0 {
            format!("{} issues ({critical} critical)", findings.len())
        } else {
            format!("{} issues", findings.len())
        }
    };

    let optimization_summary = match optimizations.len() {
        0 => "no rewrite opportunities".to_string(),
        1 => "1 rewrite opportunity".to_string(),
        n => format!("{n} rewrite opportunities"),
    };

    format!(
        "Analyzed a {}-gate circuit on {} qubit(s): {issue_summary}, \
         {optimization_summary}. Guidance is tuned for a {} user.",
        profile.gate_count, profile.qubit_count, level,
    )
}
