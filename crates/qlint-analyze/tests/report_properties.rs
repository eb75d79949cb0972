//! Integration tests for the report contract: fixed finding order, score
//! bounds and clamping, and the canonical small-circuit scenarios.

use proptest::prelude::*;

use qlint_analyze::{
    AnalyzerConfig, Debugger, FindingCategory, HintCategory, Severity, UserLevel,
};
use qlint_ir::{Circuit, CircuitDescription, Gate, GateKind, GateRecord, QubitId};

fn record(kind: &str, qubit: i64, target: Option<i64>) -> GateRecord {
    GateRecord {
        kind: kind.to_string(),
        qubit,
        target,
    }
}

fn category_rank(category: FindingCategory) -> u8 {
    match category {
        FindingCategory::GateValidity => 0,
        FindingCategory::Connectivity => 1,
        FindingCategory::Depth => 2,
        FindingCategory::Measurement => 3,
        FindingCategory::EntanglementDepth => 4,
    }
}

// ============================================================================
// Canonical scenarios
// ============================================================================

#[test]
fn empty_circuit_scores_ninety() {
    let report = Debugger::new().report(&Circuit::new(), UserLevel::Beginner);

    assert_eq!(report.profile.gate_count, 0);
    assert_eq!(report.profile.qubit_count, 0);
    assert!(report.profile.qubits_used.is_empty());

    // Exactly one finding: the missing measurement.
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].category, FindingCategory::Measurement);
    assert_eq!(report.findings[0].severity, Severity::Medium);
    assert!(report.optimizations.is_empty());
    assert_eq!(report.score, 90);
}

#[test]
fn bell_pair_scores_ninety() {
    let mut circuit = Circuit::new();
    circuit.h(QubitId(0)).cnot(QubitId(0), QubitId(1));

    let report = Debugger::new().report(&circuit, UserLevel::Intermediate);

    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].category, FindingCategory::Measurement);
    assert_eq!(report.findings[0].severity, Severity::Medium);
    assert_eq!(report.score, 90);
}

#[test]
fn measured_bell_pair_is_clean() {
    let mut circuit = Circuit::new();
    circuit
        .h(QubitId(0))
        .cnot(QubitId(0), QubitId(1))
        .measure(QubitId(0))
        .measure(QubitId(1));

    let report = Debugger::new().report(&circuit, UserLevel::Intermediate);
    assert!(report.findings.is_empty());
    assert_eq!(report.score, 100);
}

#[test]
fn consecutive_hadamards_score_eighty_five() {
    let mut circuit = Circuit::new();
    circuit.h(QubitId(0)).h(QubitId(0));

    let report = Debugger::new().report(&circuit, UserLevel::Intermediate);

    // One medium gate-validity finding for the duplicate pair, plus the
    // measurement finding; the same pair also surfaces as a merging hint.
    let validity: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.category == FindingCategory::GateValidity)
        .collect();
    assert_eq!(validity.len(), 1);
    assert_eq!(validity[0].severity, Severity::Medium);

    assert_eq!(report.optimizations.len(), 1);
    assert_eq!(report.optimizations[0].category, HintCategory::GateMerging);
    assert_eq!(report.optimizations[0].range, Some((0, 1)));

    // 100 - 10 (duplicate) - 10 (no measurement) + 5 (one hint).
    assert_eq!(report.score, 85);
}

#[test]
fn missing_target_is_single_critical_and_caps_score() {
    let mut circuit = Circuit::new();
    circuit.push(Gate::single(GateKind::Cnot, QubitId(0)));

    let report = Debugger::new().report(&circuit, UserLevel::Advanced);

    let critical: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.severity == Severity::Critical)
        .collect();
    assert_eq!(critical.len(), 1);
    assert_eq!(critical[0].category, FindingCategory::Connectivity);
    assert!(report.score <= 80);
    assert!(
        report
            .suggestions
            .iter()
            .any(|s| s.contains("Fix critical errors"))
    );
}

#[test]
fn outlier_index_is_single_high_connectivity_finding() {
    // Gates on {0,1}; one gate references q7 and nothing else reaches 7.
    let mut circuit = Circuit::new();
    circuit
        .h(QubitId(0))
        .cnot(QubitId(0), QubitId(1))
        .x(QubitId(7))
        .measure(QubitId(0));

    let report = Debugger::new().report(&circuit, UserLevel::Intermediate);

    let connectivity: Vec<_> = report
        .findings
        .iter()
        .filter(|f| f.category == FindingCategory::Connectivity)
        .collect();
    assert_eq!(connectivity.len(), 1);
    assert_eq!(connectivity[0].severity, Severity::High);
    assert_eq!(connectivity[0].location.gate_index, Some(2));
}

#[test]
fn single_gate_circuit_never_out_of_range() {
    let mut circuit = Circuit::new();
    circuit.h(QubitId(5));
    let report = Debugger::new().report(&circuit, UserLevel::Beginner);
    assert!(
        report
            .findings
            .iter()
            .all(|f| f.category != FindingCategory::Connectivity)
    );
}

#[test]
fn uniform_index_circuit_is_self_consistent() {
    let mut circuit = Circuit::new();
    circuit.z(QubitId(9)).z(QubitId(9)).measure(QubitId(9));
    let report = Debugger::new().report(&circuit, UserLevel::Beginner);
    assert!(
        report
            .findings
            .iter()
            .all(|f| f.category != FindingCategory::Connectivity)
    );
}

#[test]
fn deep_circuit_trips_depth_finding_and_hint() {
    let mut circuit = Circuit::new();
    for i in 0..21 {
        if i % 2 == 0 {
            circuit.t(QubitId(0));
        } else {
            circuit.s(QubitId(0));
        }
    }

    let report = Debugger::new().report(&circuit, UserLevel::Advanced);

    assert!(
        report
            .findings
            .iter()
            .any(|f| f.category == FindingCategory::Depth)
    );
    assert!(
        report
            .optimizations
            .iter()
            .any(|h| h.category == HintCategory::DepthReduction)
    );
}

#[test]
fn entangling_chain_trips_both_thresholds() {
    let mut circuit = Circuit::new();
    for i in 0..6 {
        circuit.cnot(QubitId(i), QubitId(i + 1));
    }
    circuit.measure(QubitId(0));

    let report = Debugger::new().report(&circuit, UserLevel::Advanced);

    assert!(
        report
            .findings
            .iter()
            .any(|f| f.category == FindingCategory::EntanglementDepth
                && f.severity == Severity::Low)
    );
    assert!(
        report
            .optimizations
            .iter()
            .any(|h| h.category == HintCategory::EntanglementSimplification)
    );
}

#[tokio::test]
async fn wire_format_end_to_end() {
    let description = CircuitDescription {
        gates: vec![
            record("H", 0, None),
            record("INVALID", 0, None),
            record("CNOT", 0, None),
            record("H", 0, None),
            record("H", 0, None),
        ],
    };

    let report = Debugger::new()
        .debug_circuit(description, UserLevel::Intermediate)
        .await
        .unwrap();

    // Unknown kind (high), consecutive pair (medium), missing target
    // (critical), no measurement (medium); one merging hint.
    // 100 - 15 - 10 - 20 - 10 + 5 = 50.
    assert_eq!(report.score, 50);
    assert!(report.has_critical());

    // The report serializes one-to-one.
    let json = serde_json::to_string(&report).unwrap();
    let back: qlint_analyze::DebugReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

// ============================================================================
// Properties over arbitrary circuits
// ============================================================================

fn arb_kind() -> impl Strategy<Value = GateKind> {
    prop_oneof![
        8 => prop::sample::select(vec![
            GateKind::H,
            GateKind::X,
            GateKind::Y,
            GateKind::Z,
            GateKind::Cnot,
            GateKind::Cz,
            GateKind::Swap,
            GateKind::T,
            GateKind::S,
            GateKind::Rx,
            GateKind::Ry,
            GateKind::Rz,
            GateKind::Measure,
        ]),
        1 => "[A-Z]{3,6}".prop_map(GateKind::Unknown),
    ]
}

fn arb_gate() -> impl Strategy<Value = Gate> {
    (arb_kind(), 0u32..8, prop::option::of(0u32..8)).prop_map(|(kind, qubit, target)| Gate {
        kind,
        qubit: QubitId(qubit),
        target: target.map(QubitId),
    })
}

fn arb_circuit() -> impl Strategy<Value = Circuit> {
    prop::collection::vec(arb_gate(), 0..40).prop_map(Circuit::from_gates)
}

proptest! {
    #[test]
    fn score_is_always_in_range(circuit in arb_circuit()) {
        let report = Debugger::new().report(&circuit, UserLevel::Intermediate);
        prop_assert!(report.score <= 100);
    }

    #[test]
    fn finding_categories_in_fixed_order(circuit in arb_circuit()) {
        let report = Debugger::new().report(&circuit, UserLevel::Intermediate);
        let ranks: Vec<u8> = report
            .findings
            .iter()
            .map(|f| category_rank(f.category))
            .collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn analysis_is_idempotent(circuit in arb_circuit()) {
        let debugger = Debugger::new();
        let a = debugger.report(&circuit, UserLevel::Advanced);
        let b = debugger.report(&circuit, UserLevel::Advanced);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn finding_locations_are_valid_indices(circuit in arb_circuit()) {
        let report = Debugger::new().report(&circuit, UserLevel::Beginner);
        for finding in &report.findings {
            if let Some(index) = finding.location.gate_index {
                prop_assert!(index < circuit.len());
            }
        }
    }

    #[test]
    fn custom_thresholds_respected(circuit in arb_circuit()) {
        let config = AnalyzerConfig::new()
            .with_max_depth(usize::MAX)
            .with_max_entanglement(usize::MAX)
            .with_optimization_threshold(usize::MAX);
        let debugger = Debugger::new().with_config(config);
        let report = debugger.report(&circuit, UserLevel::Intermediate);
        prop_assert!(report.findings.iter().all(|f| f.category != FindingCategory::Depth));
        prop_assert!(report.findings.iter().all(|f| f.category != FindingCategory::EntanglementDepth));
        prop_assert!(report.optimizations.iter().all(|h| h.category != HintCategory::DepthReduction));
    }
}
