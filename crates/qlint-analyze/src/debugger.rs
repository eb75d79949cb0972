//! The analyzer entry point.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use qlint_explain::Explain;
use qlint_ir::{Circuit, CircuitDescription};

use crate::advise::{self, UserLevel};
use crate::check::detect;
use crate::config::AnalyzerConfig;
use crate::error::AnalyzeResult;
use crate::optimize::find_optimizations;
use crate::profile::CircuitProfile;
use crate::report::DebugReport;

/// Default deadline for the optional narrative call.
const DEFAULT_NARRATIVE_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs the four analysis stages and assembles debug reports.
///
/// The debugger is stateless across calls: each analysis is a pure function
/// of its inputs, so one instance may serve arbitrarily many concurrent
/// analyses without coordination. The only I/O-bound step is the optional
/// narrative call, which is bounded by a timeout and can only ever replace
/// the locally generated fallback text — structured fields never depend on
/// its outcome.
pub struct Debugger {
    config: AnalyzerConfig,
    explainer: Option<Arc<dyn Explain>>,
    narrative_timeout: Duration,
}

impl Debugger {
    /// Create a debugger with default thresholds and no narrative provider.
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            explainer: None,
            narrative_timeout: DEFAULT_NARRATIVE_TIMEOUT,
        }
    }

    /// Use custom thresholds.
    #[must_use]
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach a narrative provider.
    #[must_use]
    pub fn with_explainer(mut self, explainer: Arc<dyn Explain>) -> Self {
        self.explainer = Some(explainer);
        self
    }

    /// Set the narrative call deadline.
    #[must_use]
    pub fn with_narrative_timeout(mut self, timeout: Duration) -> Self {
        self.narrative_timeout = timeout;
        self
    }

    /// The thresholds in use.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a validated circuit synchronously.
    ///
    /// Runs all four stages and returns a complete report with the
    /// deterministic fallback narrative. Never fails.
    #[instrument(skip(self, circuit), fields(gates = circuit.len()))]
    pub fn report(&self, circuit: &Circuit, level: UserLevel) -> DebugReport {
        let profile = CircuitProfile::of(circuit);
        debug!(
            qubits = profile.qubit_count,
            complexity = profile.complexity_score,
            "profile built"
        );

        let findings = detect(circuit, &profile, &self.config);
        let optimizations = find_optimizations(circuit, &profile, &self.config);
        let suggestions = advise::advise(&findings, &optimizations, level);
        let score = advise::score(&profile, &findings, &optimizations, &self.config);
        let narrative = advise::fallback_narrative(&profile, &findings, &optimizations, level);

        info!(
            findings = findings.len(),
            optimizations = optimizations.len(),
            score,
            "analysis complete"
        );

        DebugReport {
            profile,
            findings,
            optimizations,
            suggestions,
            narrative: Some(narrative),
            score,
        }
    }

    /// Validate a circuit description and produce a debug report.
    ///
    /// The structured fields are computed synchronously before any I/O.
    /// If a narrative provider is attached, it gets one bounded attempt to
    /// replace the fallback narrative; any failure is logged and swallowed.
    pub async fn debug_circuit(
        &self,
        description: CircuitDescription,
        level: UserLevel,
    ) -> AnalyzeResult<DebugReport> {
        let circuit = description.into_circuit()?;
        let mut report = self.report(&circuit, level);

        if let Some(explainer) = &self.explainer {
            let prompt = advise::build_prompt(
                &report.profile,
                &report.findings,
                &report.optimizations,
                level,
            );
            match tokio::time::timeout(self.narrative_timeout, explainer.explain(&prompt)).await
            {
                Ok(Ok(text)) => report.narrative = Some(text),
                Ok(Err(err)) => {
                    warn!(provider = explainer.name(), %err, "narrative unavailable");
                }
                Err(_) => {
                    warn!(
                        provider = explainer.name(),
                        timeout_ms = self.narrative_timeout.as_millis() as u64,
                        "narrative timed out"
                    );
                }
            }
        }

        Ok(report)
    }
}

impl Default for Debugger {
    fn default() -> Self {
        Self::new()
    }
}
