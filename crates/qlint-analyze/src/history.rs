//! Caller-owned log of past analyses.
//!
//! The analyzer itself is stateless and never touches a history; this type
//! exists for callers that analyze many circuits and want a serialized
//! record. Appends go through a mutex so analyses completing concurrently
//! can share one log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::advise::UserLevel;
use crate::report::DebugReport;

/// A summary of one completed analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// When the analysis completed.
    pub timestamp: DateTime<Utc>,
    /// The user level the report was addressed to.
    pub level: UserLevel,
    /// The report's quality score.
    pub score: u8,
    /// Number of findings in the report.
    pub finding_count: usize,
    /// Number of optimization hints in the report.
    pub optimization_count: usize,
}

/// A mutex-guarded, append-only analysis log.
#[derive(Debug, Default)]
pub struct DebugHistory {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl DebugHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed report.
    pub fn record(&self, report: &DebugReport, level: UserLevel) {
        let entry = HistoryEntry {
            timestamp: Utc::now(),
            level,
            score: report.score,
            finding_count: report.findings.len(),
            optimization_count: report.optimizations.len(),
        };
        self.entries
            .lock()
            .expect("history mutex poisoned")
            .push(entry);
    }

    /// Number of recorded analyses.
    pub fn len(&self) -> usize {
        self.entries.lock().expect("history mutex poisoned").len()
    }

    /// Check if the history is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot the entries in record order.
    pub fn snapshot(&self) -> Vec<HistoryEntry> {
        self.entries
            .lock()
            .expect("history mutex poisoned")
            .clone()
    }

    /// Mean score across recorded analyses, if any.
    pub fn mean_score(&self) -> Option<f64> {
        let entries = self.entries.lock().expect("history mutex poisoned");
        if entries.is_empty() {
            return None;
        }
        let total: u32 = entries.iter().map(|e| u32::from(e.score)).sum();
        Some(f64::from(total) / entries.len() as f64)
    }
}
