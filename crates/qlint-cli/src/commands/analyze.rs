//! Analyze command implementation.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use console::style;

use qlint_analyze::{DebugHistory, DebugReport, Debugger, Severity, UserLevel};
use qlint_explain_http::HttpExplainer;
use qlint_ir::CircuitDescription;

/// Execute the analyze command.
pub async fn execute(
    files: &[String],
    level: &str,
    format: &str,
    explain_endpoint: Option<&str>,
    timeout: u64,
) -> Result<()> {
    let level: UserLevel = level
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid level: {e}"))?;

    let mut debugger = Debugger::new().with_narrative_timeout(Duration::from_secs(timeout));
    if let Some(endpoint) = explain_endpoint {
        let explainer = HttpExplainer::new(endpoint)
            .with_context(|| format!("Failed to create explain client for {endpoint}"))?;
        debugger = debugger.with_explainer(Arc::new(explainer));
    }

    let history = DebugHistory::new();

    for file in files {
        let description = load_description(file)?;
        let report = debugger
            .debug_circuit(description, level)
            .await
            .with_context(|| format!("Analysis failed for {file}"))?;

        history.record(&report, level);

        match format.to_lowercase().as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(&report)?),
            "text" => print_report(file, &report),
            other => anyhow::bail!("Unknown format: '{other}'. Available: text, json"),
        }
    }

    if files.len() > 1 {
        print_summary(&history);
    }

    Ok(())
}

/// Load a circuit description from a JSON file.
fn load_description(path: &str) -> Result<CircuitDescription> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    serde_json::from_str(&source).with_context(|| format!("Invalid circuit description: {path}"))
}

/// Render a report for the terminal.
fn print_report(file: &str, report: &DebugReport) {
    println!(
        "{} Analyzed {} ({} gates, {} qubits)",
        style("→").cyan().bold(),
        style(file).green(),
        report.profile.gate_count,
        report.profile.qubit_count
    );
    println!("  Score: {}", style(report.score).yellow().bold());

    if report.findings.is_empty() {
        println!("  {} No findings", style("✓").green().bold());
    } else {
        println!("  Findings:");
        for finding in &report.findings {
            let severity = match finding.severity {
                Severity::Critical => style("critical").red().bold(),
                Severity::High => style("high").red(),
                Severity::Medium => style("medium").yellow(),
                Severity::Low => style("low").dim(),
            };
            let at = finding
                .location
                .gate_index
                .map(|i| format!(" [gate {i}]"))
                .unwrap_or_default();
            println!("    {severity}{at}: {}", finding.description);
            println!("      fix: {}", style(&finding.fix).dim());
        }
    }

    if !report.optimizations.is_empty() {
        println!("  Optimizations:");
        for hint in &report.optimizations {
            println!("    {} ({})", hint.description, style(&hint.savings).dim());
        }
    }

    println!("  Suggestions:");
    for suggestion in &report.suggestions {
        println!("    - {suggestion}");
    }

    if let Some(narrative) = &report.narrative {
        println!("  {}", style(narrative).italic());
    }
    println!();
}

/// Render the multi-file summary line.
fn print_summary(history: &DebugHistory) {
    let mean = history.mean_score().unwrap_or(0.0);
    println!(
        "{} {} circuits analyzed, mean score {:.1}",
        style("✓").green().bold(),
        history.len(),
        mean
    );
}
