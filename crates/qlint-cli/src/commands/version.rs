//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - static analysis for quantum circuits",
        style("qlint").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qlint-ir       Circuit description and validation");
    println!("  qlint-analyze  Analysis stages, findings, and scoring");
    println!("  qlint-explain  Narrative explanation capability");
    println!("  qlint-cli      Command-line interface");
    println!();
    println!(
        "Repository: {}",
        style("https://github.com/qlint-dev/qlint").underlined()
    );
    println!("License:    {}", style("Apache-2.0").dim());
}
