//! qlint Command-Line Interface
//!
//! The main entry point for the qlint tool: static analysis and
//! optimization advice for small quantum-gate circuits.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{analyze, version};

/// qlint - static analysis and optimization advice for quantum circuits
#[derive(Parser)]
#[command(name = "qlint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one or more circuit description files
    Analyze {
        /// Circuit description files (JSON)
        #[arg(required = true)]
        files: Vec<String>,

        /// Audience for the suggestions (beginner, intermediate, advanced)
        #[arg(short, long, default_value = "intermediate")]
        level: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// HTTP completion endpoint for the narrative (optional)
        #[arg(long)]
        explain_endpoint: Option<String>,

        /// Narrative deadline in seconds
        #[arg(long, default_value = "10")]
        timeout: u64,
    },

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Analyze {
            files,
            level,
            format,
            explain_endpoint,
            timeout,
        } => {
            analyze::execute(
                &files,
                &level,
                &format,
                explain_endpoint.as_deref(),
                timeout,
            )
            .await
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
