//! CLI argument and input-handling tests.
//!
//! The binary crate's internals are not importable, so these tests exercise
//! the same clap surface via a mirrored parser and the underlying library
//! calls the commands delegate to.

use clap::Parser;

#[derive(Parser)]
#[command(name = "qlint")]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Analyze {
        #[arg(required = true)]
        files: Vec<String>,

        #[arg(short, long, default_value = "intermediate")]
        level: String,

        #[arg(short, long, default_value = "text")]
        format: String,

        #[arg(long)]
        explain_endpoint: Option<String>,

        #[arg(long, default_value = "10")]
        timeout: u64,
    },
    Version,
}

// ============================================================================
// Argument parsing
// ============================================================================

#[test]
fn test_analyze_requires_a_file() {
    assert!(Cli::try_parse_from(["qlint", "analyze"]).is_err());
}

#[test]
fn test_analyze_defaults() {
    let cli = Cli::try_parse_from(["qlint", "analyze", "bell.json"]).unwrap();
    match cli.command {
        Commands::Analyze {
            files,
            level,
            format,
            explain_endpoint,
            timeout,
        } => {
            assert_eq!(files, vec!["bell.json"]);
            assert_eq!(level, "intermediate");
            assert_eq!(format, "text");
            assert!(explain_endpoint.is_none());
            assert_eq!(timeout, 10);
        }
        _ => panic!("expected analyze"),
    }
}

#[test]
fn test_analyze_multiple_files_and_flags() {
    let cli = Cli::try_parse_from([
        "qlint",
        "analyze",
        "a.json",
        "b.json",
        "--level",
        "advanced",
        "--format",
        "json",
        "--explain-endpoint",
        "http://localhost:8080/v1/complete",
        "--timeout",
        "3",
    ])
    .unwrap();
    match cli.command {
        Commands::Analyze {
            files,
            level,
            format,
            explain_endpoint,
            timeout,
        } => {
            assert_eq!(files.len(), 2);
            assert_eq!(level, "advanced");
            assert_eq!(format, "json");
            assert_eq!(
                explain_endpoint.as_deref(),
                Some("http://localhost:8080/v1/complete")
            );
            assert_eq!(timeout, 3);
        }
        _ => panic!("expected analyze"),
    }
}

#[test]
fn test_verbosity_counts() {
    let cli = Cli::try_parse_from(["qlint", "-vv", "version"]).unwrap();
    assert_eq!(cli.verbose, 2);
}

// ============================================================================
// Input handling the analyze command relies on
// ============================================================================

mod input_tests {
    use std::io::Write;

    use qlint_analyze::{Debugger, UserLevel};
    use qlint_ir::CircuitDescription;

    #[test]
    fn test_level_parsing_matches_cli_values() {
        for level in ["beginner", "intermediate", "advanced"] {
            assert!(level.parse::<UserLevel>().is_ok());
        }
        assert!("expert".parse::<UserLevel>().is_err());
    }

    #[tokio::test]
    async fn test_analyze_description_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"gates": [{{"type": "H", "qubit": 0}}, {{"type": "CNOT", "qubit": 0, "target": 1}}]}}"#
        )
        .unwrap();

        let source = std::fs::read_to_string(file.path()).unwrap();
        let description: CircuitDescription = serde_json::from_str(&source).unwrap();

        let report = Debugger::new()
            .debug_circuit(description, UserLevel::Intermediate)
            .await
            .unwrap();
        assert_eq!(report.score, 90);
    }

    #[test]
    fn test_malformed_description_is_an_error() {
        let result: Result<CircuitDescription, _> =
            serde_json::from_str(r#"{"gates": [{"qubit": 0}]}"#);
        assert!(result.is_err());
    }
}
