//! Command-line interface for ticket-synth
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # Full dataset (full, simple, aggregated and daily CSV files)
//! ticket-synth generate --tickets 300 --seed 42 --output data
//!
//! # Simple export only, semicolon separated, without BOM
//! ticket-synth generate --simple-only --delimiter semicolon --no-bom -o data
//! ```
//!
//! ## Validate
//! ```bash
//! ticket-synth validate \
//!   --input data/jira_aggregated_data.csv \
//!   --output reports/validation \
//!   --expected-units 15
//! ```
//!
//! Logging is controlled with `RUST_LOG`, e.g. `RUST_LOG=info`.

use clap::{Parser, Subcommand};
use ticket_export::ExportArgs;
use ticket_synth::{run_generate, run_validate, ValidateArgs};

#[derive(Parser)]
#[command(name = "ticket-synth")]
#[command(about = "Generate synthetic support tickets for an A/B test and validate the results")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate tickets and write them as CSV files
    Generate {
        #[command(flatten)]
        args: ExportArgs,
    },

    /// Run the statistical checks on aggregated per-classroom counts
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            run_generate(args)?;
        }
        Commands::Validate { args } => {
            run_validate(args)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["ticket-synth", "generate"]).unwrap();
        let Commands::Generate { args } = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.common.tickets, 300);
        assert_eq!(args.common.seed, 42);
        assert!(!args.simple_only);
        assert!(!args.no_bom);
    }

    #[test]
    fn test_validate_arguments() {
        let cli = Cli::try_parse_from([
            "ticket-synth",
            "validate",
            "--input",
            "agg.csv",
            "--alpha",
            "0.01",
            "--expected-units",
            "15",
        ])
        .unwrap();
        let Commands::Validate { args } = cli.command else {
            panic!("expected validate");
        };
        assert_eq!(args.input.to_str(), Some("agg.csv"));
        assert_eq!(args.alpha, 0.01);
        assert_eq!(args.resamples, 10_000);
        assert_eq!(args.expected_units, Some(15));
    }
}
