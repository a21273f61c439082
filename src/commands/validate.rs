//! Validate command handler.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use ticket_validation::{load_groups, validate, ValidationConfig, ValidationReport};

/// Validation arguments.
#[derive(Args, Clone, Debug)]
pub struct ValidateArgs {
    /// Aggregated CSV with one ticket count per classroom and group
    #[arg(
        long,
        short = 'i',
        default_value = "data/jira_aggregated_data.csv",
        env = "TICKET_SYNTH_VALIDATE_INPUT"
    )]
    pub input: PathBuf,

    /// Directory for validation_report.json
    #[arg(
        long,
        short = 'o',
        default_value = "reports/validation",
        env = "TICKET_SYNTH_VALIDATE_OUTPUT"
    )]
    pub output: PathBuf,

    /// Significance level
    #[arg(long, default_value = "0.05", env = "TICKET_SYNTH_ALPHA")]
    pub alpha: f64,

    /// Number of bootstrap resamples
    #[arg(long, default_value = "10000", env = "TICKET_SYNTH_RESAMPLES")]
    pub resamples: usize,

    /// Seed for the bootstrap generator
    #[arg(long, default_value = "42", env = "TICKET_SYNTH_BOOTSTRAP_SEED")]
    pub bootstrap_seed: u64,

    /// Expected number of classrooms per group
    #[arg(long, env = "TICKET_SYNTH_EXPECTED_UNITS")]
    pub expected_units: Option<usize>,

    /// Print the report as JSON instead of the text summary
    #[arg(long)]
    pub json: bool,
}

impl From<&ValidateArgs> for ValidationConfig {
    fn from(args: &ValidateArgs) -> Self {
        Self {
            alpha: args.alpha,
            resamples: args.resamples,
            bootstrap_seed: args.bootstrap_seed,
            expected_units: args.expected_units,
        }
    }
}

/// Run the validate command: load the aggregated data, test it and write the report.
pub fn run_validate(args: ValidateArgs) -> anyhow::Result<ValidationReport> {
    tracing::info!("Loading aggregated data from {:?}", args.input);

    let samples = load_groups(&args.input)
        .with_context(|| format!("Failed to load aggregated data from {:?}", args.input))?;

    let config = ValidationConfig::from(&args);
    let report = validate(&samples.control, &samples.treatment, &config)
        .with_context(|| format!("Failed to validate {:?}", args.input))?;

    let path = report
        .write_json(&args.output)
        .with_context(|| format!("Failed to write report to {:?}", args.output))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
        println!();
        println!("Report saved to {}", path.display());
    }

    Ok(report)
}
