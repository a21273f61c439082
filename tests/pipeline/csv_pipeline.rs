//! Generate, export and validate through the command handlers.

use std::path::Path;

use tempfile::TempDir;
use ticket_export::{CommonGenerateArgs, Delimiter, ExportArgs};
use ticket_synth::{run_generate, run_validate, ValidateArgs};
use ticket_validation::{load_groups, REPORT_FILE};

const SEED: u64 = 42;
const TICKETS: u64 = 300;

fn export_args(output: &Path) -> ExportArgs {
    ExportArgs {
        output: output.to_path_buf(),
        simple_only: false,
        delimiter: Delimiter::Comma,
        no_bom: false,
        common: CommonGenerateArgs {
            tickets: TICKETS,
            seed: SEED,
        },
    }
}

fn validate_args(input: &Path, output: &Path) -> ValidateArgs {
    ValidateArgs {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        alpha: 0.05,
        resamples: 1000,
        bootstrap_seed: SEED,
        expected_units: Some(15),
        json: false,
    }
}

fn read_csv(path: &Path) -> Vec<csv::StringRecord> {
    let content = std::fs::read_to_string(path).unwrap();
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content).to_string();
    csv::Reader::from_reader(content.as_bytes())
        .records()
        .map(|r| r.unwrap())
        .collect()
}

#[test]
fn test_generate_then_validate() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("ticket_synth=info,ticket_export=info,ticket_validation=info")
        .try_init()
        .ok();

    let temp_dir = TempDir::new()?;
    let data_dir = temp_dir.path().join("data");
    let report_dir = temp_dir.path().join("reports").join("validation");

    // === PHASE 1: GENERATE ===
    let export = run_generate(export_args(&data_dir))?;
    assert_eq!(export.files.len(), 4);

    let full = read_csv(&data_dir.join("jira_full_export.csv"));
    assert_eq!(full.len(), 300);
    let group_a = full.iter().filter(|r| &r[22] == "A").count();
    assert_eq!(group_a, 180);

    // === PHASE 2: LOAD AGGREGATED COUNTS ===
    let aggregated = data_dir.join("jira_aggregated_data.csv");
    let samples = load_groups(&aggregated)?;
    assert_eq!(samples.control.iter().sum::<f64>(), 180.0);
    assert_eq!(samples.treatment.iter().sum::<f64>(), 120.0);
    assert!(samples.control.len() <= 15);
    assert!(samples.treatment.len() <= 15);

    // === PHASE 3: VALIDATE ===
    let report = run_validate(validate_args(&aggregated, &report_dir))?;
    assert_eq!(
        report.unit_of_analysis.control_units,
        samples.control.len()
    );
    assert_eq!(report.bootstrap.resamples, 1000);
    assert!(report.bootstrap.ci_lower <= report.bootstrap.ci_upper);
    assert_eq!(
        report.leave_one_out.p_values.len(),
        samples.control.len() + samples.treatment.len()
    );

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(report_dir.join(REPORT_FILE))?)?;
    assert_eq!(json["alpha"], 0.05);
    assert!(json["bootstrap"]["ci_lower"].is_number());

    Ok(())
}

#[test]
fn test_simple_only_export() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let mut args = export_args(temp_dir.path());
    args.simple_only = true;
    args.delimiter = Delimiter::Semicolon;
    args.no_bom = true;

    let report = run_generate(args)?;
    assert_eq!(report.files.len(), 1);

    let bytes = std::fs::read(temp_dir.path().join("jira_export.csv"))?;
    assert!(!bytes.starts_with("\u{feff}".as_bytes()));
    let header = String::from_utf8(bytes)?.lines().next().unwrap_or_default().to_string();
    assert_eq!(header.split(';').count(), 8);
    assert!(header.starts_with("Issue Key;Summary;Status"));
    assert!(!temp_dir.path().join("jira_full_export.csv").exists());

    Ok(())
}

#[test]
fn test_validate_missing_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let args = validate_args(
        &temp_dir.path().join("missing.csv"),
        &temp_dir.path().join("out"),
    );

    let err = run_validate(args).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load aggregated data"));
}

#[test]
fn test_generate_rejects_zero_tickets() {
    let temp_dir = TempDir::new().unwrap();
    let mut args = export_args(temp_dir.path());
    args.common.tickets = 0;

    let err = run_generate(args).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to generate 0 tickets"));
}
