//! CLI argument definitions for dataset generation and export.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Arguments shared by every command that generates tickets.
#[derive(Args, Clone, Debug)]
pub struct CommonGenerateArgs {
    /// Total number of tickets to generate (split 60/40 between groups A and B)
    #[arg(long, default_value = "300", env = "TICKET_SYNTH_TICKETS")]
    pub tickets: u64,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42", env = "TICKET_SYNTH_SEED")]
    pub seed: u64,
}

/// CSV export arguments.
#[derive(Args, Clone, Debug)]
pub struct ExportArgs {
    /// Output directory for CSV files
    #[arg(long, short = 'o', default_value = ".", env = "TICKET_SYNTH_OUTPUT")]
    pub output: PathBuf,

    /// Only write the simple export (jira_export.csv)
    #[arg(long)]
    pub simple_only: bool,

    /// Field delimiter
    #[arg(long, value_enum, default_value_t = Delimiter::Comma, env = "TICKET_SYNTH_DELIMITER")]
    pub delimiter: Delimiter,

    /// Do not prefix files with a UTF-8 byte order mark
    #[arg(long)]
    pub no_bom: bool,

    #[command(flatten)]
    pub common: CommonGenerateArgs,
}

/// CSV field delimiter.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Delimiter {
    #[default]
    Comma,
    Semicolon,
}

impl Delimiter {
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
        }
    }
}
