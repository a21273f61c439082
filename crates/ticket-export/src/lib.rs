//! CSV export of synthetic ticket datasets.
//!
//! This crate writes a generated ticket sequence in the layouts the
//! downstream analysis expects:
//!
//! - `jira_full_export.csv` - every ticket field
//! - `jira_simple_export.csv` - the analysis columns
//! - `jira_aggregated_data.csv` - ticket count and mean resolution time per classroom
//! - `jira_daily_stats.csv` - tickets created per day and group
//! - `jira_export.csv` - the simple-only layout
//!
//! # Example
//!
//! ```ignore
//! use ticket_export::{CsvExporter, ExportOptions};
//!
//! let tickets = ticket_generator::generate(300, 42)?;
//! let exporter = CsvExporter::new(ExportOptions::default());
//! let report = exporter.export_all(&tickets, "./data")?;
//! ```

pub mod aggregate;
pub mod args;
pub mod columns;
mod error;
mod exporter;

pub use aggregate::{aggregate_by_classroom, daily_counts, ClassroomSummary, DailyCount};
pub use args::{CommonGenerateArgs, Delimiter, ExportArgs};
pub use error::ExportError;
pub use exporter::{CsvExporter, ExportOptions, ExportReport, FileMetrics};
