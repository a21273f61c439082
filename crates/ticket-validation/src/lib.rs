//! Statistical validation of an A/B test on classroom support tickets.
//!
//! The unit of analysis is the classroom: the input is the aggregated CSV
//! written by `ticket-export`, with one ticket count per classroom and group.
//! Group A is the control, group B the treatment.
//!
//! ```text
//! jira_aggregated_data.csv ──► load_groups ──► validate ──► ValidationReport
//!                                                              │
//!                                        validation_report.json ◄┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use ticket_validation::{load_groups, validate, ValidationConfig};
//!
//! let samples = load_groups("data/jira_aggregated_data.csv")?;
//! let report = validate(&samples.control, &samples.treatment, &ValidationConfig::default())?;
//! report.write_json("reports/validation")?;
//! println!("{report}");
//! ```

mod error;
pub mod load;
pub mod report;
pub mod stats;

pub use error::ValidationError;
pub use load::{load_groups, parse_groups, GroupSamples};
pub use report::{
    validate, Conclusion, GroupShape, UnitOfAnalysis, ValidationConfig, ValidationReport,
    REPORT_FILE,
};
