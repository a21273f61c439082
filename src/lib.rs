//! ticket-synth
//!
//! Synthetic support-ticket datasets for an A/B test of a new classroom
//! multimedia maintenance process, and the statistical checks run on them.
//!
//! # Crates
//!
//! - `ticket_core` - ticket model, categorical enums and weight tables
//! - `ticket_generator` - deterministic `generate(count, seed)`
//! - `ticket_export` - CSV layouts and per-classroom aggregation
//! - `ticket_validation` - normality, variance, effect size, rank, bootstrap
//!   and leave-one-out checks over the aggregated data
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate 300 tickets into ./data
//! ticket-synth generate --tickets 300 --seed 42 --output data
//!
//! # Validate the aggregated per-classroom counts
//! ticket-synth validate --input data/jira_aggregated_data.csv --output reports/validation
//! ```

pub mod commands;

pub use commands::generate::{run_generate, GenerationSummary};
pub use commands::validate::{run_validate, ValidateArgs};
