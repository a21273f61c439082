//! End-to-end pipeline tests.
//!
//! These tests run the generate -> export -> validate workflow on
//! deterministic datasets:
//! 1. Generate tickets with a fixed seed
//! 2. Write the CSV files into a temporary directory
//! 3. Load the aggregated per-classroom counts back
//! 4. Run the validation sequence and check the written report

mod csv_pipeline;
mod determinism;
