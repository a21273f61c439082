//! Generate command handler.

use anyhow::Context;
use ticket_core::{Group, Ticket};
use ticket_export::{CsvExporter, ExportArgs, ExportOptions, ExportReport};

/// Per-group totals printed after generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    pub group_a: usize,
    pub group_b: usize,
    pub resolved: usize,
}

impl GenerationSummary {
    pub fn of(tickets: &[Ticket]) -> Self {
        Self {
            group_a: tickets.iter().filter(|t| t.group == Group::A).count(),
            group_b: tickets.iter().filter(|t| t.group == Group::B).count(),
            resolved: tickets.iter().filter(|t| t.is_resolved()).count(),
        }
    }
}

/// Run the generate command: build the ticket sequence and write the CSV files.
pub fn run_generate(args: ExportArgs) -> anyhow::Result<ExportReport> {
    tracing::info!(
        "Generating {} tickets (seed={})",
        args.common.tickets,
        args.common.seed
    );

    let tickets = ticket_generator::generate(args.common.tickets, args.common.seed)
        .with_context(|| format!("Failed to generate {} tickets", args.common.tickets))?;

    let exporter = CsvExporter::new(ExportOptions::from(&args));
    let report = if args.simple_only {
        exporter.export_simple_only(&tickets, &args.output)
    } else {
        exporter.export_all(&tickets, &args.output)
    }
    .with_context(|| format!("Failed to write CSV files to {:?}", args.output))?;

    let summary = GenerationSummary::of(&tickets);
    println!(
        "Generated {} tickets: {} in group A, {} in group B, {} resolved",
        tickets.len(),
        summary.group_a,
        summary.group_b,
        summary.resolved
    );
    for file in &report.files {
        println!(
            "  {} ({} rows, {} bytes)",
            file.path.display(),
            file.rows_written,
            file.file_size_bytes
        );
    }

    Ok(report)
}
