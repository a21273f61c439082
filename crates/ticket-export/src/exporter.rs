//! CSV exporter writing ticket datasets to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use csv::WriterBuilder;
use ticket_core::Ticket;
use tracing::{debug, info};

use crate::aggregate::{aggregate_by_classroom, daily_counts};
use crate::args::{Delimiter, ExportArgs};
use crate::columns::{
    full_record, simple_only_record, simple_record, AGGREGATED_COLUMNS, DATE, FULL_COLUMNS,
    SIMPLE_COLUMNS, SIMPLE_ONLY_COLUMNS,
};
use crate::error::ExportError;

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// UTF-8 byte order mark, so spreadsheet tools detect the encoding.
const UTF8_BOM: &[u8] = "\u{feff}".as_bytes();

pub const FULL_EXPORT_FILE: &str = "jira_full_export.csv";
pub const SIMPLE_EXPORT_FILE: &str = "jira_simple_export.csv";
pub const AGGREGATED_FILE: &str = "jira_aggregated_data.csv";
pub const DAILY_STATS_FILE: &str = "jira_daily_stats.csv";
pub const SIMPLE_ONLY_FILE: &str = "jira_export.csv";

/// How files are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    pub delimiter: Delimiter,
    /// Prefix each file with a UTF-8 BOM.
    pub bom: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::Comma,
            bom: true,
        }
    }
}

impl From<&ExportArgs> for ExportOptions {
    fn from(args: &ExportArgs) -> Self {
        Self {
            delimiter: args.delimiter,
            bom: !args.no_bom,
        }
    }
}

/// Metrics for one written file.
#[derive(Debug, Clone)]
pub struct FileMetrics {
    pub path: PathBuf,
    /// Data rows, excluding the header.
    pub rows_written: u64,
    pub file_size_bytes: u64,
}

/// Result of an export run.
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    pub files: Vec<FileMetrics>,
    pub total_duration: Duration,
}

impl ExportReport {
    /// Metrics of the file named `name`, if it was written.
    pub fn file(&self, name: &str) -> Option<&FileMetrics> {
        self.files
            .iter()
            .find(|f| f.path.file_name().is_some_and(|n| n == name))
    }

    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.file_size_bytes).sum()
    }
}

/// Writes ticket sequences in the supported CSV layouts.
pub struct CsvExporter {
    options: ExportOptions,
}

impl CsvExporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ExportOptions {
        self.options
    }

    /// Write the full, simple, aggregated and daily files into `output_dir`.
    pub fn export_all<P: AsRef<Path>>(
        &self,
        tickets: &[Ticket],
        output_dir: P,
    ) -> Result<ExportReport, ExportError> {
        let start_time = Instant::now();
        let output_dir = prepare_dir(output_dir.as_ref(), tickets)?;

        info!(
            "Exporting {} tickets to '{}'",
            tickets.len(),
            output_dir.display()
        );

        let full = self.write_file(
            &output_dir.join(FULL_EXPORT_FILE),
            &FULL_COLUMNS,
            tickets.iter().map(full_record),
        )?;
        let simple = self.write_file(
            &output_dir.join(SIMPLE_EXPORT_FILE),
            &SIMPLE_COLUMNS,
            tickets.iter().map(simple_record),
        )?;
        let aggregated = self.write_file(
            &output_dir.join(AGGREGATED_FILE),
            &AGGREGATED_COLUMNS,
            aggregate_by_classroom(tickets).iter().map(|s| s.to_record()),
        )?;
        let daily = self.write_file(
            &output_dir.join(DAILY_STATS_FILE),
            &[DATE, "A", "B"],
            daily_counts(tickets).iter().map(|d| d.to_record()),
        )?;

        let report = ExportReport {
            files: vec![full, simple, aggregated, daily],
            total_duration: start_time.elapsed(),
        };

        info!(
            "Export complete: {} files, {} bytes in {:?}",
            report.files.len(),
            report.total_bytes(),
            report.total_duration
        );

        Ok(report)
    }

    /// Write only `jira_export.csv` into `output_dir`.
    pub fn export_simple_only<P: AsRef<Path>>(
        &self,
        tickets: &[Ticket],
        output_dir: P,
    ) -> Result<ExportReport, ExportError> {
        let start_time = Instant::now();
        let output_dir = prepare_dir(output_dir.as_ref(), tickets)?;

        let file = self.write_file(
            &output_dir.join(SIMPLE_ONLY_FILE),
            &SIMPLE_ONLY_COLUMNS,
            tickets.iter().map(simple_only_record),
        )?;

        let report = ExportReport {
            files: vec![file],
            total_duration: start_time.elapsed(),
        };

        info!(
            "Simple export complete: {} tickets in {:?}",
            tickets.len(),
            report.total_duration
        );

        Ok(report)
    }

    fn write_file<I>(
        &self,
        path: &Path,
        header: &[&str],
        records: I,
    ) -> Result<FileMetrics, ExportError>
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let file = File::create(path)?;
        let mut buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        if self.options.bom {
            buf_writer.write_all(UTF8_BOM)?;
        }

        let mut writer = WriterBuilder::new()
            .delimiter(self.options.delimiter.as_byte())
            .from_writer(buf_writer);

        writer.write_record(header)?;

        let mut rows_written = 0u64;
        for record in records {
            writer.write_record(&record)?;
            rows_written += 1;
        }

        writer.flush()?;
        drop(writer);

        let file_size_bytes = std::fs::metadata(path)?.len();
        debug!(
            "Wrote '{}': {} rows, {} bytes",
            path.display(),
            rows_written,
            file_size_bytes
        );

        Ok(FileMetrics {
            path: path.to_path_buf(),
            rows_written,
            file_size_bytes,
        })
    }
}

fn prepare_dir<'a>(output_dir: &'a Path, tickets: &[Ticket]) -> Result<&'a Path, ExportError> {
    if tickets.is_empty() {
        return Err(ExportError::Empty);
    }
    std::fs::create_dir_all(output_dir)?;
    Ok(output_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tickets() -> Vec<Ticket> {
        ticket_generator::generate(50, 42).unwrap()
    }

    fn read_rows(path: &Path, delimiter: u8) -> (Vec<String>, Vec<Vec<String>>) {
        let content = std::fs::read_to_string(path).unwrap();
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .from_reader(content.as_bytes());
        let header = reader
            .headers()
            .unwrap()
            .iter()
            .map(String::from)
            .collect();
        let rows = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        (header, rows)
    }

    #[test]
    fn test_export_all_writes_four_files() {
        let temp_dir = TempDir::new().unwrap();
        let exporter = CsvExporter::new(ExportOptions::default());

        let report = exporter.export_all(&tickets(), temp_dir.path()).unwrap();

        assert_eq!(report.files.len(), 4);
        for name in [FULL_EXPORT_FILE, SIMPLE_EXPORT_FILE, AGGREGATED_FILE, DAILY_STATS_FILE] {
            let metrics = report.file(name).unwrap();
            assert!(metrics.path.exists());
            assert!(metrics.file_size_bytes > 0);
        }
        assert_eq!(report.file(FULL_EXPORT_FILE).unwrap().rows_written, 50);
        assert_eq!(report.file(SIMPLE_EXPORT_FILE).unwrap().rows_written, 50);
        assert!(report.file(SIMPLE_ONLY_FILE).is_none());
    }

    #[test]
    fn test_full_export_contents() {
        let temp_dir = TempDir::new().unwrap();
        let tickets = tickets();
        CsvExporter::new(ExportOptions::default())
            .export_all(&tickets, temp_dir.path())
            .unwrap();

        let (header, rows) = read_rows(&temp_dir.path().join(FULL_EXPORT_FILE), b',');
        assert_eq!(header, FULL_COLUMNS);
        assert_eq!(rows.len(), tickets.len());
        for (row, ticket) in rows.iter().zip(&tickets) {
            assert_eq!(row[0], ticket.key.to_string());
            // Multi-line descriptions survive quoting.
            assert_eq!(row[3], ticket.description);
        }
    }

    #[test]
    fn test_bom_and_delimiter_options() {
        let temp_dir = TempDir::new().unwrap();
        let exporter = CsvExporter::new(ExportOptions {
            delimiter: Delimiter::Semicolon,
            bom: false,
        });

        exporter
            .export_simple_only(&tickets(), temp_dir.path())
            .unwrap();

        let bytes = std::fs::read(temp_dir.path().join(SIMPLE_ONLY_FILE)).unwrap();
        assert!(!bytes.starts_with(UTF8_BOM));

        let (header, rows) = read_rows(&temp_dir.path().join(SIMPLE_ONLY_FILE), b';');
        assert_eq!(header, SIMPLE_ONLY_COLUMNS);
        assert_eq!(rows.len(), 50);
    }

    #[test]
    fn test_bom_written_by_default() {
        let temp_dir = TempDir::new().unwrap();
        CsvExporter::new(ExportOptions::default())
            .export_simple_only(&tickets(), temp_dir.path())
            .unwrap();

        let bytes = std::fs::read(temp_dir.path().join(SIMPLE_ONLY_FILE)).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));
    }

    #[test]
    fn test_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("data").join("out");

        CsvExporter::new(ExportOptions::default())
            .export_all(&tickets(), &nested)
            .unwrap();

        assert!(nested.join(AGGREGATED_FILE).exists());
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let result = CsvExporter::new(ExportOptions::default()).export_all(&[], temp_dir.path());

        assert!(matches!(result, Err(ExportError::Empty)));
    }

    #[test]
    fn test_aggregated_file_matches_summary() {
        let temp_dir = TempDir::new().unwrap();
        let tickets = tickets();
        CsvExporter::new(ExportOptions::default())
            .export_all(&tickets, temp_dir.path())
            .unwrap();

        let (header, rows) = read_rows(&temp_dir.path().join(AGGREGATED_FILE), b',');
        assert_eq!(header, AGGREGATED_COLUMNS);

        let total: usize = rows.iter().map(|r| r[2].parse::<usize>().unwrap()).sum();
        assert_eq!(total, tickets.len());
    }
}
