//! Loading per-classroom ticket counts from an aggregated CSV.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::error::ValidationError;

const DELIMITERS: [u8; 2] = [b',', b';'];
const GROUP_MARKERS: [&str; 2] = ["групп", "group"];
const COUNT_MARKERS: [&str; 3] = ["количество", "заявок", "ticket"];

/// Per-classroom ticket counts of the control (A) and treatment (B) groups.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSamples {
    pub control: Vec<f64>,
    pub treatment: Vec<f64>,
    pub delimiter: u8,
    pub group_column: String,
    pub count_column: String,
}

/// Read an aggregated CSV file from disk.
pub fn load_groups<P: AsRef<Path>>(path: P) -> Result<GroupSamples, ValidationError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let samples = parse_groups(&content)?;

    info!(
        "Loaded '{}': {} control and {} treatment classrooms (delimiter '{}')",
        path.display(),
        samples.control.len(),
        samples.treatment.len(),
        samples.delimiter as char
    );
    Ok(samples)
}

/// Parse aggregated CSV content, trying `,` and then `;` as the delimiter.
pub fn parse_groups(content: &str) -> Result<GroupSamples, ValidationError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut missing = "group";
    for delimiter in DELIMITERS {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(content.as_bytes());
        let headers = reader.headers()?.clone();

        let Some(group_idx) = find_column(&headers, &GROUP_MARKERS, None) else {
            missing = "group";
            continue;
        };
        let Some(count_idx) = find_column(&headers, &COUNT_MARKERS, Some(group_idx)) else {
            missing = "ticket count";
            continue;
        };
        debug!(
            "Detected columns '{}' and '{}' with delimiter '{}'",
            &headers[group_idx], &headers[count_idx], delimiter as char
        );

        let mut samples = GroupSamples {
            control: Vec::new(),
            treatment: Vec::new(),
            delimiter,
            group_column: headers[group_idx].to_string(),
            count_column: headers[count_idx].to_string(),
        };
        for record in reader.records() {
            let record = record?;
            let value = clean_numeric(record.get(count_idx).unwrap_or_default());
            match record.get(group_idx).map(str::trim) {
                Some("A") => samples.control.push(value),
                Some("B") => samples.treatment.push(value),
                _ => {}
            }
        }
        return Ok(samples);
    }

    Err(ValidationError::MissingColumn(missing))
}

fn find_column(headers: &StringRecord, markers: &[&str], skip: Option<usize>) -> Option<usize> {
    headers.iter().enumerate().find_map(|(i, header)| {
        let header = header.to_lowercase();
        (Some(i) != skip && markers.iter().any(|marker| header.contains(marker))).then_some(i)
    })
}

/// Parse a count cell. `-`, empty and unparsable cells count as zero.
pub fn clean_numeric(cell: &str) -> f64 {
    let cell = cell.trim();
    if cell.is_empty() || cell == "-" {
        return 0.0;
    }
    cell.replace(',', ".").parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const AGGREGATED: &str = "\u{feff}Аудитория,Группа A/B теста,Количество заявок,Среднее время решения\n\
        Гл-101,A,12,20.5\n\
        Гл-102,A,9,-\n\
        Гл-201,B,7,18.0\n";

    #[test]
    fn test_parse_comma_file_with_bom() {
        let samples = parse_groups(AGGREGATED).unwrap();

        assert_eq!(samples.delimiter, b',');
        assert_eq!(samples.control, vec![12.0, 9.0]);
        assert_eq!(samples.treatment, vec![7.0]);
        assert_eq!(samples.group_column, "Группа A/B теста");
        assert_eq!(samples.count_column, "Количество заявок");
    }

    #[test]
    fn test_parse_semicolon_file() {
        let content = "Room;Group;Tickets\nR1;A;3,5\nR2;B;-\nR3;B;x\nR4;C;8\n";
        let samples = parse_groups(content).unwrap();

        assert_eq!(samples.delimiter, b';');
        assert_eq!(samples.control, vec![3.5]);
        assert_eq!(samples.treatment, vec![0.0, 0.0]);
    }

    #[test]
    fn test_missing_count_column() {
        let result = parse_groups("Room,Group\nR1,A\n");
        assert!(matches!(result, Err(ValidationError::MissingColumn("ticket count"))));
    }

    #[test]
    fn test_missing_group_column() {
        let result = parse_groups("Room,Tickets\nR1,4\n");
        assert!(matches!(result, Err(ValidationError::MissingColumn("group"))));
    }

    #[test]
    fn test_clean_numeric() {
        assert_eq!(clean_numeric("12"), 12.0);
        assert_eq!(clean_numeric(" 4,5 "), 4.5);
        assert_eq!(clean_numeric("-"), 0.0);
        assert_eq!(clean_numeric(""), 0.0);
        assert_eq!(clean_numeric("n/a"), 0.0);
    }

    #[test]
    fn test_load_groups_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("jira_aggregated_data.csv");
        std::fs::write(&path, AGGREGATED).unwrap();

        let samples = load_groups(&path).unwrap();
        assert_eq!(samples.control.len() + samples.treatment.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_groups("/nonexistent/jira_aggregated_data.csv");
        assert!(matches!(result, Err(ValidationError::Io(_))));
    }
}
