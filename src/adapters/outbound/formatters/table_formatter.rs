use super::cells::{self, COLUMNS, EMPTY_CATALOG};
use crate::compliance::domain::{InstanceRecord, ScanStatus};
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

const STATUS_COLUMN: usize = 4;

/// TableFormatter adapter for the terminal view of the catalog
///
/// Renders an aligned plain-text table. When colour is enabled the status
/// cell is drawn as a badge: Success green, Failed red, anything else blue.
pub struct TableFormatter {
    colored: bool,
}

impl TableFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn badge(&self, record: &InstanceRecord, padded: &str) -> String {
        if !self.colored {
            return padded.to_string();
        }
        match record.scan_status() {
            Some(ScanStatus::Success) => padded.green().to_string(),
            Some(ScanStatus::Failed) => padded.red().to_string(),
            _ => padded.blue().to_string(),
        }
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::plain()
    }
}

impl CatalogFormatter for TableFormatter {
    fn format(&self, records: &[InstanceRecord]) -> Result<String> {
        let mut output = String::new();
        output.push_str(&cells::header(records.len()));
        output.push('\n');

        if records.is_empty() {
            output.push('\n');
            output.push_str(EMPTY_CATALOG);
            output.push('\n');
            return Ok(output);
        }

        let rows: Vec<[String; 5]> = records.iter().map(cells::row).collect();

        let mut widths = COLUMNS.map(|c| c.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        output.push('\n');
        let header: Vec<String> = COLUMNS
            .iter()
            .zip(widths.iter())
            .map(|(name, width)| format!("{:<width$}", name, width = width))
            .collect();
        output.push_str(header.join("  ").trim_end());
        output.push('\n');

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        output.push_str(&rule.join("  "));
        output.push('\n');

        for (record, row) in records.iter().zip(rows.iter()) {
            let line: Vec<String> = row
                .iter()
                .zip(widths.iter())
                .enumerate()
                .map(|(column, (cell, width))| {
                    let padded = format!("{:<width$}", cell, width = width);
                    if column == STATUS_COLUMN {
                        self.badge(record, &padded)
                    } else {
                        padded
                    }
                })
                .collect();
            output.push_str(line.join("  ").trim_end());
            output.push('\n');
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::domain::{InstanceId, InventoryObservation, RecordUpdate};
    use chrono::Utc;

    fn record(id: &str, name: Option<&str>) -> InstanceRecord {
        InstanceRecord::from_observation(InventoryObservation::new(
            InstanceId::new(id.to_string()).unwrap(),
            Some("Linux".to_string()),
            name.map(str::to_string),
        ))
    }

    #[test]
    fn test_empty_catalog() {
        let output = TableFormatter::plain().format(&[]).unwrap();
        assert!(output.starts_with("Instances (0)"));
        assert!(output.contains("No EC2 Instances"));
        assert!(!output.contains("Instance ID"));
    }

    #[test]
    fn test_columns_and_rows() {
        let mut scanned = record("i-2", Some("Amazon Linux"));
        scanned.apply(RecordUpdate::scan_started("cmd-42".to_string(), Utc::now()));
        let records = vec![record("i-1", Some("Red Hat Enterprise Linux")), scanned];

        let output = TableFormatter::plain().format(&records).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Instances (2)");
        for column in COLUMNS {
            assert!(lines[2].contains(column));
        }
        assert!(lines[4].starts_with("i-1"));
        assert!(lines[4].contains("N/A"));
        assert!(lines[5].contains("cmd-42"));
        assert!(lines[5].ends_with("InProgress"));
    }

    #[test]
    fn test_columns_are_aligned() {
        let records = vec![
            record("i-1", Some("A")),
            record("i-0123456789abcdef0", Some("Amazon Linux")),
        ];
        let output = TableFormatter::plain().format(&records).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        let platform_at = lines[2].find("Platform Name").unwrap();
        assert_eq!(lines[4].find('A'), Some(platform_at));
        assert_eq!(lines[5].find("Amazon Linux"), Some(platform_at));
    }

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let output = TableFormatter::plain()
            .format(&[record("i-1", None)])
            .unwrap();
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_colored_status_badge() {
        let output = TableFormatter::new(true)
            .format(&[record("i-1", None)])
            .unwrap();
        assert!(output.contains('\u{1b}'));
    }
}
