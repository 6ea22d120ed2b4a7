use super::cells::{self, COLUMNS, EMPTY_CATALOG};
use crate::compliance::domain::InstanceRecord;
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;

/// MarkdownFormatter adapter rendering the catalog as a pipe table
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for MarkdownFormatter {
    fn format(&self, records: &[InstanceRecord]) -> Result<String> {
        let mut output = format!("## {}\n\n", cells::header(records.len()));

        if records.is_empty() {
            output.push_str(EMPTY_CATALOG);
            output.push('\n');
            return Ok(output);
        }

        output.push_str(&format!("| {} |\n", COLUMNS.join(" | ")));
        let separator: Vec<String> = COLUMNS.iter().map(|c| "-".repeat(c.len())).collect();
        output.push_str(&format!("|{}|\n", separator.join("|")));

        for record in records {
            let row: Vec<String> = cells::row(record)
                .iter()
                .map(|cell| Self::escape_markdown_table_cell(cell))
                .collect();
            output.push_str(&format!("| {} |\n", row.join(" | ")));
        }

        Ok(output)
    }
}
