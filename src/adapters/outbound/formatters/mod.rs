/// Formatter adapters for the catalog output formats
mod cells;
mod json_formatter;
mod markdown_formatter;
mod table_formatter;

pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
pub use table_formatter::TableFormatter;
