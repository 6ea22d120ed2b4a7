use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter, TableFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::CatalogFormatter;

/// Factory for creating catalog formatters
///
/// Encapsulates the choice of formatter adapter for an output format. It
/// belongs in the application layer as it selects infrastructure adapters
/// based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `colored` - Whether the table view may use ANSI colours
    ///
    /// # Examples
    /// ```
    /// use instance_compliance::application::dto::OutputFormat;
    /// use instance_compliance::application::factories::FormatterFactory;
    /// use instance_compliance::ports::outbound::CatalogFormatter;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// assert_eq!(formatter.format(&[]).unwrap().trim(), "[]");
    /// ```
    pub fn create(
        format: OutputFormat,
        colored: bool,
    ) -> Box<dyn CatalogFormatter + Send + Sync> {
        match format {
            OutputFormat::Table => Box::new(TableFormatter::new(colored)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }
}
