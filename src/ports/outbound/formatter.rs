use crate::compliance::domain::InstanceRecord;
use crate::shared::Result;

/// CatalogFormatter port for rendering catalog contents
///
/// This port abstracts the rendering of instance records into the
/// different output formats (terminal table, JSON, Markdown).
pub trait CatalogFormatter {
    /// Formats the given records
    ///
    /// # Arguments
    /// * `records` - Records to render, already in display order
    ///
    /// # Returns
    /// Formatted output as a string
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, records: &[InstanceRecord]) -> Result<String>;
}
