use crate::compliance::domain::InstanceRecord;
use crate::ports::outbound::CatalogFormatter;
use crate::shared::Result;

/// JsonFormatter adapter emitting the records as a pretty-printed JSON array
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogFormatter for JsonFormatter {
    fn format(&self, records: &[InstanceRecord]) -> Result<String> {
        let mut json = serde_json::to_string_pretty(records)
            .map_err(|e| anyhow::anyhow!("Failed to serialize records to JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
