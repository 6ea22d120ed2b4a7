use crate::compliance::domain::{ScanCommand, ScanInvocationRequest};

pub const MISSING_INSTANCE_ID: &str = "Missing InstanceID";
pub const MISSING_DOCUMENT_NAME: &str = "Missing Document Name";
pub const MISSING_OS: &str = "Missing OS";
pub const MISSING_BENCHMARK: &str = "Missing Benchmark";

/// InvocationValidator service for checking scan invocation arguments
///
/// Checks run in a fixed order and only the first failure is reported:
/// instance id, document name, OS, benchmark. Absent and empty values are
/// both treated as missing.
pub struct InvocationValidator;

impl InvocationValidator {
    /// Validates the request and produces a [`ScanCommand`]
    ///
    /// # Returns
    /// The validated command, or the 400 message for the first missing field
    pub fn validate(request: &ScanInvocationRequest) -> Result<ScanCommand, &'static str> {
        let instance_id = Self::required(&request.instance_id, MISSING_INSTANCE_ID)?;
        let document_name = Self::required(&request.document_name, MISSING_DOCUMENT_NAME)?;
        let os = Self::required(&request.os, MISSING_OS)?;
        let benchmark = Self::required(&request.benchmark, MISSING_BENCHMARK)?;

        Ok(ScanCommand {
            instance_id,
            document_name,
            os,
            benchmark,
        })
    }

    fn required(value: &Option<String>, message: &'static str) -> Result<String, &'static str> {
        match value.as_deref() {
            Some(v) if !v.is_empty() => Ok(v.to_string()),
            _ => Err(message),
        }
    }
}
