use crate::shared::error::ComplianceError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// SSM document that runs the OpenSCAP evaluation on the target instance
pub const DEFAULT_DOCUMENT_NAME: &str = "OpenSCAPDocument";

/// Document parameter carrying the SCAP datastream file for the target OS
pub const OS_PARAMETER: &str = "OS";

/// Document parameter carrying the XCCDF profile id
pub const BENCHMARK_PARAMETER: &str = "Benchmark";

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// OS content + benchmark pair chosen for a scan run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSelection {
    os: String,
    benchmark: String,
}

impl ScanSelection {
    /// Creates a selection, rejecting empty or whitespace-only values
    ///
    /// # Errors
    /// Returns [`ComplianceError::Validation`] if either value is missing
    pub fn new(os: &str, benchmark: &str) -> Result<Self> {
        let os = os.trim();
        let benchmark = benchmark.trim();

        if os.is_empty() || benchmark.is_empty() {
            let missing = match (os.is_empty(), benchmark.is_empty()) {
                (true, true) => "OS and Benchmark are required",
                (true, false) => "OS is required",
                _ => "Benchmark is required",
            };
            return Err(ComplianceError::Validation {
                message: missing.to_string(),
            }
            .into());
        }

        Ok(Self {
            os: os.to_string(),
            benchmark: benchmark.to_string(),
        })
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn benchmark(&self) -> &str {
        &self.benchmark
    }
}

/// Arguments of the scan invocation query
///
/// Field names match the query arguments on the wire. Every field is
/// optional here because presence is checked by the invoker itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanInvocationRequest {
    #[serde(rename = "InstanceId", default)]
    pub instance_id: Option<String>,
    #[serde(rename = "DocumentName", default)]
    pub document_name: Option<String>,
    #[serde(rename = "OS", default)]
    pub os: Option<String>,
    #[serde(rename = "Benchmark", default)]
    pub benchmark: Option<String>,
}

impl ScanInvocationRequest {
    pub fn new(
        instance_id: &str,
        document_name: &str,
        selection: &ScanSelection,
    ) -> Self {
        Self {
            instance_id: Some(instance_id.to_string()),
            document_name: Some(document_name.to_string()),
            os: Some(selection.os().to_string()),
            benchmark: Some(selection.benchmark().to_string()),
        }
    }
}

/// Validated invocation ready to be handed to the command-invocation API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCommand {
    pub instance_id: String,
    pub document_name: String,
    pub os: String,
    pub benchmark: String,
}

impl ScanCommand {
    /// Document parameters in the shape SendCommand expects: `{OS: [os], Benchmark: [benchmark]}`
    pub fn parameters(&self) -> HashMap<String, Vec<String>> {
        HashMap::from([
            (OS_PARAMETER.to_string(), vec![self.os.clone()]),
            (BENCHMARK_PARAMETER.to_string(), vec![self.benchmark.clone()]),
        ])
    }
}

/// HTTP-style outcome of one scan invocation
///
/// On success the body is the command id; otherwise it is a human-readable
/// error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanInvocationResult {
    pub status_code: u16,
    pub body: String,
}

impl ScanInvocationResult {
    pub fn started(command_id: String) -> Self {
        Self {
            status_code: STATUS_OK,
            body: command_id,
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self {
            status_code: STATUS_BAD_REQUEST,
            body: message.to_string(),
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            status_code: STATUS_INTERNAL_ERROR,
            body: message.to_string(),
        }
    }

    /// Returns the command id if the scan actually started
    ///
    /// A 200 with an empty body is treated as not started.
    pub fn command_id(&self) -> Option<&str> {
        if self.status_code == STATUS_OK && !self.body.trim().is_empty() {
            Some(self.body.trim())
        } else {
            None
        }
    }
}
