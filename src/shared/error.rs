use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow wrappers and schedulers to distinguish a partially
/// failed scan run from a hard failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every requested operation completed
    Success = 0,
    /// At least one scan invocation did not start
    ScanFailures = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (inventory fetch, catalog I/O, configuration, validation, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ScanFailures => write!(f, "Scan Failures (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for inventory reconciliation and scan orchestration.
///
/// Every variant is handled at the boundary where it occurs; the binary maps
/// whatever reaches `main` to [`ExitCode::ApplicationError`].
#[derive(Debug, Error)]
pub enum ComplianceError {
    /// A required scan selection is missing. User-correctable.
    #[error("Validation error: {message}\n\n💡 Hint: Please select both OS and Benchmark (see `instance-compliance profiles`)")]
    Validation { message: String },

    #[error("Failed to fetch instances from the SSM inventory\nDetails: {details}\n\n💡 Hint: Check your AWS credentials, region and ssm:DescribeInstanceInformation permission")]
    InventoryFetch { details: String },

    #[error("Scan invocation failed for {instance_id} (status {status_code}): {details}")]
    Invocation {
        instance_id: String,
        status_code: u16,
        details: String,
    },

    #[error("Instance not found in catalog: {instance_id}\n\n💡 Hint: Run `instance-compliance refresh` to pull the current inventory")]
    InstanceNotFound { instance_id: String },

    #[error("Instance already exists in catalog: {instance_id}")]
    DuplicateInstance { instance_id: String },

    #[error("Catalog snapshot error: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    CatalogPersistence { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWrite { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}
