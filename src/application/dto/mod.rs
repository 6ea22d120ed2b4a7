/// Data Transfer Objects for application layer
///
/// DTOs carry use case results out to the CLI, keeping the domain layer
/// isolated from presentation.
mod output_format;
mod reconcile_report;
mod scan_report;

pub use output_format::OutputFormat;
pub use reconcile_report::{ReconcileReport, UpsertFailure};
pub use scan_report::{ScanOutcome, ScanOutcomeStatus, ScanReport};
