pub mod instance;
pub mod scan;

pub use instance::{InstanceId, InstanceRecord, InventoryObservation, RecordUpdate, ScanStatus};
pub use scan::{
    ScanCommand, ScanInvocationRequest, ScanInvocationResult, ScanSelection, DEFAULT_DOCUMENT_NAME,
};
