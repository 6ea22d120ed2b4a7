//! AWS Systems Manager adapters

mod client;
mod command_sender;
mod inventory;
mod scan_invoker;

pub use client::{build_ssm_client, SsmSettings};
pub use command_sender::SsmCommandSender;
pub use inventory::{PaginatedInventorySource, SsmInventoryPageFetcher};
pub use scan_invoker::{SsmScanInvoker, INVOKE_FAILED, MISSING_COMMAND_ID};
