/// Mock implementations for testing
mod mock_command_sender;
mod mock_inventory;
mod mock_progress_reporter;
mod mock_scan_invoker;

pub use mock_command_sender::MockCommandSender;
pub use mock_inventory::MockInventoryPageFetcher;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_scan_invoker::MockScanInvoker;
