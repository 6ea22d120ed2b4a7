/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (SSM, catalog storage, console, files).
pub mod command_sender;
pub mod formatter;
pub mod instance_catalog;
pub mod inventory_source;
pub mod output_presenter;
pub mod progress_reporter;
pub mod scan_invoker;

pub use command_sender::CommandSender;
pub use formatter::CatalogFormatter;
pub use instance_catalog::{CatalogSnapshot, CatalogSubscription, InstanceCatalog};
pub use inventory_source::{InventoryPage, InventoryPageFetcher, InventorySource};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use scan_invoker::ScanInvoker;
