//! instance-compliance - inventory and OpenSCAP scan orchestration for SSM-managed instances
//!
//! Mirrors the AWS Systems Manager inventory into a local instance catalog
//! and starts compliance scans on selected instances, recording the command
//! id each scan was started with.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`compliance`): Instance records, scan selections and invocation validation
//! - **Application Layer** (`application`): Reconcile and scan use cases, DTOs, factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): SSM clients, catalog stores, formatters, console output
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use instance_compliance::prelude::*;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<()> {
//! let client = build_ssm_client(&SsmSettings::default()).await;
//! let catalog = Arc::new(InMemoryInstanceCatalog::new());
//!
//! let reconcile = ReconcileInventoryUseCase::new(
//!     PaginatedInventorySource::new(SsmInventoryPageFetcher::new(client.clone())),
//!     catalog.clone(),
//!     StderrProgressReporter::new(),
//! );
//! reconcile.execute().await?;
//!
//! let scan = RunScanUseCase::new(
//!     SsmScanInvoker::new(SsmCommandSender::new(client)),
//!     catalog.clone(),
//!     StderrProgressReporter::new(),
//! );
//! let ids: Vec<InstanceId> = catalog
//!     .list()
//!     .await?
//!     .iter()
//!     .map(|r| r.instance_id().clone())
//!     .collect();
//! let report = scan
//!     .run_scan(&ids, "ssg-amzn2-ds.xml", "xccdf_org.ssgproject.content_profile_standard")
//!     .await?;
//! println!("{} scan(s) started", report.started_count());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod compliance;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::catalog::{
        InMemoryInstanceCatalog, PersistentInstanceCatalog,
    };
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TableFormatter,
    };
    pub use crate::adapters::outbound::ssm::{
        build_ssm_client, PaginatedInventorySource, SsmCommandSender, SsmInventoryPageFetcher,
        SsmScanInvoker, SsmSettings,
    };
    pub use crate::application::dto::{
        OutputFormat, ReconcileReport, ScanOutcome, ScanOutcomeStatus, ScanReport,
    };
    pub use crate::application::use_cases::{ReconcileInventoryUseCase, RunScanUseCase};
    pub use crate::compliance::domain::{
        InstanceId, InstanceRecord, InventoryObservation, RecordUpdate, ScanInvocationRequest,
        ScanInvocationResult, ScanSelection, ScanStatus,
    };
    pub use crate::compliance::policies::ScanProfiles;
    pub use crate::ports::outbound::{
        CatalogFormatter, CatalogSubscription, CommandSender, InstanceCatalog, InventorySource,
        OutputPresenter, ProgressReporter, ScanInvoker,
    };
    pub use crate::shared::Result;
}
