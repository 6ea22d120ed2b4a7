/// Use cases module containing application business logic orchestration
mod reconcile_inventory;
mod run_scan;

#[cfg(test)]
mod test_support;

pub use reconcile_inventory::ReconcileInventoryUseCase;
pub use run_scan::RunScanUseCase;

/// Default bound on concurrently dispatched catalog upserts and scan invocations
pub const DEFAULT_MAX_CONCURRENCY: usize = 10;
