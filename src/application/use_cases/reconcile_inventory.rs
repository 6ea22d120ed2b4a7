use super::DEFAULT_MAX_CONCURRENCY;
use crate::application::dto::{ReconcileReport, UpsertFailure};
use crate::compliance::domain::{InstanceRecord, InventoryObservation, RecordUpdate};
use crate::ports::outbound::{InstanceCatalog, InventorySource, ProgressReporter};
use crate::shared::error::ComplianceError;
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, error, info, warn};

enum Upsert {
    Created,
    Updated,
}

/// ReconcileInventoryUseCase - mirrors the agent inventory into the catalog
///
/// Unseen instances get a new record with scan fields empty; known ones get
/// only their inventory fields overwritten. Safe to run repeatedly or
/// concurrently with itself and with scan runs.
///
/// # Type Parameters
/// * `S` - InventorySource implementation
/// * `C` - InstanceCatalog implementation
/// * `PR` - ProgressReporter implementation
pub struct ReconcileInventoryUseCase<S, C, PR> {
    inventory: S,
    catalog: C,
    progress_reporter: PR,
    max_concurrency: usize,
}

impl<S, C, PR> ReconcileInventoryUseCase<S, C, PR>
where
    S: InventorySource,
    C: InstanceCatalog,
    PR: ProgressReporter,
{
    pub fn new(inventory: S, catalog: C, progress_reporter: PR) -> Self {
        Self {
            inventory,
            catalog,
            progress_reporter,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Executes one reconciliation pass
    ///
    /// # Errors
    /// Returns [`ComplianceError::InventoryFetch`] if the inventory cannot be
    /// enumerated; the catalog is not touched in that case. Individual upsert
    /// failures do not abort the pass and are listed in the report.
    pub async fn execute(&self) -> Result<ReconcileReport> {
        self.progress_reporter
            .report("🔄 Fetching instances from the SSM inventory...");

        let observations = match self.inventory.fetch_all().await {
            Ok(observations) => observations,
            Err(e) => {
                error!(error = %e, "Inventory reconciliation aborted");
                self.progress_reporter
                    .report_error("❌ Error fetching instances");
                return Err(e);
            }
        };

        let total = observations.len();
        self.progress_reporter
            .report(&format!("✅ Found {} instance(s)", total));

        let done = AtomicUsize::new(0);
        let results: Vec<(InventoryObservation, Result<Upsert>)> = stream::iter(observations)
            .map(|observation| {
                let done = &done;
                async move {
                    let result = self.upsert(&observation).await;
                    let current = done.fetch_add(1, Ordering::SeqCst) + 1;
                    self.progress_reporter.report_progress(
                        current,
                        total,
                        Some(observation.instance_id.as_str()),
                    );
                    (observation, result)
                }
            })
            .buffer_unordered(self.max_concurrency)
            .collect()
            .await;

        let mut report = ReconcileReport {
            observed: total,
            ..ReconcileReport::default()
        };

        for (observation, result) in results {
            match result {
                Ok(Upsert::Created) => report.created += 1,
                Ok(Upsert::Updated) => report.updated += 1,
                Err(e) => {
                    warn!(instance_id = %observation.instance_id, error = %e, "Upsert failed");
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Failed to store {}: {}",
                        observation.instance_id, e
                    ));
                    report.failures.push(UpsertFailure {
                        instance_id: observation.instance_id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            observed = report.observed,
            created = report.created,
            updated = report.updated,
            failed = report.failed(),
            "Inventory reconciled"
        );
        self.progress_reporter
            .report_completion(&format!("✅ Inventory refreshed: {}", report));

        Ok(report)
    }

    /// Creates the record, or overwrites the inventory fields if it already exists
    async fn upsert(&self, observation: &InventoryObservation) -> Result<Upsert> {
        let record = InstanceRecord::from_observation(observation.clone());
        match self.catalog.create(record).await {
            Ok(()) => {
                debug!(instance_id = %observation.instance_id, "Created record");
                Ok(Upsert::Created)
            }
            Err(e) if is_duplicate(&e) => {
                self.catalog
                    .update(&observation.instance_id, RecordUpdate::inventory(observation))
                    .await?;
                debug!(instance_id = %observation.instance_id, "Updated inventory fields");
                Ok(Upsert::Updated)
            }
            Err(e) => Err(e),
        }
    }
}

fn is_duplicate(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<ComplianceError>(),
        Some(ComplianceError::DuplicateInstance { .. })
    )
}
