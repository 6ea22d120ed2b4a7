use super::DEFAULT_MAX_CONCURRENCY;
use crate::application::dto::{ScanOutcome, ScanReport};
use crate::compliance::domain::{
    InstanceId, RecordUpdate, ScanInvocationRequest, ScanSelection, DEFAULT_DOCUMENT_NAME,
};
use crate::compliance::policies::ScanProfiles;
use crate::ports::outbound::{InstanceCatalog, ProgressReporter, ScanInvoker};
use crate::shared::error::ComplianceError;
use crate::shared::Result;
use chrono::Utc;
use futures::stream::{self, StreamExt};
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;


/// RunScanUseCase - starts the compliance document on a set of instances
///
/// Every instance is invoked independently: a failure on one never blocks
/// or rolls back another. A started scan marks the record `InProgress` with
/// the returned command id and the current time.
///
/// # Type Parameters
/// * `I` - ScanInvoker implementation
/// * `C` - InstanceCatalog implementation
/// * `PR` - ProgressReporter implementation
pub struct RunScanUseCase<I, C, PR> {
    invoker: I,
    catalog: C,
    progress_reporter: PR,
    document_name: String,
    max_concurrency: usize,
}

impl<I, C, PR> RunScanUseCase<I, C, PR>
where
    I: ScanInvoker,
    C: InstanceCatalog,
    PR: ProgressReporter,
{
    pub fn new(invoker: I, catalog: C, progress_reporter: PR) -> Self {
        Self {
            invoker,
            catalog,
            progress_reporter,
            document_name: DEFAULT_DOCUMENT_NAME.to_string(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }

    pub fn with_document_name(mut self, document_name: impl Into<String>) -> Self {
        self.document_name = document_name.into();
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Runs a scan over `instance_ids`; duplicate ids are collapsed
    ///
    /// # Errors
    /// Returns [`ComplianceError::Validation`] if `os` or `benchmark` is
    /// empty, before any invocation. Per-instance failures are reported in
    /// the returned [`ScanReport`], not as an error.
    pub async fn run_scan(
        &self,
        instance_ids: &[InstanceId],
        os: &str,
        benchmark: &str,
    ) -> Result<ScanReport> {
        let selection = ScanSelection::new(os, benchmark)?;
        self.warn_unknown_profiles(&selection);

        let targets: BTreeSet<InstanceId> = instance_ids.iter().cloned().collect();
        let run_id = Uuid::new_v4();
        let span = info_span!("scan_run", %run_id);

        let report = async {
            let total = targets.len();
            info!(
                instances = total,
                os = selection.os(),
                benchmark = selection.benchmark(),
                "Starting scan run"
            );
            self.progress_reporter.report(&format!(
                "🛡️  Starting {} scan on {} instance(s)...",
                self.document_name, total
            ));

            let done = AtomicUsize::new(0);
            let outcomes: Vec<ScanOutcome> = stream::iter(targets)
                .map(|instance_id| {
                    let done = &done;
                    let selection = &selection;
                    async move {
                        let outcome = self.scan_instance(instance_id, selection).await;
                        let current = done.fetch_add(1, Ordering::SeqCst) + 1;
                        self.progress_reporter.report_progress(
                            current,
                            total,
                            Some(outcome.instance_id.as_str()),
                        );
                        outcome
                    }
                })
                .buffer_unordered(self.max_concurrency)
                .collect()
                .await;

            let report = ScanReport::new(run_id, outcomes);
            info!(
                started = report.started_count(),
                failed = report.failed_count(),
                "Scan run finished"
            );
            self.progress_reporter.report_completion(&format!(
                "✅ Scan started on {} of {} instance(s)",
                report.started_count(),
                report.outcomes.len()
            ));
            report
        }
        .instrument(span)
        .await;

        Ok(report)
    }

    async fn scan_instance(
        &self,
        instance_id: InstanceId,
        selection: &ScanSelection,
    ) -> ScanOutcome {
        match self.catalog.get(&instance_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                let reason = ComplianceError::InstanceNotFound {
                    instance_id: instance_id.to_string(),
                }
                .to_string();
                return self.not_started(instance_id, reason);
            }
            Err(e) => return self.not_started(instance_id, e.to_string()),
        }

        let request =
            ScanInvocationRequest::new(instance_id.as_str(), &self.document_name, selection);
        let result = self.invoker.invoke(request).await;

        let Some(command_id) = result.command_id() else {
            let reason = ComplianceError::Invocation {
                instance_id: instance_id.to_string(),
                status_code: result.status_code,
                details: result.body.clone(),
            }
            .to_string();
            return self.not_started(instance_id, reason);
        };
        let command_id = command_id.to_string();

        match self
            .catalog
            .update(
                &instance_id,
                RecordUpdate::scan_started(command_id.clone(), Utc::now()),
            )
            .await
        {
            Ok(_) => {
                info!(instance_id = %instance_id, command_id = %command_id, "Scan started");
                ScanOutcome::started(instance_id, command_id)
            }
            Err(e) => {
                let reason = format!(
                    "Scan {} started but the record was not updated: {}",
                    command_id, e
                );
                self.not_started(instance_id, reason)
            }
        }
    }

    fn not_started(&self, instance_id: InstanceId, reason: String) -> ScanOutcome {
        error!(instance_id = %instance_id, reason = %reason, "Scan not started");
        self.progress_reporter
            .report_error(&format!("❌ {}: {}", instance_id, reason));
        ScanOutcome::not_started(instance_id, reason)
    }

    fn warn_unknown_profiles(&self, selection: &ScanSelection) {
        if !ScanProfiles::is_known_os(selection.os()) {
            warn!(os = selection.os(), "OS content is not one of the known profiles");
        }
        if !ScanProfiles::is_known_benchmark(selection.benchmark()) {
            warn!(
                benchmark = selection.benchmark(),
                "Benchmark is not one of the known profiles"
            );
        }
    }
}
