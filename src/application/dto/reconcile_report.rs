use crate::compliance::domain::InstanceId;

/// A single observation that could not be written to the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertFailure {
    pub instance_id: InstanceId,
    pub reason: String,
}

/// ReconcileReport - summary of one inventory reconciliation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Observations returned by the inventory source
    pub observed: usize,
    /// Records created for previously unseen instances
    pub created: usize,
    /// Existing records whose inventory fields were overwritten
    pub updated: usize,
    pub failures: Vec<UpsertFailure>,
}

impl ReconcileReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

impl std::fmt::Display for ReconcileReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} observed, {} created, {} updated, {} failed",
            self.observed,
            self.created,
            self.updated,
            self.failed()
        )
    }
}
