use crate::compliance::domain::InstanceId;
use uuid::Uuid;

/// Whether the scan document was started on an instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcomeStatus {
    Started { command_id: String },
    NotStarted { reason: String },
}

/// ScanOutcome - per-instance result of a scan run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub instance_id: InstanceId,
    pub status: ScanOutcomeStatus,
}

impl ScanOutcome {
    pub fn started(instance_id: InstanceId, command_id: String) -> Self {
        Self {
            instance_id,
            status: ScanOutcomeStatus::Started { command_id },
        }
    }

    pub fn not_started(instance_id: InstanceId, reason: String) -> Self {
        Self {
            instance_id,
            status: ScanOutcomeStatus::NotStarted { reason },
        }
    }

    pub fn is_started(&self) -> bool {
        matches!(self.status, ScanOutcomeStatus::Started { .. })
    }

    pub fn command_id(&self) -> Option<&str> {
        match &self.status {
            ScanOutcomeStatus::Started { command_id } => Some(command_id),
            ScanOutcomeStatus::NotStarted { .. } => None,
        }
    }
}

/// ScanReport - result of one scan run, outcomes ordered by instance id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Correlation id attached to every log line of the run
    pub run_id: Uuid,
    pub outcomes: Vec<ScanOutcome>,
}

impl ScanReport {
    pub fn new(run_id: Uuid, mut outcomes: Vec<ScanOutcome>) -> Self {
        outcomes.sort_by(|a, b| a.instance_id.cmp(&b.instance_id));
        Self { run_id, outcomes }
    }

    pub fn started_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_started()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.started_count()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    pub fn outcome(&self, instance_id: &InstanceId) -> Option<&ScanOutcome> {
        self.outcomes.iter().find(|o| &o.instance_id == instance_id)
    }
}
