use crate::shared::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length for instance ids (security limit)
const MAX_INSTANCE_ID_LENGTH: usize = 128;

/// NewType wrapper for a managed instance id with validation
///
/// Accepts EC2 ids (`i-...`) as well as hybrid managed-node ids (`mi-...`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InstanceId(String);

impl InstanceId {
    pub fn new(id: String) -> Result<Self> {
        if id.is_empty() {
            anyhow::bail!("Instance id cannot be empty");
        }

        if id.len() > MAX_INSTANCE_ID_LENGTH {
            anyhow::bail!(
                "Instance id is too long ({} bytes). Maximum allowed: {} bytes",
                id.len(),
                MAX_INSTANCE_ID_LENGTH
            );
        }

        // Ids end up in SendCommand targets and file snapshots
        if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            anyhow::bail!(
                "Instance id '{}' contains invalid characters. Only ASCII alphanumerics and hyphens are allowed.",
                id
            );
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for InstanceId {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<InstanceId> for String {
    fn from(id: InstanceId) -> Self {
        id.0
    }
}

impl FromStr for InstanceId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.to_string())
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scan lifecycle label shown next to each instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanStatus {
    Success,
    Failed,
    InProgress,
}

impl ScanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStatus::Success => "Success",
            ScanStatus::Failed => "Failed",
            ScanStatus::InProgress => "InProgress",
        }
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Success" => Ok(ScanStatus::Success),
            "Failed" => Ok(ScanStatus::Failed),
            "InProgress" => Ok(ScanStatus::InProgress),
            _ => Err(format!(
                "Invalid scan status: {}. Expected Success, Failed or InProgress",
                s
            )),
        }
    }
}

/// One instance as reported by the agent inventory. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryObservation {
    pub instance_id: InstanceId,
    pub platform_type: Option<String>,
    pub platform_name: Option<String>,
}

impl InventoryObservation {
    pub fn new(
        instance_id: InstanceId,
        platform_type: Option<String>,
        platform_name: Option<String>,
    ) -> Self {
        Self {
            instance_id,
            platform_type,
            platform_name,
        }
    }
}

/// Partial update of an [`InstanceRecord`], scoped to one field group
///
/// The Reconciler only ever writes the inventory group and the scan
/// orchestrator only ever writes the scan group, so concurrent writers never
/// touch the same field.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordUpdate {
    Inventory {
        platform_type: Option<String>,
        platform_name: Option<String>,
    },
    ScanStarted {
        command_id: String,
        started_at: DateTime<Utc>,
    },
}

impl RecordUpdate {
    pub fn inventory(observation: &InventoryObservation) -> Self {
        RecordUpdate::Inventory {
            platform_type: observation.platform_type.clone(),
            platform_name: observation.platform_name.clone(),
        }
    }

    pub fn scan_started(command_id: String, started_at: DateTime<Utc>) -> Self {
        RecordUpdate::ScanStarted {
            command_id,
            started_at,
        }
    }
}

/// InstanceRecord entity: one managed instance in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceRecord {
    instance_id: InstanceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    platform_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    platform_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_scan_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    command_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scan_status: Option<ScanStatus>,
}

impl InstanceRecord {
    /// Creates a record with inventory fields populated and scan fields absent
    pub fn from_observation(observation: InventoryObservation) -> Self {
        Self {
            instance_id: observation.instance_id,
            platform_type: observation.platform_type,
            platform_name: observation.platform_name,
            last_scan_time: None,
            command_id: None,
            scan_status: None,
        }
    }

    /// Applies a field-group update; fields outside the group are untouched
    pub fn apply(&mut self, update: RecordUpdate) {
        match update {
            RecordUpdate::Inventory {
                platform_type,
                platform_name,
            } => {
                self.platform_type = platform_type;
                self.platform_name = platform_name;
            }
            RecordUpdate::ScanStarted {
                command_id,
                started_at,
            } => {
                self.last_scan_time = Some(started_at);
                self.command_id = Some(command_id);
                self.scan_status = Some(ScanStatus::InProgress);
            }
        }
    }

    pub fn instance_id(&self) -> &InstanceId {
        &self.instance_id
    }

    pub fn platform_type(&self) -> Option<&str> {
        self.platform_type.as_deref()
    }

    pub fn platform_name(&self) -> Option<&str> {
        self.platform_name.as_deref()
    }

    pub fn last_scan_time(&self) -> Option<DateTime<Utc>> {
        self.last_scan_time
    }

    pub fn command_id(&self) -> Option<&str> {
        self.command_id.as_deref()
    }

    pub fn scan_status(&self) -> Option<ScanStatus> {
        self.scan_status
    }
}
