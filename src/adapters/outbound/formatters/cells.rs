//! Cell values shared by the tabular formatters

use crate::compliance::domain::InstanceRecord;
use chrono::{DateTime, Local, Utc};

pub(super) const NOT_AVAILABLE: &str = "N/A";
pub(super) const EMPTY_CATALOG: &str = "No EC2 Instances";

pub(super) const COLUMNS: [&str; 5] = [
    "Instance ID",
    "Platform Name",
    "Last Scan Time",
    "Run Command ID",
    "Scan Status",
];

pub(super) fn header(count: usize) -> String {
    format!("Instances ({})", count)
}

/// Scan times are shown in the operator's local zone
pub(super) fn scan_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| {
        t.with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    })
    .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub(super) fn row(record: &InstanceRecord) -> [String; 5] {
    [
        record.instance_id().to_string(),
        record.platform_name().unwrap_or("").to_string(),
        scan_time(record.last_scan_time()),
        record.command_id().unwrap_or("").to_string(),
        record
            .scan_status()
            .map(|s| s.as_str().to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
    ]
}
