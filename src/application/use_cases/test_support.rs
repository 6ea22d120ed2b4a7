//! Fakes shared by the use case unit tests

use crate::compliance::domain::{InstanceId, InventoryObservation};
use crate::ports::outbound::{InventorySource, ProgressReporter};
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn id(value: &str) -> InstanceId {
    InstanceId::new(value.to_string()).unwrap()
}

pub fn observation(instance_id: &str, platform_name: &str) -> InventoryObservation {
    InventoryObservation::new(
        id(instance_id),
        Some("Linux".to_string()),
        Some(platform_name.to_string()),
    )
}

/// Inventory source returning a fixed list, or failing
pub struct FixedInventory {
    observations: Option<Vec<InventoryObservation>>,
    pub calls: AtomicUsize,
}

impl FixedInventory {
    pub fn new(observations: Vec<InventoryObservation>) -> Self {
        Self {
            observations: Some(observations),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            observations: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl InventorySource for FixedInventory {
    async fn fetch_all(&self) -> Result<Vec<InventoryObservation>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.observations {
            Some(observations) => Ok(observations.clone()),
            None => Err(crate::shared::error::ComplianceError::InventoryFetch {
                details: "AccessDeniedException".to_string(),
            }
            .into()),
        }
    }
}

/// Progress reporter that keeps every message
#[derive(Default)]
pub struct RecordingReporter {
    pub messages: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl ProgressReporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
