use crate::compliance::domain::{InstanceId, InstanceRecord, RecordUpdate};
use crate::ports::outbound::{CatalogSnapshot, CatalogSubscription, InstanceCatalog};
use crate::shared::error::ComplianceError;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::watch;

/// InMemoryInstanceCatalog adapter holding records in a concurrent map
///
/// Every successful mutation publishes a fresh sorted snapshot on a watch
/// channel. Snapshots are rebuilt inside the channel's write lock, so the
/// last published snapshot always reflects every completed mutation.
pub struct InMemoryInstanceCatalog {
    records: DashMap<InstanceId, InstanceRecord>,
    snapshots: watch::Sender<CatalogSnapshot>,
}

impl InMemoryInstanceCatalog {
    pub fn new() -> Self {
        let (snapshots, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            records: DashMap::new(),
            snapshots,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn sorted_records(&self) -> Vec<InstanceRecord> {
        let mut records: Vec<InstanceRecord> =
            self.records.iter().map(|entry| entry.value().clone()).collect();
        records.sort_by(|a, b| a.instance_id().cmp(b.instance_id()));
        records
    }

    // Callers must not hold a map guard here.
    fn publish(&self) {
        self.snapshots
            .send_modify(|snapshot| *snapshot = Arc::new(self.sorted_records()));
    }
}

impl Default for InMemoryInstanceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InstanceCatalog for InMemoryInstanceCatalog {
    async fn create(&self, record: InstanceRecord) -> Result<()> {
        match self.records.entry(record.instance_id().clone()) {
            Entry::Occupied(entry) => {
                return Err(ComplianceError::DuplicateInstance {
                    instance_id: entry.key().to_string(),
                }
                .into());
            }
            Entry::Vacant(entry) => {
                entry.insert(record);
            }
        }

        self.publish();
        Ok(())
    }

    async fn update(
        &self,
        instance_id: &InstanceId,
        update: RecordUpdate,
    ) -> Result<InstanceRecord> {
        let updated = {
            let mut record = self.records.get_mut(instance_id).ok_or_else(|| {
                ComplianceError::InstanceNotFound {
                    instance_id: instance_id.to_string(),
                }
            })?;
            record.apply(update);
            record.clone()
        };

        self.publish();
        Ok(updated)
    }

    async fn get(&self, instance_id: &InstanceId) -> Result<Option<InstanceRecord>> {
        Ok(self.records.get(instance_id).map(|r| r.value().clone()))
    }

    async fn list(&self) -> Result<Vec<InstanceRecord>> {
        Ok(self.sorted_records())
    }

    fn subscribe(&self) -> CatalogSubscription {
        CatalogSubscription::new(self.snapshots.subscribe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::domain::{InventoryObservation, ScanStatus};
    use chrono::Utc;
    use futures::StreamExt;

    fn id(value: &str) -> InstanceId {
        InstanceId::new(value.to_string()).unwrap()
    }

    fn record(instance_id: &str, platform_name: &str) -> InstanceRecord {
        InstanceRecord::from_observation(InventoryObservation::new(
            id(instance_id),
            Some("Linux".to_string()),
            Some(platform_name.to_string()),
        ))
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let catalog = InMemoryInstanceCatalog::new();
        catalog.create(record("i-1", "Amazon Linux 2")).await.unwrap();

        let fetched = catalog.get(&id("i-1")).await.unwrap().unwrap();
        assert_eq!(fetched.platform_name(), Some("Amazon Linux 2"));
        assert!(catalog.get(&id("i-2")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_rejected() {
        let catalog = InMemoryInstanceCatalog::new();
        catalog.create(record("i-1", "Amazon Linux 2")).await.unwrap();

        let err = catalog.create(record("i-1", "RHEL 7")).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ComplianceError>(),
            Some(ComplianceError::DuplicateInstance { .. })
        ));
        assert_eq!(catalog.len(), 1);
        let kept = catalog.get(&id("i-1")).await.unwrap().unwrap();
        assert_eq!(kept.platform_name(), Some("Amazon Linux 2"));
    }

    #[tokio::test]
    async fn test_update_missing_record() {
        let catalog = InMemoryInstanceCatalog::new();
        let err = catalog
            .update(
                &id("i-404"),
                RecordUpdate::scan_started("cmd-1".to_string(), Utc::now()),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ComplianceError>(),
            Some(ComplianceError::InstanceNotFound { .. })
        ));
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_update_applies_field_group() {
        let catalog = InMemoryInstanceCatalog::new();
        catalog.create(record("i-1", "Amazon Linux 2")).await.unwrap();

        let updated = catalog
            .update(
                &id("i-1"),
                RecordUpdate::scan_started("cmd-9".to_string(), Utc::now()),
            )
            .await
            .unwrap();

        assert_eq!(updated.scan_status(), Some(ScanStatus::InProgress));
        assert_eq!(updated.platform_name(), Some("Amazon Linux 2"));
    }

    #[tokio::test]
    async fn test_list_sorted_by_id() {
        let catalog = InMemoryInstanceCatalog::new();
        catalog.create(record("i-c", "c")).await.unwrap();
        catalog.create(record("i-a", "a")).await.unwrap();
        catalog.create(record("i-b", "b")).await.unwrap();

        let ids: Vec<String> = catalog
            .list()
            .await
            .unwrap()
            .iter()
            .map(|r| r.instance_id().to_string())
            .collect();
        assert_eq!(ids, vec!["i-a", "i-b", "i-c"]);
    }

    #[tokio::test]
    async fn test_subscribe_delivers_current_snapshot_first() {
        let catalog = InMemoryInstanceCatalog::new();
        catalog.create(record("i-1", "Amazon Linux 2")).await.unwrap();

        let mut subscription = catalog.subscribe();
        let first = subscription.next().await.unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].instance_id().as_str(), "i-1");
    }

    #[tokio::test]
    async fn test_subscribe_observes_mutations() {
        let catalog = InMemoryInstanceCatalog::new();
        let mut subscription = catalog.subscribe();
        assert!(subscription.next().await.unwrap().is_empty());

        catalog.create(record("i-1", "Amazon Linux 2")).await.unwrap();
        let snapshot = subscription.next().await.unwrap();
        assert_eq!(snapshot.len(), 1);

        catalog
            .update(
                &id("i-1"),
                RecordUpdate::scan_started("cmd-1".to_string(), Utc::now()),
            )
            .await
            .unwrap();
        let snapshot = subscription.next().await.unwrap();
        assert_eq!(snapshot[0].command_id(), Some("cmd-1"));
    }

    #[tokio::test]
    async fn test_failed_mutation_does_not_publish() {
        let catalog = InMemoryInstanceCatalog::new();
        catalog.create(record("i-1", "a")).await.unwrap();
        let mut subscription = catalog.subscribe();
        subscription.next().await.unwrap();

        let _ = catalog.create(record("i-1", "b")).await;

        let pending = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            subscription.next(),
        )
        .await;
        assert!(pending.is_err());
    }
}
