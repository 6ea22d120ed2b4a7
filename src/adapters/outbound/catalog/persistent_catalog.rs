use crate::adapters::outbound::filesystem::CatalogSnapshotFile;
use crate::compliance::domain::{InstanceId, InstanceRecord, RecordUpdate};
use crate::ports::outbound::{CatalogSubscription, InstanceCatalog};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::sync::Mutex;
use tracing::debug;

/// PersistentInstanceCatalog wraps an InstanceCatalog and mirrors it to disk.
///
/// Decorator over any catalog: reads go straight to the inner store, and
/// every successful mutation rewrites the JSON snapshot. Snapshot writes are
/// serialized so the file always ends up matching the latest in-memory state.
pub struct PersistentInstanceCatalog<C: InstanceCatalog> {
    inner: C,
    snapshot: CatalogSnapshotFile,
    write_lock: Mutex<()>,
}

impl<C: InstanceCatalog> PersistentInstanceCatalog<C> {
    /// Opens the snapshot at `path` and loads its records into `inner`
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be read or parsed, or if it
    /// contains the same instance id twice
    pub async fn open(inner: C, path: PathBuf) -> Result<Self> {
        let snapshot = CatalogSnapshotFile::new(path);
        let records = snapshot.read()?;
        let count = records.len();

        for record in records {
            inner.create(record).await?;
        }

        debug!(path = %snapshot.path().display(), records = count, "Loaded catalog snapshot");

        Ok(Self {
            inner,
            snapshot,
            write_lock: Mutex::new(()),
        })
    }

    async fn persist(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let records = self.inner.list().await?;
        self.snapshot.write(&records)
    }

    /// Returns the wrapped catalog (for testing/inspection)
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

#[async_trait]
impl<C: InstanceCatalog> InstanceCatalog for PersistentInstanceCatalog<C> {
    async fn create(&self, record: InstanceRecord) -> Result<()> {
        self.inner.create(record).await?;
        self.persist().await
    }

    async fn update(
        &self,
        instance_id: &InstanceId,
        update: RecordUpdate,
    ) -> Result<InstanceRecord> {
        let updated = self.inner.update(instance_id, update).await?;
        self.persist().await?;
        Ok(updated)
    }

    async fn get(&self, instance_id: &InstanceId) -> Result<Option<InstanceRecord>> {
        self.inner.get(instance_id).await
    }

    async fn list(&self) -> Result<Vec<InstanceRecord>> {
        self.inner.list().await
    }

    fn subscribe(&self) -> CatalogSubscription {
        self.inner.subscribe()
    }
}
