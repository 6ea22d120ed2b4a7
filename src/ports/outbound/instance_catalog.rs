use crate::compliance::domain::{InstanceId, InstanceRecord, RecordUpdate};
use crate::shared::Result;
use async_trait::async_trait;
use futures::stream::{BoxStream, Stream, StreamExt};
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Full catalog contents at one point in time, sorted by instance id
pub type CatalogSnapshot = Arc<Vec<InstanceRecord>>;

/// InstanceCatalog port for the persisted instance collection
///
/// Records are keyed by [`InstanceId`]. Mutations are either a create of a
/// brand-new record or a field-group update of an existing one; nothing
/// deletes records.
#[async_trait]
pub trait InstanceCatalog: Send + Sync {
    /// Inserts a new record
    ///
    /// # Errors
    /// Returns [`crate::shared::error::ComplianceError::DuplicateInstance`]
    /// if a record with the same id already exists
    async fn create(&self, record: InstanceRecord) -> Result<()>;

    /// Applies a field-group update to an existing record and returns the result
    ///
    /// # Errors
    /// Returns [`crate::shared::error::ComplianceError::InstanceNotFound`]
    /// if no record has this id
    async fn update(&self, instance_id: &InstanceId, update: RecordUpdate)
        -> Result<InstanceRecord>;

    async fn get(&self, instance_id: &InstanceId) -> Result<Option<InstanceRecord>>;

    /// Returns all records sorted by instance id
    async fn list(&self) -> Result<Vec<InstanceRecord>>;

    /// Opens a live subscription; the current snapshot is delivered first
    fn subscribe(&self) -> CatalogSubscription;
}

#[async_trait]
impl<T: InstanceCatalog + ?Sized> InstanceCatalog for Arc<T> {
    async fn create(&self, record: InstanceRecord) -> Result<()> {
        (**self).create(record).await
    }

    async fn update(
        &self,
        instance_id: &InstanceId,
        update: RecordUpdate,
    ) -> Result<InstanceRecord> {
        (**self).update(instance_id, update).await
    }

    async fn get(&self, instance_id: &InstanceId) -> Result<Option<InstanceRecord>> {
        (**self).get(instance_id).await
    }

    async fn list(&self) -> Result<Vec<InstanceRecord>> {
        (**self).list().await
    }

    fn subscribe(&self) -> CatalogSubscription {
        (**self).subscribe()
    }
}

/// Stream of catalog snapshots, one per visible change
///
/// Backed by a watch channel: a slow consumer skips intermediate snapshots
/// but always observes the latest one. Dropping the subscription (or calling
/// [`CatalogSubscription::unsubscribe`]) detaches it from the store.
pub struct CatalogSubscription {
    inner: BoxStream<'static, CatalogSnapshot>,
}

impl CatalogSubscription {
    pub fn new(receiver: watch::Receiver<CatalogSnapshot>) -> Self {
        Self {
            inner: WatchStream::new(receiver).boxed(),
        }
    }

    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl std::fmt::Debug for CatalogSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogSubscription").finish_non_exhaustive()
    }
}

impl Stream for CatalogSubscription {
    type Item = CatalogSnapshot;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}
