use crate::compliance::domain::{ScanInvocationRequest, ScanInvocationResult};
use async_trait::async_trait;
use std::sync::Arc;

/// ScanInvoker port for starting a compliance scan on one instance
///
/// Failures are part of the result (`statusCode` other than 200) rather
/// than an `Err`, so one instance failing never short-circuits a batch.
#[async_trait]
pub trait ScanInvoker: Send + Sync {
    async fn invoke(&self, request: ScanInvocationRequest) -> ScanInvocationResult;
}

#[async_trait]
impl<T: ScanInvoker + ?Sized> ScanInvoker for Arc<T> {
    async fn invoke(&self, request: ScanInvocationRequest) -> ScanInvocationResult {
        (**self).invoke(request).await
    }
}
