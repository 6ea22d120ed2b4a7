use async_trait::async_trait;
use instance_compliance::prelude::*;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock ScanInvoker answering per instance id
///
/// Instances without a scripted reply get `{500, "Failed to invoke SSM document"}`.
#[derive(Default)]
pub struct MockScanInvoker {
    replies: HashMap<String, ScanInvocationResult>,
    requests: Mutex<Vec<ScanInvocationRequest>>,
}

impl MockScanInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_command_id(mut self, instance_id: &str, command_id: &str) -> Self {
        self.replies.insert(
            instance_id.to_string(),
            ScanInvocationResult::started(command_id.to_string()),
        );
        self
    }

    pub fn with_result(mut self, instance_id: &str, result: ScanInvocationResult) -> Self {
        self.replies.insert(instance_id.to_string(), result);
        self
    }

    pub fn requests(&self) -> Vec<ScanInvocationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScanInvoker for MockScanInvoker {
    async fn invoke(&self, request: ScanInvocationRequest) -> ScanInvocationResult {
        self.requests.lock().unwrap().push(request.clone());
        request
            .instance_id
            .as_ref()
            .and_then(|id| self.replies.get(id).cloned())
            .unwrap_or_else(|| ScanInvocationResult::internal_error("Failed to invoke SSM document"))
    }
}
