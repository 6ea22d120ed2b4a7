use crate::compliance::domain::{ScanInvocationRequest, ScanInvocationResult};
use crate::compliance::services::InvocationValidator;
use crate::ports::outbound::{CommandSender, ScanInvoker};
use async_trait::async_trait;
use tracing::{error, info, warn};

pub const INVOKE_FAILED: &str = "Failed to invoke SSM document";
pub const MISSING_COMMAND_ID: &str = "Failed to retrieve CommandId";

/// SsmScanInvoker starts the compliance document on a single instance.
///
/// Request validation happens here, before anything is sent: a request with a
/// missing field yields status 400 and the command sender is never called.
/// Remote failures map to status 500; a started command yields 200 with the
/// command id as the body.
pub struct SsmScanInvoker<S: CommandSender> {
    sender: S,
}

impl<S: CommandSender> SsmScanInvoker<S> {
    pub fn new(sender: S) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl<S: CommandSender> ScanInvoker for SsmScanInvoker<S> {
    async fn invoke(&self, request: ScanInvocationRequest) -> ScanInvocationResult {
        let command = match InvocationValidator::validate(&request) {
            Ok(command) => command,
            Err(message) => {
                warn!(
                    instance_id = ?request.instance_id,
                    reason = message,
                    "Rejected scan invocation"
                );
                return ScanInvocationResult::bad_request(message);
            }
        };

        match self.sender.send_command(&command).await {
            Ok(Some(command_id)) if !command_id.trim().is_empty() => {
                info!(
                    instance_id = %command.instance_id,
                    command_id = %command_id,
                    "Scan document sent"
                );
                ScanInvocationResult::started(command_id)
            }
            Ok(_) => {
                error!(instance_id = %command.instance_id, "{}", MISSING_COMMAND_ID);
                ScanInvocationResult::internal_error(MISSING_COMMAND_ID)
            }
            Err(e) => {
                error!(
                    instance_id = %command.instance_id,
                    error = %format!("{:#}", e),
                    "{}",
                    INVOKE_FAILED
                );
                ScanInvocationResult::internal_error(INVOKE_FAILED)
            }
        }
    }
}
