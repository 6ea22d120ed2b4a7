use crate::compliance::domain::ScanCommand;
use crate::shared::Result;
use async_trait::async_trait;

/// CommandSender port for the downstream command-invocation API
///
/// This is the raw remote call (SSM SendCommand) underneath the scan invoker.
#[async_trait]
pub trait CommandSender: Send + Sync {
    /// Sends the scan document to the target instance
    ///
    /// # Returns
    /// The command id assigned by the service, or `None` if the response
    /// carried none
    ///
    /// # Errors
    /// Returns an error if the remote call itself fails
    async fn send_command(&self, command: &ScanCommand) -> Result<Option<String>>;
}

#[async_trait]
impl<T: CommandSender + ?Sized> CommandSender for std::sync::Arc<T> {
    async fn send_command(&self, command: &ScanCommand) -> Result<Option<String>> {
        (**self).send_command(command).await
    }
}
