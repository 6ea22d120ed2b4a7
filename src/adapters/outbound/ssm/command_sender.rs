use crate::compliance::domain::ScanCommand;
use crate::ports::outbound::CommandSender;
use crate::shared::Result;
use async_trait::async_trait;
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::Client;
use tracing::debug;

/// SsmCommandSender adapter for SSM `SendCommand`
pub struct SsmCommandSender {
    client: Client,
}

impl SsmCommandSender {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CommandSender for SsmCommandSender {
    async fn send_command(&self, command: &ScanCommand) -> Result<Option<String>> {
        let mut request = self
            .client
            .send_command()
            .instance_ids(&command.instance_id)
            .document_name(&command.document_name);

        for (name, values) in command.parameters() {
            request = request.parameters(name, values);
        }

        let output = request.send().await.map_err(|e| {
            anyhow::anyhow!("SendCommand failed: {}", DisplayErrorContext(&e))
        })?;

        let command_id = output
            .command()
            .and_then(|c| c.command_id())
            .map(str::to_string);

        debug!(
            instance_id = %command.instance_id,
            command_id = ?command_id,
            "SendCommand returned"
        );

        Ok(command_id)
    }
}
