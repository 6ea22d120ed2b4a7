use async_trait::async_trait;
use instance_compliance::compliance::domain::ScanCommand;
use instance_compliance::prelude::*;
use std::sync::Mutex;

enum Reply {
    CommandId(String),
    Empty,
    Fail,
}

/// Mock CommandSender standing in for SSM SendCommand
pub struct MockCommandSender {
    reply: Reply,
    sent: Mutex<Vec<ScanCommand>>,
}

impl MockCommandSender {
    pub fn returning(command_id: &str) -> Self {
        Self::with_reply(Reply::CommandId(command_id.to_string()))
    }

    pub fn without_command_id() -> Self {
        Self::with_reply(Reply::Empty)
    }

    pub fn failing() -> Self {
        Self::with_reply(Reply::Fail)
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<ScanCommand> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandSender for MockCommandSender {
    async fn send_command(&self, command: &ScanCommand) -> Result<Option<String>> {
        self.sent.lock().unwrap().push(command.clone());
        match &self.reply {
            Reply::CommandId(id) => Ok(Some(id.clone())),
            Reply::Empty => Ok(None),
            Reply::Fail => anyhow::bail!("SendCommand failed: InvalidInstanceId"),
        }
    }
}
