use tessera_core::{Email, EmailClient};

/// Logs outgoing mail instead of delivering it. Used for local development.
#[derive(Debug, Clone, Default)]
pub struct LogEmailClient;

impl LogEmailClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl EmailClient for LogEmailClient {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String> {
        tracing::info!(recipient = recipient.as_str(), subject, content, "Email not sent");
        Ok(())
    }
}
