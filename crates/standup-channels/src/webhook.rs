//! Generic outbound webhook — POST with a JSON `{room, text}` body.
//! Covers Mattermost/Slack-style incoming webhooks and anything else
//! that accepts a JSON POST.

use async_trait::async_trait;
use standup_core::config::WebhookConfig;
use standup_core::error::{Result, StandupError};
use standup_core::traits::Messenger;

pub struct WebhookMessenger {
    config: WebhookConfig,
    client: reqwest::Client,
}

impl WebhookMessenger {
    pub fn new(config: WebhookConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Messenger for WebhookMessenger {
    fn name(&self) -> &str {
        "webhook"
    }

    async fn deliver(&self, room: &str, text: &str) -> Result<()> {
        let body = serde_json::json!({"room": room, "text": text});
        let mut req = self
            .client
            .post(&self.config.url)
            .json(&body)
            .timeout(std::time::Duration::from_secs(10));

        if let (Some(header), Some(value)) = (&self.config.auth_header, &self.config.auth_value) {
            req = req.header(header.as_str(), value.as_str());
        }

        let resp = req
            .send()
            .await
            .map_err(|e| StandupError::Channel(format!("webhook: {e}")))?;

        if resp.status().is_success() {
            tracing::debug!("✅ Webhook delivered to {room}");
            Ok(())
        } else {
            Err(StandupError::Channel(format!(
                "webhook: HTTP {} from {}",
                resp.status(),
                self.config.url
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> WebhookConfig {
        WebhookConfig {
            url: url.into(),
            auth_header: None,
            auth_value: None,
            enabled: true,
        }
    }

    #[test]
    fn test_name() {
        let messenger = WebhookMessenger::new(config("http://localhost:9/hook"));
        assert_eq!(messenger.name(), "webhook");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_channel_error() {
        // Port 9 (discard) is closed on any sane test host.
        let messenger = WebhookMessenger::new(config("http://127.0.0.1:9/hook"));
        let err = messenger.deliver("room1", "Standup time!").await.unwrap_err();
        assert!(matches!(err, StandupError::Channel(_)));
    }
}
