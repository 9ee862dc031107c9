//! Slack `chat.postMessage` notifier.

use crate::domain::ports::Notifier;
use crate::utils::error::{ReminderError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub struct SlackNotifier {
    client: Client,
    api_url: String,
    bot_token: String,
}

impl SlackNotifier {
    pub fn new(api_url: &str, bot_token: &str) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.to_string(),
            bot_token: bot_token.to_string(),
        }
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn post_message(&self, channel: &str, text: &str) -> Result<()> {
        let payload = PostMessage { channel, text };

        tracing::debug!(channel = channel, "Sending Slack message ({} chars)", text.chars().count());
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.bot_token)
            .json(&payload)
            .send()
            .await
            .map_err(ReminderError::SlackRequestError)?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            tracing::warn!(status = %status, body = %body, "Slack request failed");
            return Err(ReminderError::SlackApiError {
                status: status.as_u16(),
                error: body,
            });
        }

        // Slack 的應用層錯誤仍回 200，要看 ok 欄位
        match serde_json::from_str::<PostMessageResponse>(&body) {
            Ok(PostMessageResponse { ok: true, .. }) => {
                tracing::debug!(channel = channel, "Slack message delivered");
                Ok(())
            }
            Ok(PostMessageResponse { ok: false, error }) => {
                let error = error.unwrap_or_else(|| "unknown_error".to_string());
                tracing::warn!(channel = channel, error = %error, "Slack rejected message");
                Err(ReminderError::SlackApiError {
                    status: status.as_u16(),
                    error,
                })
            }
            Err(_) => Err(ReminderError::SlackApiError {
                status: status.as_u16(),
                error: format!("unexpected response body: {}", body),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct PostMessage<'a> {
    channel: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}
