//! Mattermost incoming-webhook dispatch.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;

use crate::error::AlertError;

/// Client for a Mattermost incoming webhook.
///
/// The webhook URL is passed per call rather than stored: it is secret
/// configuration owned by the driver, and tests point dispatches at a
/// wiremock server URL.
pub struct MattermostClient {
    client: Client,
}

impl MattermostClient {
    /// Creates a webhook client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, AlertError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("fintel/0.1 (threat-intel)")
            .build()?;
        Ok(Self { client })
    }

    /// POST a rendered message as `{"text": …}` to the webhook.
    ///
    /// Mattermost answers 200 (and some proxies 201) on success; any
    /// other status is [`AlertError::Rejected`]. The caller treats all
    /// errors as non-fatal — a failed dispatch never fails the run.
    ///
    /// # Errors
    ///
    /// - [`AlertError::Http`] on transport failure or timeout.
    /// - [`AlertError::Rejected`] on a non-200/201 response.
    pub async fn dispatch(&self, webhook_url: &str, text: &str) -> Result<(), AlertError> {
        let response = self
            .client
            .post(webhook_url)
            .json(&json!({ "text": text }))
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 200 || status.as_u16() == 201 {
            tracing::info!("alert dispatched to Mattermost");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(AlertError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}
