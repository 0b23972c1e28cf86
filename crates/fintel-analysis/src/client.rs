//! OpenAI chat-completion client.
//!
//! One request per pipeline run, no retries. Every failure mode —
//! transport, non-2xx status, missing content, malformed verdict —
//! is logged and converted to [`AnalysisResult::default()`] so the
//! driver always receives a well-typed verdict.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use fintel_ingest::LoadedTweet;

use crate::error::AnalysisError;
use crate::prompt::{build_prompt, SYSTEM_PROMPT};
use crate::types::AnalysisResult;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const TEMPERATURE: f64 = 0.3;
const MAX_TOKENS: u32 = 2000;

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: String,
}

/// Client for OpenAI's `/v1/chat/completions` endpoint.
///
/// Use [`OpenAiClient::new`] for production or
/// [`OpenAiClient::with_base_url`] to point at a mock server in tests.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    /// Creates a client pointed at the production OpenAI API.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, AnalysisError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, AnalysisError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("fintel/0.1 (threat-intel)")
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Analyze a tweet subset and return the model's verdict.
    ///
    /// An empty subset short-circuits to the default verdict without an
    /// HTTP call. All request and parse failures degrade to the default
    /// verdict with a warning; this method never returns an error.
    pub async fn analyze(&self, subset: &[LoadedTweet]) -> AnalysisResult {
        if subset.is_empty() {
            return AnalysisResult::default();
        }

        match self.request_verdict(subset).await {
            Ok(verdict) => verdict,
            Err(e) => {
                tracing::warn!(error = %e, "analysis failed — falling back to non-relevant verdict");
                AnalysisResult::default()
            }
        }
    }

    async fn request_verdict(&self, subset: &[LoadedTweet]) -> Result<AnalysisResult, AnalysisError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": build_prompt(subset) }
            ],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        });

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(AnalysisError::MissingContent)?;

        let verdict = serde_json::from_str(strip_code_fences(&content))?;
        Ok(verdict)
    }
}

/// Strip optional markdown code fencing from a model response.
///
/// Models sometimes wrap the verdict in ```` ```json … ``` ```` despite
/// the JSON-only instruction. Drops the first line when the trimmed
/// text starts with a fence, and the trailing fence when it ends with
/// one. Unfenced input passes through unchanged, so the strip is
/// idempotent.
fn strip_code_fences(content: &str) -> &str {
    let mut text = content.trim();
    if text.starts_with("```") {
        text = text.split_once('\n').map_or("", |(_, rest)| rest);
    }
    if let Some(stripped) = text.trim_end().strip_suffix("```") {
        text = stripped;
    }
    text.trim()
}
