use thiserror::Error;

/// Internal failure modes of one analysis request. These never escape
/// [`crate::OpenAiClient::analyze`]; they exist so the fallback path can
/// log what actually went wrong.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("response missing choices[0].message.content")]
    MissingContent,

    #[error("verdict is not valid JSON: {0}")]
    MalformedVerdict(#[from] serde_json::Error),
}
