use std::path::PathBuf;

/// Process-wide configuration, read once at startup and never mutated.
#[derive(Clone)]
pub struct AppConfig {
    /// OpenAI API key. Absence is a clean-exit skip condition, not an error.
    pub openai_api_key: Option<String>,
    /// Mattermost incoming-webhook URL. Absence skips alert dispatch.
    pub mattermost_webhook: Option<String>,
    /// Base directory holding one subdirectory of collection files per target.
    pub data_dir: PathBuf,
    /// Target keywords whose collected tweets are analyzed.
    pub targets: Vec<String>,
    pub openai_model: String,
    pub openai_timeout_secs: u64,
    pub webhook_timeout_secs: u64,
    /// `owner/repo` used for the issues link in the alert footer.
    pub github_repository: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "mattermost_webhook",
                &self.mattermost_webhook.as_ref().map(|_| "[redacted]"),
            )
            .field("data_dir", &self.data_dir)
            .field("targets", &self.targets)
            .field("openai_model", &self.openai_model)
            .field("openai_timeout_secs", &self.openai_timeout_secs)
            .field("webhook_timeout_secs", &self.webhook_timeout_secs)
            .field("github_repository", &self.github_repository)
            .finish()
    }
}
