use std::path::PathBuf;

use thiserror::Error;

use crate::app_config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var holds a non-numeric value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a numeric env var holds a non-numeric value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing logic is decoupled from the actual environment so it can be
/// tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let optional = |var: &str| -> Option<String> {
        lookup(var).ok().filter(|v| !v.trim().is_empty())
    };

    let or_default =
        |var: &str, default: &str| -> String { lookup(var).unwrap_or_else(|_| default.to_string()) };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let openai_api_key = optional("OPENAI_API_KEY");
    let mattermost_webhook = optional("MATTERMOST_WEBHOOK");
    let data_dir = PathBuf::from(or_default("DATA_DIR", "data"));
    let targets = parse_targets(&or_default("TARGETS", ""));
    let openai_model = or_default("FINTEL_OPENAI_MODEL", "gpt-4o-mini");
    let openai_timeout_secs = parse_u64("FINTEL_OPENAI_TIMEOUT_SECS", "60")?;
    let webhook_timeout_secs = parse_u64("FINTEL_WEBHOOK_TIMEOUT_SECS", "30")?;
    let github_repository = optional("GITHUB_REPOSITORY");

    Ok(AppConfig {
        openai_api_key,
        mattermost_webhook,
        data_dir,
        targets,
        openai_model,
        openai_timeout_secs,
        webhook_timeout_secs,
        github_repository,
    })
}

/// Split a comma-separated target list, trimming whitespace and dropping
/// empty entries.
fn parse_targets(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
        .collect()
}
