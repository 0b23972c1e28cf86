//! The analysis pipeline driver.
//!
//! Sequences credential check → load → analyze → conditional dispatch →
//! persist. Missing credential and an empty tweet set are deliberate
//! clean exits; a failed analysis or dispatch degrades to a logged
//! default and the run record is written regardless.

use chrono::Local;

use fintel_alert::{render_alert, MattermostClient};
use fintel_analysis::{analysis_subset, OpenAiClient};
use fintel_core::AppConfig;
use fintel_ingest::load_latest_tweets;

use crate::record::{write_run_record, RunRecord};

/// Run one full analysis pass over the latest collection files.
///
/// # Errors
///
/// Returns an error only for constructor failures of the HTTP clients
/// or a failed run-record write. Analysis and dispatch failures are
/// logged and absorbed.
pub(crate) async fn run_analyze(config: &AppConfig) -> anyhow::Result<()> {
    run_analyze_with(config, None).await
}

/// Driver body with an optional OpenAI base-URL override for tests.
pub(crate) async fn run_analyze_with(
    config: &AppConfig,
    openai_base_url: Option<&str>,
) -> anyhow::Result<()> {
    let Some(api_key) = config.openai_api_key.as_deref() else {
        tracing::info!("OPENAI_API_KEY not set — skipping analysis");
        return Ok(());
    };

    let tweets = load_latest_tweets(&config.data_dir, &config.targets);
    tracing::info!(count = tweets.len(), "loaded tweets");
    if tweets.is_empty() {
        tracing::info!("no tweets to analyze");
        return Ok(());
    }

    let client = match openai_base_url {
        Some(base_url) => OpenAiClient::with_base_url(
            api_key,
            &config.openai_model,
            config.openai_timeout_secs,
            base_url,
        )?,
        None => OpenAiClient::new(api_key, &config.openai_model, config.openai_timeout_secs)?,
    };

    let subset = analysis_subset(&tweets);
    let analysis = client.analyze(subset).await;
    tracing::info!(
        relevant = analysis.relevant,
        confidence = %analysis.confidence,
        issue_type = %analysis.issue_type,
        "analysis complete"
    );

    let now = Local::now();

    if analysis.relevant {
        tracing::warn!(summary = %analysis.summary, "Korean financial sector threat detected");
        if let Some(webhook) = config.mattermost_webhook.as_deref() {
            let message = render_alert(
                &analysis,
                subset,
                now,
                config.github_repository.as_deref(),
            );
            let mattermost = MattermostClient::new(config.webhook_timeout_secs)?;
            if let Err(e) = mattermost.dispatch(webhook, &message).await {
                tracing::warn!(error = %e, "alert dispatch failed — continuing");
            }
        } else {
            tracing::warn!("MATTERMOST_WEBHOOK not set — skipping dispatch");
        }
    } else {
        tracing::info!("no Korean financial sector threat found — skipping dispatch");
    }

    let record = RunRecord {
        timestamp: now.to_rfc3339(),
        tweet_count: tweets.len(),
        analysis,
    };
    let path = write_run_record(&config.data_dir, &record, now)?;
    tracing::info!(path = %path.display(), "run record persisted");

    Ok(())
}
