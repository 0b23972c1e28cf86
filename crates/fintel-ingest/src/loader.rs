//! Latest-file-per-target tweet loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::IngestError;
use crate::types::{CollectionFile, LoadedTweet};

/// Load tweets from the newest collection file of every target.
///
/// For each target, reads `{data_dir}/{target}/` and parses only the
/// `.json` file whose name sorts last — the collector names files with
/// an embedded UTC timestamp, so descending lexicographic order is
/// descending recency. That filename contract is assumed here, not
/// enforced.
///
/// Targets without a subdirectory or without files contribute nothing.
/// A malformed or unreadable file is logged and skipped; it never
/// aborts loading for the remaining targets. Result order is target
/// order, then in-file tweet order.
pub fn load_latest_tweets(data_dir: &Path, targets: &[String]) -> Vec<LoadedTweet> {
    let mut all = Vec::new();

    for target in targets {
        match load_target(data_dir, target) {
            Ok(Some(tweets)) => {
                tracing::debug!(target = %target, count = tweets.len(), "loaded tweets");
                all.extend(tweets);
            }
            Ok(None) => {
                tracing::debug!(target = %target, "no collection files for target");
            }
            Err(e) => {
                tracing::warn!(target = %target, error = %e, "skipping target — load failed");
            }
        }
    }

    all
}

/// Load and tag the newest collection file for one target.
///
/// Returns `Ok(None)` when the target has no subdirectory or no `.json`
/// files — an expected state, distinct from a read/parse failure.
fn load_target(data_dir: &Path, target: &str) -> Result<Option<Vec<LoadedTweet>>, IngestError> {
    let target_dir = data_dir.join(target);
    if !target_dir.is_dir() {
        return Ok(None);
    }

    let Some(latest) = latest_collection_file(&target_dir)? else {
        return Ok(None);
    };

    let raw = fs::read_to_string(&latest).map_err(|source| IngestError::Io {
        path: latest.clone(),
        source,
    })?;
    let file: CollectionFile =
        serde_json::from_str(&raw).map_err(|source| IngestError::Parse {
            path: latest.clone(),
            source,
        })?;

    Ok(Some(
        file.tweets
            .into_iter()
            .map(|t| LoadedTweet::from_tweet(t, target))
            .collect(),
    ))
}

/// Pick the `.json` file with the lexicographically greatest name.
fn latest_collection_file(target_dir: &Path) -> Result<Option<PathBuf>, IngestError> {
    let entries = fs::read_dir(target_dir).map_err(|source| IngestError::Io {
        path: target_dir.to_path_buf(),
        source,
    })?;

    let mut latest: Option<PathBuf> = None;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "json") {
            continue;
        }
        if latest
            .as_ref()
            .is_none_or(|current| path.file_name() > current.file_name())
        {
            latest = Some(path);
        }
    }

    Ok(latest)
}
