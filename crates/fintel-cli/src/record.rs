//! Run-record persistence.
//!
//! One JSON file per pipeline execution, written into the data
//! directory next to the per-target collection subdirectories. The
//! records are an append-only audit trail; nothing here rotates or
//! deletes them.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use fintel_analysis::AnalysisResult;

/// Audit artifact for one pipeline run, including non-relevant runs.
#[derive(Debug, Serialize, Deserialize)]
pub struct RunRecord {
    /// Run timestamp, RFC 3339 with local offset.
    pub timestamp: String,
    /// Total tweets loaded — not the 30-tweet analyzed subset.
    pub tweet_count: usize,
    pub analysis: AnalysisResult,
}

/// Write a run record as `_analysis_{YYYYmmdd_HHMMSS}.json` and return
/// its path. The leading underscore keeps records from ever looking
/// like a target subdirectory's collection files.
///
/// # Errors
///
/// Returns an error if serialization or the write fails. Unlike every
/// network failure in the pipeline, a lost audit record is not
/// swallowed.
pub fn write_run_record(
    data_dir: &Path,
    record: &RunRecord,
    now: DateTime<Local>,
) -> anyhow::Result<PathBuf> {
    let path = data_dir.join(format!("_analysis_{}.json", now.format("%Y%m%d_%H%M%S")));
    let body = serde_json::to_string_pretty(record)?;
    fs::write(&path, body)
        .map_err(|e| anyhow::anyhow!("failed to write run record {}: {e}", path.display()))?;
    Ok(path)
}

/// Read a run record back from disk.
#[cfg(test)]
pub fn read_run_record(path: &Path) -> anyhow::Result<RunRecord> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
