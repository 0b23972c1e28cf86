//! Markdown alert rendering.

use chrono::{DateTime, Local};

use fintel_analysis::AnalysisResult;
use fintel_ingest::LoadedTweet;

/// At most this many findings are rendered into one alert.
pub const MAX_RENDERED_FINDINGS: usize = 5;

const HEADER: &str = "### 🚨 Korean financial sector threat detected";

/// Render a Mattermost markdown alert for a relevant verdict.
///
/// Each finding resolves its `tweet_index` as a 1-based position into
/// the analyzed subset to recover the source link. An index of 0 or
/// past the subset length is a model hallucination; such findings are
/// dropped from the message without error.
#[must_use]
pub fn render_alert(
    analysis: &AnalysisResult,
    subset: &[LoadedTweet],
    detected_at: DateTime<Local>,
    github_repository: Option<&str>,
) -> String {
    let mut message = format!(
        "{HEADER}\n\n\
         | Field | Value |\n\
         |-------|-------|\n\
         | Detected at | {} |\n\
         | Confidence | {} |\n\n\
         #### Summary\n{}\n",
        detected_at.format("%Y-%m-%d %H:%M KST"),
        or_na(&analysis.confidence),
        or_na(&analysis.summary),
    );

    // The cap applies to the raw detail list; an unresolvable index
    // inside the cap is dropped, not replaced by a later finding.
    let renderable: Vec<_> = analysis
        .details
        .iter()
        .take(MAX_RENDERED_FINDINGS)
        .filter_map(|finding| {
            // tweet_index is 1-based; 0 underflows and anything past the
            // subset is out of range.
            finding
                .tweet_index
                .checked_sub(1)
                .and_then(|i| subset.get(i))
                .map(|tweet| (finding, tweet))
        })
        .collect();

    if !renderable.is_empty() {
        message.push_str("\n#### Findings\n\n");
        for (finding, tweet) in renderable {
            message.push_str(&format!(
                "**{}** - {} ({})\n> {}\n> [source]({})\n\n",
                or_na(&finding.company),
                or_na(&finding.issue_type),
                or_na(&finding.severity),
                finding.summary,
                tweet.link,
            ));
        }
    }

    if let Some(repo) = github_repository {
        message.push_str(&format!(
            "\n---\n[GitHub Issues](https://github.com/{repo}/issues)"
        ));
    }

    message
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}
