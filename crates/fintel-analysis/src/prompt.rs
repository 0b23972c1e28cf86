//! Analysis prompt assembly.

use fintel_core::KOREAN_FINANCIAL_ENTITIES;
use fintel_ingest::LoadedTweet;

/// Cost cap: only the first 30 loaded tweets are sent for analysis.
/// Excess tweets still count toward the run record, they are just not
/// analyzed.
pub const MAX_ANALYZED_TWEETS: usize = 30;

const TWEET_DELIMITER: &str = "\n---\n";

/// System message fixing the model's role and JSON-only output.
pub const SYSTEM_PROMPT: &str =
    "You are a cybersecurity threat analyst. Respond only in valid JSON.";

/// The subset of loaded tweets that is actually analyzed: the first
/// [`MAX_ANALYZED_TWEETS`] in loading order.
#[must_use]
pub fn analysis_subset(tweets: &[LoadedTweet]) -> &[LoadedTweet] {
    &tweets[..tweets.len().min(MAX_ANALYZED_TWEETS)]
}

/// Render the full user prompt for one analyzed subset.
///
/// Each tweet becomes a block carrying its 1-based index, author
/// handle, date, originating target, body, and permalink. `Finding`
/// indices in the response refer back to these block numbers.
#[must_use]
pub fn build_prompt(subset: &[LoadedTweet]) -> String {
    let blocks: Vec<String> = subset
        .iter()
        .enumerate()
        .map(|(i, tweet)| {
            format!(
                "[{n}] @{user} ({date}) [target: {target}]\n{text}\nlink: {link}",
                n = i + 1,
                user = tweet.username,
                date = tweet.date,
                target = tweet.target,
                text = tweet.text,
                link = tweet.link,
            )
        })
        .collect();
    let tweets_content = blocks.join(TWEET_DELIMITER);

    format!(
        r#"You are a cyber threat intelligence and financial-service monitoring analyst.

Analyze the tweets below and decide whether any of them describe one of
the following affecting a **Korean financial company or institution**:
1. A cyber attack (DDoS, ransomware, data breach, ...)
2. A service outage (app errors, login failures, payment or transfer failures, ...)
3. A security incident (hacking, data leak, ...)

## Decision rules:
- The Korean financial company or service must be named directly or be
  clearly inferable from the tweet.
- Exclude bare "payment failed" complaints where the service cannot be
  identified.
- Exclude game purchases, foreign services, and shopping-mall-side errors.
- Multiple independent tweets about the same company raise the
  likelihood of a real incident — reflect that in confidence.

## Korean financial-sector reference:
{KOREAN_FINANCIAL_ENTITIES}

## Tweets to analyze:
{tweets_content}

## Response format (JSON):
{{
    "relevant": true/false,
    "confidence": "high/medium/low",
    "issue_type": "cyber_attack/service_outage/security_incident/none",
    "summary": "2-3 sentence summary (empty string when not relevant)",
    "details": [
        {{
            "tweet_index": 1,
            "company": "company or institution name (e.g. 카카오뱅크, 토스, 신한카드)",
            "issue_type": "issue type (DDoS, app outage, payment error, data leak, ...)",
            "severity": "high/medium/low",
            "summary": "one-line summary of that tweet"
        }}
    ]
}}

Respond with relevant: false when nothing clearly involves a Korean
financial company. Output valid JSON only.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tweet(n: usize) -> LoadedTweet {
        LoadedTweet {
            text: format!("tweet body {n}"),
            username: format!("user{n}"),
            date: "2026-08-29".to_string(),
            link: format!("https://x.com/user{n}/status/{n}"),
            target: "toss".to_string(),
        }
    }

    fn tweets(count: usize) -> Vec<LoadedTweet> {
        (1..=count).map(tweet).collect()
    }

    #[test]
    fn subset_caps_at_thirty() {
        let all = tweets(40);
        let subset = analysis_subset(&all);
        assert_eq!(subset.len(), 30);
        assert_eq!(subset[0].text, "tweet body 1");
        assert_eq!(subset[29].text, "tweet body 30");
    }

    #[test]
    fn subset_keeps_all_when_under_cap() {
        let all = tweets(5);
        assert_eq!(analysis_subset(&all).len(), 5);
        assert!(analysis_subset(&[]).is_empty());
    }

    #[test]
    fn prompt_blocks_carry_all_tweet_fields() {
        let all = tweets(2);
        let prompt = build_prompt(analysis_subset(&all));
        assert!(prompt.contains("[1] @user1 (2026-08-29) [target: toss]"));
        assert!(prompt.contains("tweet body 1\nlink: https://x.com/user1/status/1"));
        assert!(prompt.contains("[2] @user2"));
        assert!(prompt.contains("\n---\n"));
    }

    #[test]
    fn prompt_embeds_entity_reference_and_schema() {
        let all = tweets(1);
        let prompt = build_prompt(analysis_subset(&all));
        assert!(prompt.contains("카카오뱅크"));
        assert!(prompt.contains("\"relevant\": true/false"));
        assert!(prompt.contains("\"tweet_index\": 1"));
    }

    #[test]
    fn indices_are_one_based_and_ordered() {
        let all = tweets(31);
        let prompt = build_prompt(analysis_subset(&all));
        assert!(prompt.contains("[30] @user30"));
        assert!(!prompt.contains("[31]"));
        assert!(!prompt.contains("[0]"));
    }
}
