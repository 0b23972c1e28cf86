use serde::{Deserialize, Serialize};

/// The model's verdict over one analyzed tweet subset.
///
/// Every field is `#[serde(default)]`: the model is instructed to emit
/// this exact shape but is not trusted to. A missing or mistyped field
/// collapses to its default instead of failing the parse.
///
/// `Default` is the "nothing relevant" verdict —
/// `{relevant: false, summary: "", details: []}` — which is also the
/// fallback for every client-side failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub relevant: bool,
    /// Model confidence: `high` / `medium` / `low`, free text on the wire.
    #[serde(default)]
    pub confidence: String,
    /// `cyber_attack` / `service_outage` / `security_incident` / `none`.
    #[serde(default)]
    pub issue_type: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub details: Vec<Finding>,
}

/// One model-identified incident, referencing a specific analyzed tweet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Finding {
    /// 1-based position into the analyzed subset. Resolved (and
    /// bounds-checked) at render time, not here.
    #[serde(default)]
    pub tweet_index: usize,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub issue_type: String,
    /// `high` / `medium` / `low`, free text on the wire.
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_non_relevant() {
        let result = AnalysisResult::default();
        assert!(!result.relevant);
        assert_eq!(result.summary, "");
        assert!(result.details.is_empty());
    }

    #[test]
    fn full_verdict_parses() {
        let json = r#"{
            "relevant": true,
            "confidence": "high",
            "issue_type": "service_outage",
            "summary": "카카오뱅크 앱 접속 장애 다수 보고",
            "details": [{
                "tweet_index": 3,
                "company": "카카오뱅크",
                "issue_type": "앱장애",
                "severity": "medium",
                "summary": "로그인 불가 보고"
            }]
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(result.relevant);
        assert_eq!(result.details.len(), 1);
        assert_eq!(result.details[0].tweet_index, 3);
        assert_eq!(result.details[0].company, "카카오뱅크");
    }

    #[test]
    fn missing_fields_collapse_to_defaults() {
        let result: AnalysisResult = serde_json::from_str(r#"{"relevant": true}"#).unwrap();
        assert!(result.relevant);
        assert_eq!(result.confidence, "");
        assert!(result.details.is_empty());

        let finding: Finding = serde_json::from_str(r#"{"company": "토스"}"#).unwrap();
        assert_eq!(finding.tweet_index, 0);
        assert_eq!(finding.severity, "");
    }

    #[test]
    fn serializes_round_trip() {
        let result = AnalysisResult {
            relevant: true,
            confidence: "low".into(),
            issue_type: "cyber_attack".into(),
            summary: "s".into(),
            details: vec![Finding {
                tweet_index: 1,
                company: "업비트".into(),
                issue_type: "DDoS".into(),
                severity: "high".into(),
                summary: "d".into(),
            }],
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert!(back.relevant);
        assert_eq!(back.details[0].company, "업비트");
    }
}
