//! Integration tests for `MattermostClient` using wiremock HTTP mocks.

use fintel_alert::{AlertError, MattermostClient};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client() -> MattermostClient {
    MattermostClient::new(30).expect("client construction should not fail")
}

#[tokio::test]
async fn dispatch_sends_text_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hooks/abc123"))
        .and(body_json(serde_json::json!({
            "text": "### 🚨 Korean financial sector threat detected"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let url = format!("{}/hooks/abc123", server.uri());
    let result = test_client()
        .dispatch(&url, "### 🚨 Korean financial sector threat detected")
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn created_status_counts_as_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let url = format!("{}/hooks/abc123", server.uri());
    assert!(test_client().dispatch(&url, "alert").await.is_ok());
}

#[tokio::test]
async fn server_error_is_rejected_with_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("channel gone"))
        .mount(&server)
        .await;

    let url = format!("{}/hooks/abc123", server.uri());
    let err = test_client().dispatch(&url, "alert").await.unwrap_err();
    match err {
        AlertError::Rejected { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "channel gone");
        }
        other => panic!("expected Rejected, got: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_webhook_is_a_transport_error() {
    // Port 9 is the discard service; nothing is listening in CI.
    let err = test_client()
        .dispatch("http://127.0.0.1:9/hooks/abc123", "alert")
        .await
        .unwrap_err();
    assert!(matches!(err, AlertError::Http(_)));
}
