//! Groq driver tests against a mock chat-completions endpoint.

use scrivener_core::{GenerateRequest, Message};
use scrivener_error::ModelsErrorKind;
use scrivener_models::{GroqDriver, TextGenerator};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion(text: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "llama-3.3-70b-versatile",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 5, "completion_tokens": 7, "total_tokens": 12}
    })
}

async fn driver_for(server: &MockServer) -> GroqDriver {
    GroqDriver::with_base_url("test-key", "llama-3.3-70b-versatile", server.uri())
        .expect("Valid driver")
}

#[tokio::test]
async fn test_sends_single_user_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_json(json!({
            "model": "llama-3.3-70b-versatile",
            "messages": [{"role": "user", "content": "Say hi"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("  hi there \n")))
        .expect(1)
        .mount(&server)
        .await;

    let driver = driver_for(&server).await;
    let response = driver
        .generate(&GenerateRequest::from_prompt("Say hi"))
        .await
        .expect("Completion");

    assert_eq!(response.text(), "  hi there \n");
    assert_eq!(response.model(), "llama-3.3-70b-versatile");
}

#[tokio::test]
async fn test_request_model_overrides_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({"model": "llama-3.1-8b-instant"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let request = GenerateRequest::builder()
        .messages(vec![Message::user("ping")])
        .model("llama-3.1-8b-instant".to_string())
        .build()
        .expect("Valid request");

    let driver = driver_for(&server).await;
    assert!(driver.generate(&request).await.is_ok());
}

#[tokio::test]
async fn test_rate_limit_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let err = driver_for(&server)
        .await
        .generate(&GenerateRequest::from_prompt("x"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ModelsErrorKind::RateLimit);
}

#[tokio::test]
async fn test_error_statuses_are_classified() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("over capacity"))
        .mount(&server)
        .await;

    let driver = driver_for(&server).await;
    let request = GenerateRequest::from_prompt("x");

    let err = driver.generate(&request).await.unwrap_err();
    assert!(matches!(err.kind, ModelsErrorKind::Authentication(ref m) if m.contains("invalid")));

    let err = driver.generate(&request).await.unwrap_err();
    assert_eq!(
        err.kind,
        ModelsErrorKind::Api {
            status: 503,
            message: "over capacity".to_string()
        }
    );
}

#[tokio::test]
async fn test_missing_choices_is_empty_completion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&server)
        .await;

    let err = driver_for(&server)
        .await
        .generate(&GenerateRequest::from_prompt("x"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ModelsErrorKind::EmptyCompletion);
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = driver_for(&server)
        .await
        .generate(&GenerateRequest::from_prompt("x"))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, ModelsErrorKind::ResponseParsing(_)));
}

#[test]
fn test_empty_api_key_rejected() {
    let err = GroqDriver::new("  ", "llama-3.3-70b-versatile").unwrap_err();
    assert!(matches!(err.kind, ModelsErrorKind::Authentication(_)));
}
