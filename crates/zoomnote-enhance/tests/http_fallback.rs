//! End-to-end fallback behavior against a stub chat-completions server.

use std::time::Duration;

use axum::{Router, http::StatusCode, routing::post};
use zoomnote_core::TitleSuggestion;
use zoomnote_engine::insights;
use zoomnote_enhance::{Credential, EnhanceConfig, EnhanceError, Enhanced, Enhancer, Source};

const NOTE: &str = "Maria storms into the room. She slams the door and breaks down in tears. After a long silence, she decides to call her mother.";

async fn spawn_stub(status: StatusCode, body: &'static str, delay: Duration) -> String {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(move || async move {
            tokio::time::sleep(delay).await;
            (status, body)
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/v1/chat/completions")
}

fn config(url: String) -> EnhanceConfig {
    EnhanceConfig::new(Some(Credential::new("sk-test")))
        .with_api_url(url)
        .with_timeout(Duration::from_secs(5))
}

async fn title_via(status: StatusCode, body: &'static str) -> Enhanced<TitleSuggestion> {
    let url = spawn_stub(status, body, Duration::ZERO).await;
    Enhancer::from_config(&config(url)).suggest_title(NOTE).await
}

#[tokio::test]
async fn unauthorized_falls_back() {
    let result = title_via(StatusCode::UNAUTHORIZED, "{}").await;
    assert_eq!(result.source, Source::Local);
    assert_eq!(result.value, insights::suggest_title(NOTE));
    assert_eq!(result.diagnostic, Some(EnhanceError::InvalidCredential));
}

#[tokio::test]
async fn rate_limited_falls_back() {
    let result = title_via(StatusCode::TOO_MANY_REQUESTS, "slow down").await;
    assert_eq!(result.value, insights::suggest_title(NOTE));
    assert_eq!(result.diagnostic, Some(EnhanceError::RateLimited));
}

#[tokio::test]
async fn server_error_falls_back() {
    let result = title_via(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;
    assert_eq!(result.value, insights::suggest_title(NOTE));
    assert_eq!(
        result.diagnostic,
        Some(EnhanceError::ServerError { status: Some(500) })
    );
}

#[tokio::test]
async fn malformed_envelope_falls_back() {
    let result = title_via(StatusCode::OK, "<html>not json</html>").await;
    assert_eq!(result.value, insights::suggest_title(NOTE));
    assert!(matches!(result.diagnostic, Some(EnhanceError::MalformedResponse(_))));
}

#[tokio::test]
async fn empty_choices_are_malformed() {
    let result = title_via(StatusCode::OK, r#"{"choices":[]}"#).await;
    assert!(matches!(result.diagnostic, Some(EnhanceError::MalformedResponse(_))));
}

#[tokio::test]
async fn valid_answer_is_used() {
    let result = title_via(
        StatusCode::OK,
        r#"{"choices":[{"message":{"content":"{\"title\":\"The Call\"}"}}]}"#,
    )
    .await;
    assert_eq!(result.source, Source::Remote);
    assert_eq!(result.value.title, "The Call");
    assert!(result.diagnostic.is_none());
}

#[tokio::test]
async fn invalid_answer_falls_back() {
    let long_title = r#"{"choices":[{"message":{"content":"{\"title\":\"An extremely long title that keeps going well past the limit\"}"}}]}"#;
    let result = title_via(StatusCode::OK, long_title).await;
    assert_eq!(result.value, insights::suggest_title(NOTE));
    assert!(matches!(result.diagnostic, Some(EnhanceError::ValidationFailed(_))));
}

#[tokio::test]
async fn slow_server_times_out() {
    let url = spawn_stub(StatusCode::OK, "{}", Duration::from_secs(10)).await;
    let config = config(url).with_timeout(Duration::from_millis(100));

    let result = Enhancer::from_config(&config).summarize(NOTE).await;
    assert_eq!(result.value, insights::summarize_story(NOTE));
    assert_eq!(result.diagnostic, Some(EnhanceError::Timeout));
}

#[tokio::test]
async fn unreachable_server_falls_back() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = config(format!("http://{addr}/v1/chat/completions"));
    let result = Enhancer::from_config(&config).suggest_tags(NOTE).await;
    assert_eq!(result.value, insights::suggest_tags(NOTE));
    assert_eq!(result.diagnostic, Some(EnhanceError::ServerError { status: None }));
}
