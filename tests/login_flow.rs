#![allow(clippy::unwrap_used, clippy::expect_used)]

use anyhow::Result;
use billbharat::{
    api::ApiClient,
    config::ClientConfig,
    flows::{login::LoginFlow, Notice, GENERIC_FAILURE},
};
use secrecy::SecretString;
use serde_json::json;
use std::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn password(value: &str) -> SecretString {
    SecretString::from(value.to_string())
}

#[tokio::test]
async fn invalid_input_is_rejected_locally() -> Result<()> {
    let client = ApiClient::new(ClientConfig::new("http://127.0.0.1:9", 1)?)?;
    let mut flow = LoginFlow::new();

    let result = flow.submit(&client, "jane", &password("password123")).await;
    assert_eq!(
        result.outcome.notice,
        Some(Notice::error("Please enter a valid email address."))
    );
    assert!(result.session.is_none());

    let result = flow.submit(&client, "jane@x.com", &password("")).await;
    assert_eq!(
        result.outcome.notice,
        Some(Notice::error("Password is required."))
    );
    Ok(())
}

#[tokio::test]
async fn success_without_token_is_generic_failure() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .mount(&server)
        .await;

    let client = ApiClient::new(ClientConfig::new(&server.uri(), 5)?)?;
    let result = LoginFlow::new()
        .submit(&client, "jane@x.com", &password("password123"))
        .await;

    assert_eq!(result.outcome.notice, Some(Notice::error(GENERIC_FAILURE)));
    assert_eq!(result.outcome.navigate, None);
    assert!(result.session.is_none());
    Ok(())
}

#[tokio::test]
async fn refused_login_without_message_uses_fallback() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"data": null})))
        .mount(&server)
        .await;

    let client = ApiClient::new(ClientConfig::new(&server.uri(), 5)?)?;
    let result = LoginFlow::new()
        .submit(&client, "jane@x.com", &password("password123"))
        .await;

    assert_eq!(result.outcome.notice, Some(Notice::error("Login failed")));
    assert!(result.session.is_none());
    Ok(())
}
