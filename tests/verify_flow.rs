#![allow(clippy::unwrap_used, clippy::expect_used)]

use anyhow::{bail, Result};
use billbharat::{
    api::ApiClient,
    config::ClientConfig,
    flows::{
        verify::{VerificationChannel, VerifyEntry, VerifyFlow},
        Notice, GENERIC_FAILURE,
    },
};
use serde_json::json;
use std::net::TcpListener;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    TcpListener::bind("127.0.0.1:0").is_ok()
}

fn client_for(server: &MockServer) -> Result<ApiClient> {
    Ok(ApiClient::new(ClientConfig::new(&server.uri(), 5)?)?)
}

fn open(email: &str) -> Result<VerifyFlow> {
    match VerifyFlow::open(Some(email)) {
        VerifyEntry::Ready(flow) => Ok(flow),
        VerifyEntry::Redirect(_) => bail!("flow should open"),
    }
}

async fn ok(server: &MockServer, endpoint: &str, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .and(body_json(body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn each_channel_uses_its_own_endpoints() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    let email = json!({"email": "jane@x.com"});
    ok(&server, "/auth/send-email-verification-request", email.clone()).await;
    ok(&server, "/auth/send-phone-verification-request", email).await;
    ok(
        &server,
        "/auth/verify-email",
        json!({"email": "jane@x.com", "code": "111111"}),
    )
    .await;
    ok(
        &server,
        "/auth/verify-phone",
        json!({"email": "jane@x.com", "code": "222222"}),
    )
    .await;

    let client = client_for(&server)?;
    let mut flow = open("jane@x.com")?;

    let outcome = flow.request_code(&client).await;
    assert_eq!(outcome.notice, Some(Notice::success("OTP sent to your email!")));
    flow.enter_code("111111");
    let outcome = flow.submit_code(&client).await;
    assert_eq!(outcome.notice, Some(Notice::success("Email verified successfully!")));
    assert!(flow.code().is_empty());
    assert!(flow.is_verified(VerificationChannel::Email));
    assert!(!flow.is_fully_verified());

    flow.switch_channel(VerificationChannel::Phone);
    let outcome = flow.request_code(&client).await;
    assert_eq!(outcome.notice, Some(Notice::success("OTP sent to your phone!")));
    flow.enter_code("222222");
    let outcome = flow.submit_code(&client).await;
    assert_eq!(outcome.notice, Some(Notice::success("Phone verified successfully!")));
    assert!(flow.is_fully_verified());
    assert!(!flow.is_loading());
    Ok(())
}

#[tokio::test]
async fn rejected_code_is_kept_for_correction() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/verify-email"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"message": "Invalid OTP"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    let mut flow = open("jane@x.com")?;
    flow.enter_code("999999");
    let outcome = flow.submit_code(&client).await;

    assert_eq!(outcome.notice, Some(Notice::error("Invalid OTP")));
    assert_eq!(flow.code().as_str(), "999999");
    assert!(flow.can_verify());
    assert!(!flow.is_verified(VerificationChannel::Email));
    Ok(())
}

#[tokio::test]
async fn failed_send_uses_fallback_message() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/send-phone-verification-request"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({"error": "slow down"})))
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    let mut flow = open("jane@x.com")?;
    flow.switch_channel(VerificationChannel::Phone);
    flow.enter_code("12");
    let outcome = flow.request_code(&client).await;

    assert_eq!(outcome.notice, Some(Notice::error("Failed to send OTP")));
    assert_eq!(flow.channel(), VerificationChannel::Phone);
    assert_eq!(flow.code().as_str(), "12");
    Ok(())
}

#[tokio::test]
async fn incomplete_code_is_never_sent() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/verify-email"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    let mut flow = open("jane@x.com")?;
    flow.enter_code("12345");
    let outcome = flow.submit_code(&client).await;

    assert_eq!(
        outcome.notice,
        Some(Notice::error("Please enter a valid 6-digit OTP"))
    );
    Ok(())
}

#[tokio::test]
async fn unreadable_answers_leave_channel_unverified() -> Result<()> {
    if !can_bind_localhost() {
        eprintln!("Skipping test: cannot bind localhost");
        return Ok(());
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/verify-email"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/verify-phone"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server)?;
    let mut flow = open("jane@x.com")?;

    flow.enter_code("123456");
    let outcome = flow.submit_code(&client).await;
    assert_eq!(outcome.notice, Some(Notice::error(GENERIC_FAILURE)));
    assert_eq!(flow.code().as_str(), "123456");
    assert!(!flow.is_verified(VerificationChannel::Email));

    flow.switch_channel(VerificationChannel::Phone);
    flow.enter_code("654321");
    let outcome = flow.submit_code(&client).await;
    assert_eq!(outcome.notice, Some(Notice::error(GENERIC_FAILURE)));
    assert_eq!(flow.code().as_str(), "654321");
    assert!(!flow.is_verified(VerificationChannel::Phone));
    Ok(())
}

#[tokio::test]
async fn transport_failure_is_generic() -> Result<()> {
    let client = ApiClient::new(ClientConfig::new("http://127.0.0.1:9", 2)?)?;
    let mut flow = open("jane@x.com")?;
    flow.enter_code("123456");
    let outcome = flow.submit_code(&client).await;

    assert_eq!(outcome.notice, Some(Notice::error(GENERIC_FAILURE)));
    assert_eq!(flow.code().as_str(), "123456");
    Ok(())
}
