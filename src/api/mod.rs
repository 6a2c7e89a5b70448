//! HTTP client for the BillBharat auth service with consistent timeouts and
//! error handling. Endpoint wrappers live in [`auth`] and [`business`]; they
//! all go through the helpers here so every request is built, traced and
//! decoded the same way. The client stores no credentials: authenticated
//! helpers take the [`Session`] to attach.

pub mod auth;
pub mod business;
mod error;
mod session;
pub mod types;

pub use self::error::ApiError;
pub use self::session::Session;
pub use self::types::Business;

use crate::{config::ClientConfig, APP_USER_AGENT};
use reqwest::{header::AUTHORIZATION, Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, info_span, Instrument};

/// Maximum number of characters kept from an unreadable error body.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Build a client for the configured auth service.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the underlying HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { http, config })
    }

    /// POSTs a JSON body and decodes the JSON answer.
    pub(crate) async fn post_json<B, T>(
        &self,
        path: &str,
        body: &B,
        session: Option<&Session>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let encoded = serde_json::to_vec(body)
            .map_err(|err| ApiError::Serialization(format!("Failed to encode request: {err}")))?;

        let request = self
            .request(Method::POST, path, session)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(encoded);

        let response = self.send(Method::POST, path, request).await?;
        handle_json_response(response).await
    }

    /// POSTs without a body and decodes the JSON answer.
    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        session: Option<&Session>,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::POST, path, session);
        let response = self.send(Method::POST, path, request).await?;
        handle_json_response(response).await
    }

    /// GETs and decodes the JSON answer.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        session: Option<&Session>,
    ) -> Result<T, ApiError> {
        let request = self.request(Method::GET, path, session);
        let response = self.send(Method::GET, path, request).await?;
        handle_json_response(response).await
    }

    fn request(&self, method: Method, path: &str, session: Option<&Session>) -> RequestBuilder {
        let builder = self.http.request(method, self.config.url_for(path));
        match session {
            Some(session) => builder.header(AUTHORIZATION, session.bearer()),
            None => builder,
        }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Response, ApiError> {
        let span = info_span!(
            "api.request",
            http.method = %method,
            url = %self.config.url_for(path)
        );

        async move {
            let response = request.send().await.map_err(map_request_error)?;
            debug!(status = response.status().as_u16(), "response received");
            Ok::<Response, ApiError>(response)
        }
        .instrument(span)
        .await
    }
}

/// Maps transport errors into user-facing `ApiError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        ApiError::Serialization(format!("Failed to build request: {err}"))
    } else if err.is_decode() {
        ApiError::Parse(format!("Failed to read response: {err}"))
    } else {
        ApiError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Decodes a success body, or turns a failure status into `ApiError`.
///
/// A failure body that is JSON becomes `Http` with its `message`; any other
/// failure body becomes `UnreadableResponse`. Success bodies must decode as
/// `T`, so an empty or non-JSON body is a `Parse` error.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(map_request_error)?;

    if !status.is_success() {
        return Err(error_from_body(status.as_u16(), body));
    }

    serde_json::from_str(&body)
        .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
}

fn error_from_body(status: u16, body: String) -> ApiError {
    match serde_json::from_str::<Value>(&body) {
        Ok(value) => ApiError::Http {
            status,
            message: error_message(&value),
        },
        Err(_) => ApiError::UnreadableResponse {
            status,
            detail: sanitize_body(body),
        },
    }
}

/// The `message` of an error body, as sent. Absent or empty means none.
fn error_message(value: &Value) -> Option<String> {
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(ToString::to_string)
}

/// Snippet of an unreadable body for logs.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "empty body".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
