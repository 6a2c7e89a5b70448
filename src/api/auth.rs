//! Wrappers for the `/auth/*` endpoints. Payloads carrying passwords or codes
//! are borrowed for serialization only and must never be logged.

use super::{
    types::{
        EmailPayload, LoginPayload, MessageResponse, RegisterPayload, TokenResponse,
        VerifyCodePayload,
    },
    ApiClient, ApiError,
};
use crate::flows::verify::VerificationChannel;

pub const REGISTER_PATH: &str = "/auth/register";
pub const LOGIN_PATH: &str = "/auth/login";

/// Send-code endpoint bound to a channel.
#[must_use]
pub const fn send_code_path(channel: VerificationChannel) -> &'static str {
    match channel {
        VerificationChannel::Email => "/auth/send-email-verification-request",
        VerificationChannel::Phone => "/auth/send-phone-verification-request",
    }
}

/// Verify-code endpoint bound to a channel.
#[must_use]
pub const fn verify_code_path(channel: VerificationChannel) -> &'static str {
    match channel {
        VerificationChannel::Email => "/auth/verify-email",
        VerificationChannel::Phone => "/auth/verify-phone",
    }
}

impl ApiClient {
    /// Creates an unverified account.
    ///
    /// # Errors
    /// Returns `ApiError` on transport failure or a non-success status.
    pub async fn register(&self, payload: &RegisterPayload<'_>) -> Result<MessageResponse, ApiError> {
        self.post_json(REGISTER_PATH, payload, None).await
    }

    /// Asks the service to deliver a one-time code over `channel`.
    ///
    /// # Errors
    /// Returns `ApiError` on transport failure or a non-success status.
    pub async fn send_verification_code(
        &self,
        channel: VerificationChannel,
        email: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.post_json(send_code_path(channel), &EmailPayload { email }, None)
            .await
    }

    /// Submits the one-time code received over `channel`.
    ///
    /// # Errors
    /// Returns `ApiError` on transport failure or a non-success status.
    pub async fn verify_code(
        &self,
        channel: VerificationChannel,
        email: &str,
        code: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.post_json(
            verify_code_path(channel),
            &VerifyCodePayload { email, code },
            None,
        )
        .await
    }

    /// Exchanges credentials for session tokens.
    ///
    /// # Errors
    /// Returns `ApiError` on transport failure or a non-success status.
    pub async fn login(&self, payload: &LoginPayload<'_>) -> Result<TokenResponse, ApiError> {
        self.post_json(LOGIN_PATH, payload, None).await
    }
}
