//! Two-channel one-time-code verification.
//!
//! The flow is keyed by the email registered in the previous step. It holds
//! the active channel and the code being typed; each action addresses the
//! endpoint pair of the active channel. A successful verification clears the
//! code but keeps the flow open so the other channel can be verified too.

use super::{message_or, Notice, Outcome, Route, GENERIC_FAILURE};
use crate::api::ApiClient;
use std::{fmt, str::FromStr};
use tracing::{error, info, warn};

/// Digits in a one-time code.
pub const CODE_LENGTH: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerificationChannel {
    #[default]
    Email,
    Phone,
}

impl VerificationChannel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Phone => "Phone",
        }
    }
}

impl fmt::Display for VerificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerificationChannel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            other => Err(format!("unknown verification channel: {other}")),
        }
    }
}

/// Code as typed into the six-slot input: ASCII digits only, at most six.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct OneTimeCode(String);

impl OneTimeCode {
    /// Replaces the code with the digits of `input`, dropping anything past six.
    pub fn set(&mut self, input: &str) {
        self.0 = input
            .chars()
            .filter(char::is_ascii_digit)
            .take(CODE_LENGTH)
            .collect();
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.len() == CODE_LENGTH
    }
}

impl fmt::Debug for OneTimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OneTimeCode({} digits)", self.0.len())
    }
}

/// Result of opening the verification screen.
#[derive(Debug)]
pub enum VerifyEntry {
    Ready(VerifyFlow),
    /// No email in the navigation context; go back to registration.
    Redirect(Outcome),
}

#[derive(Debug)]
pub struct VerifyFlow {
    email: String,
    channel: VerificationChannel,
    code: OneTimeCode,
    loading: bool,
    email_verified: bool,
    phone_verified: bool,
}

impl VerifyFlow {
    /// Opens the flow for `email`. A missing or blank email redirects to
    /// registration.
    #[must_use]
    pub fn open(email: Option<&str>) -> VerifyEntry {
        match email.map(str::trim).filter(|email| !email.is_empty()) {
            Some(email) => VerifyEntry::Ready(Self {
                email: email.to_string(),
                channel: VerificationChannel::Email,
                code: OneTimeCode::default(),
                loading: false,
                email_verified: false,
                phone_verified: false,
            }),
            None => {
                warn!("verification opened without an email");
                VerifyEntry::Redirect(
                    Outcome::with_notice(Notice::error(
                        "Email is missing. Redirecting to register.",
                    ))
                    .navigate_to(Route::Register),
                )
            }
        }
    }

    /// Opens the flow from a navigation target such as `/verify?email=...`.
    #[must_use]
    pub fn from_route(route: &Route) -> VerifyEntry {
        match route {
            Route::Verify { email } => Self::open(email.as_deref()),
            _ => Self::open(None),
        }
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn channel(&self) -> VerificationChannel {
        self.channel
    }

    #[must_use]
    pub fn code(&self) -> &OneTimeCode {
        &self.code
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Activates `channel`. The typed code is always discarded.
    pub fn switch_channel(&mut self, channel: VerificationChannel) {
        self.channel = channel;
        self.code.clear();
    }

    pub fn enter_code(&mut self, input: &str) {
        self.code.set(input);
    }

    /// Whether the verify action is enabled.
    #[must_use]
    pub fn can_verify(&self) -> bool {
        !self.loading && self.code.is_complete()
    }

    #[must_use]
    pub fn is_verified(&self, channel: VerificationChannel) -> bool {
        match channel {
            VerificationChannel::Email => self.email_verified,
            VerificationChannel::Phone => self.phone_verified,
        }
    }

    #[must_use]
    pub fn is_fully_verified(&self) -> bool {
        self.email_verified && self.phone_verified
    }

    /// Asks the service to send a code over the active channel. Channel and
    /// code are left untouched.
    pub async fn request_code(&mut self, client: &ApiClient) -> Outcome {
        let channel = self.channel;

        self.loading = true;
        let result = client.send_verification_code(channel, &self.email).await;
        self.loading = false;

        match result {
            Ok(_) => {
                info!(%channel, "verification code sent");
                Outcome::with_notice(Notice::success(format!("OTP sent to your {channel}!")))
            }
            Err(err) if err.is_http() => {
                warn!(%channel, error = %err, "verification code refused");
                Outcome::with_notice(Notice::error(message_or(
                    err.server_message(),
                    "Failed to send OTP",
                )))
            }
            Err(err) => {
                error!(%channel, error = %err, "verification code request failed");
                Outcome::with_notice(Notice::error(GENERIC_FAILURE))
            }
        }
    }

    /// Submits the typed code for the active channel. Only a complete code is
    /// sent; on failure the code is kept for correction.
    pub async fn submit_code(&mut self, client: &ApiClient) -> Outcome {
        if !self.code.is_complete() {
            return Outcome::with_notice(Notice::error("Please enter a valid 6-digit OTP"));
        }

        let channel = self.channel;

        self.loading = true;
        let result = client
            .verify_code(channel, &self.email, self.code.as_str())
            .await;
        self.loading = false;

        match result {
            Ok(_) => {
                info!(%channel, "channel verified");
                self.code.clear();
                match channel {
                    VerificationChannel::Email => self.email_verified = true,
                    VerificationChannel::Phone => self.phone_verified = true,
                }
                Outcome::with_notice(Notice::success(format!(
                    "{} verified successfully!",
                    channel.label()
                )))
            }
            Err(err) if err.is_http() => {
                warn!(%channel, error = %err, "verification code rejected");
                Outcome::with_notice(Notice::error(message_or(
                    err.server_message(),
                    "Verification failed",
                )))
            }
            Err(err) => {
                error!(%channel, error = %err, "verification request failed");
                Outcome::with_notice(Notice::error(GENERIC_FAILURE))
            }
        }
    }
}
