//! Login flow. Exchanges email and password for the session tokens that the
//! business flow needs. The tokens are returned to the caller rather than
//! stored anywhere.

use super::{message_or, register::valid_email, Notice, Outcome, Route, GENERIC_FAILURE};
use crate::api::{types::LoginPayload, ApiClient, Session};
use secrecy::{ExposeSecret, SecretString};
use tracing::{error, info, warn};

/// What a login attempt produced. `session` is set only on success.
#[derive(Debug)]
pub struct LoginResult {
    pub outcome: Outcome,
    pub session: Option<Session>,
}

impl LoginResult {
    fn rejected(outcome: Outcome) -> Self {
        Self {
            outcome,
            session: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct LoginFlow {
    loading: bool,
}

impl LoginFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Validates the credentials and signs in. Success navigates to business
    /// selection with the new session.
    pub async fn submit(
        &mut self,
        client: &ApiClient,
        email: &str,
        password: &SecretString,
    ) -> LoginResult {
        let email = email.trim();
        if !valid_email(email) {
            return LoginResult::rejected(Outcome::with_notice(Notice::error(
                "Please enter a valid email address.",
            )));
        }
        if password.expose_secret().is_empty() {
            return LoginResult::rejected(Outcome::with_notice(Notice::error(
                "Password is required.",
            )));
        }

        self.loading = true;
        let result = client
            .login(&LoginPayload {
                email,
                password: password.expose_secret(),
            })
            .await;
        self.loading = false;

        match result {
            Ok(response) => {
                let Some(tokens) = response
                    .data
                    .filter(|tokens| !tokens.access_token.trim().is_empty())
                else {
                    error!("login response carried no access token");
                    return LoginResult::rejected(Outcome::with_notice(Notice::error(
                        GENERIC_FAILURE,
                    )));
                };

                info!("login succeeded");
                let session = Session::new(
                    SecretString::from(tokens.access_token),
                    tokens.refresh_token.map(SecretString::from),
                );
                LoginResult {
                    outcome: Outcome::with_notice(Notice::success(message_or(
                        response.message.as_deref(),
                        "Login successful",
                    )))
                    .navigate_to(Route::SelectBusiness),
                    session: Some(session),
                }
            }
            Err(err) if err.is_http() => {
                warn!(error = %err, "login refused");
                LoginResult::rejected(Outcome::with_notice(Notice::error(message_or(
                    err.server_message(),
                    "Login failed",
                ))))
            }
            Err(err) => {
                error!(error = %err, "login request failed");
                LoginResult::rejected(Outcome::with_notice(Notice::error(GENERIC_FAILURE)))
            }
        }
    }
}
