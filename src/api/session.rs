//! Explicit session credential. The auth service sets `HttpOnly` cookies on
//! login; this client instead keeps the tokens from the response body and
//! passes them to each authenticated call, so nothing is attached implicitly.

use secrecy::{ExposeSecret, SecretString};

#[derive(Clone)]
pub struct Session {
    access_token: SecretString,
    refresh_token: Option<SecretString>,
}

impl Session {
    #[must_use]
    pub fn new(access_token: SecretString, refresh_token: Option<SecretString>) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }

    /// Wraps a bare access token, e.g. one supplied through the environment.
    #[must_use]
    pub fn from_access_token(token: &str) -> Self {
        Self::new(SecretString::from(token.trim().to_string()), None)
    }

    /// `Authorization` header value for this session.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token.expose_secret())
    }

    #[must_use]
    pub fn access_token(&self) -> &SecretString {
        &self.access_token
    }

    #[must_use]
    pub fn refresh_token(&self) -> Option<&SecretString> {
        self.refresh_token.as_ref()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"***")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "***"),
            )
            .finish()
    }
}
