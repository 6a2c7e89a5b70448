//! Onboarding flows, one per screen of the web client.
//!
//! A flow owns its transient form state, validates input locally, calls the
//! auth service through [`crate::api::ApiClient`], and reports what happened
//! as an [`Outcome`]: an optional [`Notice`] for the user and an optional
//! [`Route`] to navigate to. Server failures never surface as `Err`; they are
//! folded into error notices so a front end only has to render outcomes.
//!
//! Flows are connected only by routes: registration navigates to
//! `Route::Verify`, an expired session navigates to `Route::Login`, login
//! navigates to `Route::SelectBusiness`, and a business switch navigates to
//! `Route::Home`.

pub mod business;
pub mod login;
pub mod register;
pub mod verify;

use std::fmt;

/// Shown when the request never produced a usable server answer.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Register,
    Verify { email: Option<String> },
    Login,
    SelectBusiness,
    Home,
}

impl Route {
    /// Verification route for a freshly registered email.
    #[must_use]
    pub fn verify(email: &str) -> Self {
        Self::Verify {
            email: Some(email.to_string()),
        }
    }

    /// Path form used by the web client, with the email query-encoded.
    #[must_use]
    pub fn to_path(&self) -> String {
        match self {
            Self::Register => "/register".to_string(),
            Self::Verify { email: Some(email) } => {
                let query: String = url::form_urlencoded::Serializer::new(String::new())
                    .append_pair("email", email)
                    .finish();
                format!("/verify?{query}")
            }
            Self::Verify { email: None } => "/verify".to_string(),
            Self::Login => "/login".to_string(),
            Self::SelectBusiness => "/business/select".to_string(),
            Self::Home => "/".to_string(),
        }
    }

    /// Parses the path form back into a route. Unknown paths yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let (path, query) = value.split_once('?').unwrap_or((value, ""));
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };

        match path {
            "/register" => Some(Self::Register),
            "/verify" => {
                let email = url::form_urlencoded::parse(query.as_bytes())
                    .find(|(key, _)| key == "email")
                    .map(|(_, value)| value.trim().to_string())
                    .filter(|value| !value.is_empty());
                Some(Self::Verify { email })
            }
            "/login" => Some(Self::Login),
            "/business/select" => Some(Self::SelectBusiness),
            "/" => Some(Self::Home),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// Transient user-facing notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of a flow action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub notice: Option<Notice>,
    pub navigate: Option<Route>,
}

impl Outcome {
    #[must_use]
    pub fn with_notice(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            navigate: None,
        }
    }

    #[must_use]
    pub fn navigate_to(mut self, route: Route) -> Self {
        self.navigate = Some(route);
        self
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.notice.as_ref().is_some_and(Notice::is_error)
    }
}

/// The server message as sent, or `fallback` when it is absent or empty.
fn message_or(message: Option<&str>, fallback: &str) -> String {
    message
        .filter(|message| !message.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_route_encodes_email() {
        assert_eq!(
            Route::verify("jane@x.com").to_path(),
            "/verify?email=jane%40x.com"
        );
        assert_eq!(Route::verify("a+b@x.com").to_path(), "/verify?email=a%2Bb%40x.com");
    }

    #[test]
    fn parse_round_trips_every_route() {
        for route in [
            Route::Register,
            Route::verify("jane@x.com"),
            Route::Verify { email: None },
            Route::Login,
            Route::SelectBusiness,
            Route::Home,
        ] {
            assert_eq!(Route::parse(&route.to_path()), Some(route));
        }
    }

    #[test]
    fn parse_treats_blank_email_as_missing() {
        assert_eq!(
            Route::parse("/verify?email="),
            Some(Route::Verify { email: None })
        );
        assert_eq!(
            Route::parse("/verify?other=1"),
            Some(Route::Verify { email: None })
        );
        assert_eq!(Route::parse("/dashboard"), None);
    }

    #[test]
    fn message_or_keeps_server_message_verbatim() {
        assert_eq!(message_or(Some("Invalid code"), "fallback"), "Invalid code");
        assert_eq!(message_or(Some(""), "fallback"), "fallback");
        assert_eq!(message_or(Some(" Invalid code "), "fallback"), " Invalid code ");
        assert_eq!(message_or(None, "fallback"), "fallback");
    }

    #[test]
    fn outcome_error_follows_notice_kind() {
        assert!(Outcome::with_notice(Notice::error("x")).is_error());
        assert!(!Outcome::with_notice(Notice::info("x")).is_error());
        assert!(!Outcome::default().is_error());
    }
}
