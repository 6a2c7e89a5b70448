use thiserror::Error;

/// Failures surfaced by the API client.
///
/// `Http` is a failure status with a JSON body and carries its `message`
/// when present. `UnreadableResponse` is a failure status whose body is not
/// JSON; like the other variants it is a problem the user can only retry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Http {
        status: u16,
        message: Option<String>,
    },
    #[error("Unreadable response ({status}): {detail}")]
    UnreadableResponse { status: u16, detail: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Failure status of the response, readable body or not.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } | Self::UnreadableResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for a 401 response, the only status that means the session is gone.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// The message the server put in an error body, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }

    /// True when the server answered with a failure status and a JSON body.
    #[must_use]
    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http { .. })
    }
}
