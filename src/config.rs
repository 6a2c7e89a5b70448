//! Client configuration: where the auth service lives and how long a request
//! may take. Values arrive from CLI flags or their environment fallbacks and
//! are normalized here so every request builds URLs the same way.
//! Configuration values are public; do not store secrets here.

use crate::api::ApiError;
use std::time::Duration;
use url::Url;

/// Base path of the auth service when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api/v1/auth-srv";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

impl ClientConfig {
    /// Builds a config from a raw base URL and a timeout in seconds.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the URL is empty, unparsable, not http(s),
    /// or the timeout is zero.
    pub fn new(api_base_url: &str, timeout_seconds: u64) -> Result<Self, ApiError> {
        if timeout_seconds == 0 {
            return Err(ApiError::Config(
                "Timeout must be at least one second.".to_string(),
            ));
        }

        Ok(Self {
            api_base_url: normalize_base_url(api_base_url)?,
            timeout: Duration::from_secs(timeout_seconds),
        })
    }

    /// Joins an endpoint path onto the base URL.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        build_url_with_base(&self.api_base_url, path)
    }
}

fn normalize_base_url(value: &str) -> Result<String, ApiError> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ApiError::Config("API base URL is empty.".to_string()));
    }

    let parsed = Url::parse(trimmed)
        .map_err(|err| ApiError::Config(format!("Invalid API base URL {trimmed}: {err}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        scheme => Err(ApiError::Config(format!(
            "Unsupported API base URL scheme: {scheme}"
        ))),
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_auth_service() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn new_trims_trailing_slashes() -> Result<(), ApiError> {
        let config = ClientConfig::new("  https://api.billbharat.in/auth-srv// ", 5)?;
        assert_eq!(config.api_base_url, "https://api.billbharat.in/auth-srv");
        assert_eq!(config.timeout, Duration::from_secs(5));
        Ok(())
    }

    #[test]
    fn new_rejects_bad_input() {
        assert!(matches!(
            ClientConfig::new("", 5),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::new("not a url", 5),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::new("ftp://files.billbharat.in", 5),
            Err(ApiError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::new("http://localhost:8080", 0),
            Err(ApiError::Config(_))
        ));
    }

    #[test]
    fn url_for_joins_with_single_slash() {
        let config = ClientConfig::default();
        assert_eq!(
            config.url_for("/auth/register"),
            "http://localhost:8080/api/v1/auth-srv/auth/register"
        );
        assert_eq!(
            config.url_for("businesses/list"),
            "http://localhost:8080/api/v1/auth-srv/businesses/list"
        );
    }

    #[test]
    fn build_url_with_empty_base_keeps_path() {
        assert_eq!(build_url_with_base("  ", "/auth/login"), "/auth/login");
    }
}
