//! Wrappers for the session-scoped `/businesses/*` endpoints.

use super::{
    types::{Business, BusinessListResponse, TokenResponse},
    ApiClient, ApiError, Session,
};

pub const LIST_PATH: &str = "/businesses/list";

/// Selection path with the id encoded as a single path segment.
#[must_use]
pub fn select_path(business_id: &str) -> String {
    let segment: String =
        url::form_urlencoded::byte_serialize(business_id.as_bytes()).collect();
    // form encoding turns spaces into `+`, which is literal inside a path
    format!("/businesses/select/{}", segment.replace('+', "%20"))
}

impl ApiClient {
    /// Lists the businesses the session's user belongs to.
    ///
    /// # Errors
    /// Returns `ApiError` on transport failure or a non-success status; a 401
    /// means the session is no longer valid.
    pub async fn list_businesses(&self, session: &Session) -> Result<Vec<Business>, ApiError> {
        let response: BusinessListResponse = self.get_json(LIST_PATH, Some(session)).await?;
        Ok(response.into_businesses())
    }

    /// Switches the session to `business_id`. The service answers with tokens
    /// scoped to that business.
    ///
    /// # Errors
    /// Returns `ApiError` on transport failure or a non-success status.
    pub async fn select_business(
        &self,
        session: &Session,
        business_id: &str,
    ) -> Result<TokenResponse, ApiError> {
        self.post_empty(&select_path(business_id), Some(session))
            .await
    }
}
