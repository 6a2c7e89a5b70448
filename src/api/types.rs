//! Request and response bodies for the auth service. Request payloads borrow
//! from the flow state so passwords are only exposed for the duration of a
//! serialization; they must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct RegisterPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub country_code: &'a str,
    pub phone: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct EmailPayload<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct VerifyCodePayload<'a> {
    pub email: &'a str,
    pub code: &'a str,
}

#[derive(Serialize)]
pub struct LoginPayload<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// The `{message}` envelope every endpoint answers with.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MessageResponse {
    pub message: Option<String>,
}

/// Tokens issued by login and by a business switch. Lifetimes and other
/// fields of the payload are ignored.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct TokenData {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

impl std::fmt::Debug for TokenData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenData")
            .field("access_token", &"***")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "***"))
            .finish()
    }
}

/// `{message, data: {access_token, ...}}` returned by login and select.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TokenResponse {
    pub message: Option<String>,
    pub data: Option<TokenData>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Business {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct BusinessListData {
    businesses: Option<Vec<Business>>,
}

/// Business list body. The service answers `{businesses: [...]}`; the same
/// list wrapped in the standard `data` envelope is accepted too.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct BusinessListResponse {
    businesses: Option<Vec<Business>>,
    data: Option<BusinessListData>,
}

impl BusinessListResponse {
    /// A missing list is an empty list.
    #[must_use]
    pub fn into_businesses(self) -> Vec<Business> {
        self.businesses
            .or_else(|| self.data.and_then(|data| data.businesses))
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn register_payload_uses_snake_case_fields() {
        let payload = RegisterPayload {
            name: "Jane Doe",
            email: "jane@x.com",
            country_code: "+91",
            phone: "9876543210",
            password: "password123",
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Jane Doe",
                "email": "jane@x.com",
                "country_code": "+91",
                "phone": "9876543210",
                "password": "password123"
            })
        );
    }

    #[test]
    fn business_list_reads_top_level_and_data_envelope() {
        let top: BusinessListResponse = serde_json::from_value(json!({
            "businesses": [{"id": "b1", "name": "Acme"}]
        }))
        .unwrap();
        assert_eq!(
            top.into_businesses(),
            vec![Business {
                id: "b1".to_string(),
                name: "Acme".to_string()
            }]
        );

        let wrapped: BusinessListResponse = serde_json::from_value(json!({
            "message": "ok",
            "data": {"businesses": [{"id": "b2", "name": "Bharat Traders"}]}
        }))
        .unwrap();
        assert_eq!(wrapped.into_businesses().len(), 1);
    }

    #[test]
    fn business_list_missing_is_empty() {
        let empty: BusinessListResponse = serde_json::from_value(json!({})).unwrap();
        assert!(empty.into_businesses().is_empty());
    }

    #[test]
    fn token_response_ignores_lifetimes() {
        let response: TokenResponse = serde_json::from_value(json!({
            "message": "Logged in",
            "data": {
                "access_token": "access-abc",
                "refresh_token": "refresh-xyz",
                "access_token_lifetime": "2026-10-16T10:00:00Z",
                "refresh_token_lifetime": "2026-11-16T10:00:00Z"
            },
            "error": null
        }))
        .unwrap();
        let data = response.data.unwrap();
        assert_eq!(data.access_token, "access-abc");
        assert_eq!(data.refresh_token.as_deref(), Some("refresh-xyz"));
        let debug = format!("{data:?}");
        assert!(!debug.contains("access-abc"));
        assert!(!debug.contains("refresh-xyz"));
    }
}
