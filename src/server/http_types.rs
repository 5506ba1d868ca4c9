use crate::domain::{ApiKey, API_KEY_SCHEME};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub(super) struct HealthResponse {
    #[schema(example = "healthy")]
    pub(super) status: String,
}

#[derive(Serialize, ToSchema)]
pub(super) struct WhoAmIResponse {
    #[schema(example = "ApiKey")]
    pub(super) scheme: String,
    /// Truncated SHA-256 of the key; the key itself is never echoed.
    #[schema(example = "q1Zk3mJ0aXcB")]
    pub(super) fingerprint: String,
    pub(super) length: usize,
}

impl From<&ApiKey> for WhoAmIResponse {
    fn from(key: &ApiKey) -> Self {
        Self {
            scheme: API_KEY_SCHEME.to_string(),
            fingerprint: key.fingerprint(),
            length: key.as_str().len(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub(super) struct ErrorResponse {
    #[schema(example = "no authorization header included")]
    pub(super) error: String,
    #[schema(example = "no_auth_header")]
    pub(super) code: String,
}
