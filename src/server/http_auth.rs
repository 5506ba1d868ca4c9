use super::http_errors::AuthRejection;
use crate::application::get_api_key;
use crate::domain::ApiKey;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::debug;

pub const DEFAULT_REALM: &str = "api";

/// Realm advertised when [`RequireApiKey`] rejects a request.
///
/// Insert it with `Extension(AuthRealm(..))`; [`DEFAULT_REALM`] is used otherwise.
#[derive(Debug, Clone)]
pub struct AuthRealm(pub String);

/// Extractor that requires an `Authorization: ApiKey <token>` header.
///
/// The key is only parsed, never checked against a store. Handlers that need
/// to verify it do so themselves.
#[derive(Debug, Clone)]
pub struct RequireApiKey(pub ApiKey);

#[async_trait]
impl<S> FromRequestParts<S> for RequireApiKey
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match get_api_key(&parts.headers) {
            Ok(token) => Ok(RequireApiKey(ApiKey::new(token))),
            Err(error) => {
                let realm = parts
                    .extensions
                    .get::<AuthRealm>()
                    .map(|r| r.0.clone())
                    .unwrap_or_else(|| DEFAULT_REALM.to_string());
                debug!(code = error.code(), %realm, "Rejected API key authorization");
                Err(AuthRejection { error, realm })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AuthError;
    use axum::http::{header, Request};

    async fn extract(req: Request<()>) -> Result<RequireApiKey, AuthRejection> {
        let (mut parts, _) = req.into_parts();
        RequireApiKey::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn extracts_key_from_header() {
        let req = Request::builder()
            .header(header::AUTHORIZATION, "ApiKey abc123")
            .body(())
            .unwrap();
        let RequireApiKey(key) = extract(req).await.unwrap();
        assert_eq!(key.as_str(), "abc123");
    }

    #[tokio::test]
    async fn missing_header_uses_default_realm() {
        let req = Request::builder().body(()).unwrap();
        let rejection = extract(req).await.unwrap_err();
        assert_eq!(rejection.error, AuthError::NoAuthHeader);
        assert_eq!(rejection.realm, DEFAULT_REALM);
    }

    #[tokio::test]
    async fn realm_comes_from_extensions() {
        let req = Request::builder()
            .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
            .extension(AuthRealm("internal".to_string()))
            .body(())
            .unwrap();
        let rejection = extract(req).await.unwrap_err();
        assert_eq!(rejection.error, AuthError::MalformedHeader);
        assert_eq!(rejection.realm, "internal");
    }
}
