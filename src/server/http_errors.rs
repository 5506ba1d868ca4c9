use super::http_types::ErrorResponse;
use crate::domain::{AuthError, API_KEY_SCHEME};
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

/// 401 returned when the `Authorization` header is absent or not `ApiKey <token>`.
#[derive(Debug)]
pub struct AuthRejection {
    pub error: AuthError,
    pub realm: String,
}

impl AuthRejection {
    fn challenge(&self) -> HeaderValue {
        let realm = self.realm.replace(['\\', '"'], "");
        HeaderValue::from_str(&format!("{} realm=\"{}\"", API_KEY_SCHEME, realm))
            .unwrap_or_else(|_| HeaderValue::from_static(API_KEY_SCHEME))
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let challenge = self.challenge();
        let body = ErrorResponse {
            error: self.error.to_string(),
            code: self.error.code().to_string(),
        };

        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, challenge)],
            Json(body),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejection(error: AuthError, realm: &str) -> AuthRejection {
        AuthRejection {
            error,
            realm: realm.to_string(),
        }
    }

    #[test]
    fn response_is_401_with_challenge() {
        let resp = rejection(AuthError::NoAuthHeader, "api").into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "ApiKey realm=\"api\""
        );
    }

    #[test]
    fn challenge_strips_quotes_from_realm() {
        let value = rejection(AuthError::MalformedHeader, "a\"b\\c").challenge();
        assert_eq!(value, "ApiKey realm=\"abc\"");
    }

    #[test]
    fn challenge_falls_back_on_invalid_realm() {
        let value = rejection(AuthError::MalformedHeader, "bad\nrealm").challenge();
        assert_eq!(value, "ApiKey");
    }
}
