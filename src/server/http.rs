use super::http_auth::{AuthRealm, RequireApiKey};
use super::http_types::{ErrorResponse, HealthResponse, WhoAmIResponse};
use super::state::AppState;
use axum::{http::StatusCode, response::IntoResponse, routing::get, Extension, Json, Router};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::{
    openapi::security::{ApiKey as ApiKeyScheme, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

/// Build the router. The state only carries the realm, which reaches
/// [`RequireApiKey`] through an `Extension` layer.
pub fn router(state: AppState) -> Router {
    let AppState { realm } = state;

    Router::new()
        .route("/health", get(health_check))
        .route("/whoami", get(whoami))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(Extension(AuthRealm(realm)))
        .layer(TraceLayer::new_for_http())
}

#[derive(OpenApi)]
#[openapi(
    paths(health_check, whoami),
    components(schemas(HealthResponse, WhoAmIResponse, ErrorResponse)),
    modifiers(&ApiKeySecurity),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Auth", description = "API key extraction endpoints"),
    ),
    info(
        title = "API Key Auth",
        version = "0.1.0",
        description = "Parses `Authorization: ApiKey <token>` headers",
        license(name = "MIT")
    )
)]
struct ApiDoc;

struct ApiKeySecurity;

impl Modify for ApiKeySecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKeyScheme::Header(ApiKeyValue::with_description(
                    "Authorization",
                    "Send `ApiKey <token>`",
                ))),
            );
        }
    }
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}

/// Echo what was extracted from the `Authorization` header.
///
/// No lookup happens here: any well-formed `ApiKey` header is accepted.
#[utoipa::path(
    get,
    path = "/whoami",
    tag = "Auth",
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Key extracted", body = WhoAmIResponse),
        (
            status = 401,
            description = "Missing or malformed authorization header",
            body = ErrorResponse
        )
    )
)]
async fn whoami(RequireApiKey(key): RequireApiKey) -> impl IntoResponse {
    let response = WhoAmIResponse::from(&key);
    info!(fingerprint = %response.fingerprint, "API key extracted");
    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn rejection_realm_comes_from_state() {
        let resp = router(AppState::new("billing"))
            .oneshot(Request::builder().uri("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            resp.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "ApiKey realm=\"billing\""
        );
    }

    #[test]
    fn openapi_lists_routes_and_security() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/health"));
        assert!(doc.paths.paths.contains_key("/whoami"));
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("api_key"));
    }
}
