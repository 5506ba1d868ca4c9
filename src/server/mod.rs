//! HTTP server support (standalone + embeddable).
//!
//! - **Standalone**: `apikey-auth-server` binary calls `run()`
//! - **Embedded**: host Axum app calls `router(state)`, or uses the
//!   [`RequireApiKey`] extractor directly on its own handlers

mod http;
mod http_auth;
mod http_errors;
mod http_types;
mod state;

pub use self::http::router;
pub use http_auth::{AuthRealm, RequireApiKey, DEFAULT_REALM};
pub use http_errors::AuthRejection;
pub use state::{build_state, AppState};

use crate::infrastructure::AppConfig;
use anyhow::Context;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Standalone entrypoint for the `apikey-auth-server` binary.
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env().context("load config")?;
    let state = build_state(&config);

    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port)
        .parse()
        .context("parse listen address")?;
    let listener = TcpListener::bind(addr).await.context("bind listener")?;

    info!(
        host = %config.server_host,
        port = config.server_port,
        realm = %config.auth_realm,
        "Server running"
    );
    info!(
        docs = %format!("http://{}:{}/docs", config.server_host, config.server_port),
        "API docs"
    );

    let app = router(state);
    axum::serve(listener, app).await.context("serve")?;
    Ok(())
}
