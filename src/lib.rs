//! API Key Auth
//!
//! Extracts the token from an `Authorization: ApiKey <token>` request header.
//!
//! ## Library
//!
//! ```rust
//! use apikey_auth::{get_api_key, AuthError};
//! use http::{header, HeaderMap, HeaderValue};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(header::AUTHORIZATION, HeaderValue::from_static("ApiKey abc123xyz"));
//! assert_eq!(get_api_key(&headers), Ok("abc123xyz"));
//! assert_eq!(get_api_key(&HeaderMap::new()), Err(AuthError::NoAuthHeader));
//! ```
//!
//! ## Embedded (Axum)
//!
//! When the `server` feature is enabled, handlers can take the key as an extractor:
//! ```rust,ignore
//! use apikey_auth::server::RequireApiKey;
//!
//! async fn handler(RequireApiKey(key): RequireApiKey) -> String {
//!     key.fingerprint()
//! }
//! ```
//!
//! ## Standalone
//!
//! ```bash
//! apikey-auth-server
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

// Enabled behind the `server` feature so the core library can be used without Axum.
#[cfg(feature = "server")]
pub mod server;

pub use application::*;
pub use domain::*;
pub use infrastructure::*;

#[cfg(feature = "server")]
pub use server::*;
