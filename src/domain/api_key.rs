use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use sha2::{Digest, Sha256};
use std::fmt;

/// Authorization scheme accepted by the extractor. Compared case-sensitively.
pub const API_KEY_SCHEME: &str = "ApiKey";

const FINGERPRINT_LEN: usize = 12;

/// An API key taken from an `Authorization: ApiKey <token>` header.
///
/// The token is kept exactly as it appeared in the header, leading spaces
/// included. `Debug` never prints it; use [`ApiKey::fingerprint`] when a key
/// has to show up in logs or responses.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Short, non-reversible identifier: the leading characters of the
    /// unpadded URL-safe base64 SHA-256 digest of the token.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        let mut encoded = URL_SAFE_NO_PAD.encode(digest);
        encoded.truncate(FINGERPRINT_LEN);
        encoded
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ApiKey {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
