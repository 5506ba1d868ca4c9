use strum::IntoStaticStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum AuthError {
    #[error("no authorization header included")]
    NoAuthHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
}

impl AuthError {
    /// Stable machine-readable kind, e.g. `no_auth_header`.
    pub fn code(&self) -> &'static str {
        self.into()
    }
}
