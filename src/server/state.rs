use crate::infrastructure::AppConfig;

#[derive(Clone, Debug)]
pub struct AppState {
    pub realm: String,
}

impl AppState {
    pub fn new(realm: impl Into<String>) -> Self {
        Self {
            realm: realm.into(),
        }
    }
}

/// Build state for the standalone server.
pub fn build_state(config: &AppConfig) -> AppState {
    AppState::new(config.auth_realm.clone())
}
