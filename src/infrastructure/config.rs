use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,

    /// Realm advertised in `WWW-Authenticate` on 401 responses.
    pub auth_realm: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("APIKEY_AUTH").separator("__"))
            .set_default("server_host", "0.0.0.0")?
            .set_default("server_port", 8080)?
            .set_default("auth_realm", "api")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_sources() {
        let cfg: AppConfig = AppConfig::builder()
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize())
            .unwrap();

        assert_eq!(cfg.server_host, "0.0.0.0");
        assert_eq!(cfg.server_port, 8080);
        assert_eq!(cfg.auth_realm, "api");
    }

    #[test]
    fn overrides_take_precedence() {
        let cfg: AppConfig = AppConfig::builder()
            .and_then(|b| b.set_override("server_port", 9191))
            .and_then(|b| b.set_override("auth_realm", "internal"))
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize())
            .unwrap();

        assert_eq!(cfg.server_port, 9191);
        assert_eq!(cfg.auth_realm, "internal");
    }
}
