use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Server settings. Defaults match the development setup; everything is
/// overridable through `APP_*` environment variables (e.g. `APP_PORT=8080`),
/// with `.env` files loaded by the binary before settings are read.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Comma-separated list of allowed CORS origins; `*` allows any.
    pub cors_origins: String,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        defaults()?
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    pub fn allow_any_origin(&self) -> bool {
        self.cors_origins.trim() == "*"
    }

    pub fn origins(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect()
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("host", "127.0.0.1")?
        .set_default("port", 3001)?
        .set_default("cors_origins", "*")
}
