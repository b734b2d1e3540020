use crate::error::AppError;
use config::{builder::DefaultState, ConfigBuilder, Environment, File};
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Layered sources shared by every service: `.env`, an optional
/// `configuration.*` file, then `APP_`-prefixed environment variables
/// (`APP_SERVER__PORT=8080`).
///
/// Services add their own defaults and overrides before calling [`load`].
pub fn layered_builder() -> ConfigBuilder<DefaultState> {
    dotenvy::dotenv().ok();

    config::Config::builder()
        .add_source(File::with_name("configuration").required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
}

pub fn load<T: DeserializeOwned>(builder: ConfigBuilder<DefaultState>) -> Result<T, AppError> {
    let config = builder.build()?;
    Ok(config.try_deserialize()?)
}
