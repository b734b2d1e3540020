use config::{builder::DefaultState, ConfigBuilder};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use service_core::config::{self as core_config, ServerConfig};
use service_core::error::AppError;
use std::env;
use std::time::Duration;

/// Environment variable holding the Slack bot token.
pub const BOT_TOKEN_ENV: &str = "BOT_TOKEN";

pub const SLACK_API_URL: &str = "https://slack.com/api";

#[derive(Debug, Clone, Deserialize)]
pub struct FrontDeskConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub slack: SlackConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlackConfig {
    /// When false the service runs against an in-memory directory.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "empty_token")]
    pub bot_token: Secret<String>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// `users.list` page size.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            bot_token: empty_token(),
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
        }
    }
}

impl SlackConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Spans are exported over OTLP only when this is set.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn empty_token() -> Secret<String> {
    Secret::new(String::new())
}

fn default_api_base_url() -> String {
    SLACK_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_page_size() -> u32 {
    200
}

fn default_log_level() -> String {
    "info".to_string()
}

impl FrontDeskConfig {
    /// Load from `.env`, `configuration.*`, `APP_*` variables and `BOT_TOKEN`.
    pub fn load() -> Result<Self, AppError> {
        let builder = core_config::layered_builder();
        Self::from_builder(builder, env::var(BOT_TOKEN_ENV).ok())
    }

    /// `bot_token`, when present, overrides any token from the other sources.
    pub fn from_builder(
        builder: ConfigBuilder<DefaultState>,
        bot_token: Option<String>,
    ) -> Result<Self, AppError> {
        let builder = builder.set_override_option("slack.bot_token", bot_token)?;
        let config: Self = core_config::load(builder)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !self.slack.enabled {
            return Ok(());
        }

        if self.slack.bot_token.expose_secret().trim().is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "{} is required but not set",
                BOT_TOKEN_ENV
            )));
        }

        if self.slack.timeout_secs == 0 {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "slack.timeout_secs must be greater than zero"
            )));
        }

        if self.slack.page_size == 0 {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "slack.page_size must be greater than zero"
            )));
        }

        Ok(())
    }
}
