//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub taxa: TaxaApiConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    /// Heroku-style subdomain used to build the public webhook URL.
    /// When `name` or `port` is absent the bot falls back to long polling.
    pub name: Option<String>,
    pub port: Option<u16>,
}

/// iNaturalist taxa API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TaxaApiConfig {
    pub api_url: String,
    pub per_page: u32,
    pub timeout_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables.
    ///
    /// Layered sources, later ones win: struct defaults, an optional
    /// `config.toml`, `TAXONBUDDY_*` environment variables, and finally the
    /// bare deployment variables `TOKEN`, `NAME` and `PORT`. A non-numeric
    /// `PORT` fails deserialization here, before the bot starts.
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("TAXONBUDDY").separator("__"))
            .set_override_option("bot.token", std::env::var("TOKEN").ok())?
            .set_override_option("bot.name", std::env::var("NAME").ok())?
            .set_override_option("bot.port", std::env::var("PORT").ok())?
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::TaxonBuddyError> {
        super::validation::validate_settings(self)
    }

    /// Public webhook URL, when webhook mode is configured
    pub fn webhook_url(&self) -> Option<String> {
        self.bot
            .name
            .as_ref()
            .map(|name| format!("https://{}.herokuapp.com/{}", name, self.bot.token))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                name: None,
                port: None,
            },
            taxa: TaxaApiConfig {
                api_url: "https://api.inaturalist.org/v1".to_string(),
                per_page: 5,
                timeout_seconds: 10,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
