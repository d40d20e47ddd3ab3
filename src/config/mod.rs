//! Configuration module
//!
//! Typed application settings loaded from a TOML file and environment
//! variables, plus startup validation.

pub mod settings;
pub mod validation;

pub use settings::{BotConfig, LoggingConfig, Settings, TaxaApiConfig};
