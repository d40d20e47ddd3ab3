//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured before startup.

use super::Settings;
use crate::utils::errors::{Result, TaxonBuddyError};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_taxa_config(&settings.taxa)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(TaxonBuddyError::Config("Bot token is required".to_string()));
    }

    // Webhook mode needs both halves of the public URL
    if config.port.is_some() && config.name.is_none() {
        return Err(TaxonBuddyError::Config(
            "Webhook port is set but the app name is missing".to_string(),
        ));
    }

    Ok(())
}

/// Validate taxa API configuration
fn validate_taxa_config(config: &super::TaxaApiConfig) -> Result<()> {
    if config.api_url.is_empty() {
        return Err(TaxonBuddyError::Config(
            "Taxa API URL is required".to_string(),
        ));
    }

    url::Url::parse(&config.api_url)
        .map_err(|e| TaxonBuddyError::Config(format!("Invalid taxa API URL: {}", e)))?;

    if config.per_page == 0 {
        return Err(TaxonBuddyError::Config(
            "Taxa page size must be greater than 0".to_string(),
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(TaxonBuddyError::Config(
            "Taxa API timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(TaxonBuddyError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(TaxonBuddyError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
