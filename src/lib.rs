//! TaxonBuddy Telegram Bot
//!
//! A Telegram inline bot for searching the iNaturalist species taxonomy.
//! This library provides modular components for configuration, the taxa
//! search service, and the command and inline-query handlers.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, TaxonBuddyError};

// Re-export main components for easy access
pub use services::{ServiceFactory, TaxaService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
