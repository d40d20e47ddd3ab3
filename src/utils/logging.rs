//! Logging configuration and setup
//!
//! This module provides logging initialization for the TaxonBuddy application.
//! The subscriber is constructed explicitly at startup and installed once; the
//! returned guard keeps the optional file writer alive for the application
//! lifetime.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// Returns the non-blocking writer guard when a log file is configured.
/// Dropping the guard flushes and stops the background writer, so the caller
/// must hold it until shutdown.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::new(&config.level);
    let stdout_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    let guard = match &config.file_path {
        Some(file_path) => {
            let file_appender = tracing_appender::rolling::daily(file_path, "taxonbuddy.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stdout_layer)
                .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stdout_layer)
                .init();
            None
        }
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log inline search activity with structured data
pub fn log_inline_search(user_id: u64, query: &str, page: u32, result_count: usize) {
    info!(
        user_id = user_id,
        query = query,
        page = page,
        result_count = result_count,
        "Inline search answered"
    );
}
