//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Inline handler for inline taxonomy search queries

pub mod commands;
pub mod inline;

// Re-export commonly used handler functions
pub use commands::*;
pub use inline::handle_inline_query;
