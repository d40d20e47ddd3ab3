//! Utility modules
//!
//! Common helpers shared across the application: error types, logging
//! setup and small text/pagination helpers.

pub mod errors;
pub mod helpers;
pub mod logging;

pub use errors::{Result, TaxaError, TaxonBuddyError};
