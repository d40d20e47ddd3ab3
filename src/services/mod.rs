//! Services module
//!
//! This module contains the outbound API clients used by the handlers.

pub mod taxa;

// Re-export commonly used services
pub use taxa::TaxaService;

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub taxa_service: TaxaService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: Settings) -> Result<Self> {
        let taxa_service = TaxaService::new(settings)?;

        Ok(Self { taxa_service })
    }
}
