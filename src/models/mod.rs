//! Data models
//!
//! Typed structures for the iNaturalist taxa API responses.

pub mod taxon;

pub use taxon::{TaxaResponse, Taxon, TaxonPhoto};
