//! iNaturalist taxa API response structures
//!
//! Explicitly typed views of the `/taxa` search response, validated by serde
//! at the API-call boundary. Only the fields the bot consumes are modeled;
//! the API returns many more, which serde ignores.

use serde::{Deserialize, Serialize};

/// Response of `GET /taxa`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TaxaResponse {
    pub results: Vec<Taxon>,
    pub total_results: u64,
}

/// A single taxon record
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Taxon {
    pub id: u64,
    pub name: String,
    pub rank: String,
    /// Absent for taxa without an observation photo.
    #[serde(default)]
    pub default_photo: Option<TaxonPhoto>,
}

/// Default photo attached to a taxon
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TaxonPhoto {
    pub url: String,
}

impl Taxon {
    /// Thumbnail URL, present iff the taxon has a default photo
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.default_photo.as_ref().map(|photo| photo.url.as_str())
    }
}
