use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A single persisted sighting. Created once at ingestion time from a
/// successful resolution, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SightingRecord {
    pub id: String,
    pub title: String,
    pub location: String,
    pub lat: f64,
    pub lng: f64,
    pub date: String,
    pub link: String,
    pub source: String,
}

impl SightingRecord {
    /// Identity key for a record: SHA-256 of the source link, lowercase hex.
    /// A pure function of the link, so re-ingesting the same article always
    /// produces the same id.
    pub fn id_for(link: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(link.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

/// Outcome of a successful location resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLocation {
    pub label: String,
    pub lat: f64,
    pub lng: f64,
}
