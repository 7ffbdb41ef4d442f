use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::error::Result;
use crate::geo::Geocoder;
use crate::llm::PlaceExtractor;
use crate::models::ResolvedLocation;
use crate::resolver::LocationResolver;

/// Country qualifier appended to every geocoding query so ambiguous place
/// names anchor to the right country.
const COUNTRY_QUALIFIER: &str = "日本";

/// Two-step resolver: LLM place extraction, then geocoding. One extraction
/// call and at most one geocoding call per candidate.
pub struct GeocodeResolver {
    extractor: Box<dyn PlaceExtractor>,
    geocoder: Box<dyn Geocoder>,
    call_interval: Duration,
}

impl GeocodeResolver {
    pub fn new(
        extractor: Box<dyn PlaceExtractor>,
        geocoder: Box<dyn Geocoder>,
        call_interval: Duration,
    ) -> Self {
        Self {
            extractor,
            geocoder,
            call_interval,
        }
    }
}

#[async_trait]
impl LocationResolver for GeocodeResolver {
    async fn resolve(&self, title: &str) -> Result<Option<ResolvedLocation>> {
        let place = match self.extractor.extract_place(title).await {
            Ok(Some(place)) => place,
            Ok(None) => return Ok(None),
            Err(e) => {
                // A capability failure counts as a miss for this title; the
                // candidate stays un-stored, so the next run retries it.
                warn!("Place extraction failed: {}", e);
                return Ok(None);
            }
        };

        let query = format!("{}, {}", place, COUNTRY_QUALIFIER);
        match self.geocoder.geocode(&query).await {
            Ok(Some((lat, lng))) => Ok(Some(ResolvedLocation {
                label: place,
                lat,
                lng,
            })),
            Ok(None) => Ok(None),
            Err(e) => {
                warn!("Geocoding failed for {}: {}", place, e);
                Ok(None)
            }
        }
    }

    fn call_interval(&self) -> Option<Duration> {
        Some(self.call_interval)
    }

    fn name(&self) -> &str {
        "geocode"
    }
}
