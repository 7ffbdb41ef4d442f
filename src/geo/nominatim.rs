use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::geo::geocoder::Geocoder;

/// Nominatim API response row.
#[derive(Debug, Deserialize)]
struct NominatimResponse {
    lat: String,
    lon: String,
}

/// Geocoder backed by Nominatim (OpenStreetMap).
pub struct NominatimClient {
    client: Client,
    timeout: Duration,
}

impl NominatimClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            timeout,
        }
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn geocode(&self, query: &str) -> Result<Option<(f64, f64)>> {
        let url = format!(
            "https://nominatim.openstreetmap.org/search?q={}&format=json&limit=1",
            urlencoding::encode(query)
        );

        debug!("Geocoding: {}", query);

        let response = match self
            .client
            .get(&url)
            .header("User-Agent", "bearwatch/0.1 (bear sighting tracker)")
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                warn!("Geocoding request timed out for: {}", query);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        if !response.status().is_success() {
            return Err(Error::Geocode(format!(
                "Nominatim returned {} for: {}",
                response.status(),
                query
            )));
        }

        let matches: Vec<NominatimResponse> = response
            .json()
            .await
            .map_err(|e| Error::Geocode(format!("Failed to parse Nominatim response: {}", e)))?;

        let best = match matches.first() {
            Some(best) => best,
            None => {
                debug!("No geocoding match for: {}", query);
                return Ok(None);
            }
        };

        let lat: f64 = best
            .lat
            .parse()
            .map_err(|e| Error::Geocode(format!("Invalid latitude in response: {}", e)))?;
        let lng: f64 = best
            .lon
            .parse()
            .map_err(|e| Error::Geocode(format!("Invalid longitude in response: {}", e)))?;

        Ok(Some((lat, lng)))
    }
}
