use async_trait::async_trait;

use crate::error::Result;

/// Address-resolution capability: best-match coordinates for a free-form
/// query. `Ok(None)` covers both "no match" and a timed-out request.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, query: &str) -> Result<Option<(f64, f64)>>;
}
