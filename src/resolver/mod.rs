use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ResolvedLocation;

pub mod gazetteer;
pub mod geocode;

pub use gazetteer::{GazetteerResolver, GAZETTEER_LABEL};
pub use geocode::GeocodeResolver;

/// Resolves a headline to a coordinate. `Ok(None)` is a resolution miss,
/// an expected outcome for a fair share of titles, never an abort; the
/// candidate is dropped and the run continues.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    async fn resolve(&self, title: &str) -> Result<Option<ResolvedLocation>>;

    /// Minimum pause the pipeline must leave between successive calls.
    /// `None` for variants that talk to no rate-limited service.
    fn call_interval(&self) -> Option<Duration> {
        None
    }

    fn name(&self) -> &str;
}
