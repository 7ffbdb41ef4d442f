use async_trait::async_trait;

use crate::error::Result;
use crate::gazetteer::match_place;
use crate::models::ResolvedLocation;
use crate::resolver::LocationResolver;

/// Generic label stored for gazetteer hits; this variant yields a
/// coordinate, not a precise place name.
pub const GAZETTEER_LABEL: &str = "新聞報導地點";

/// Static-table resolver: first place name in the gazetteer that appears
/// in the title wins. Deterministic, side-effect-free, no network.
pub struct GazetteerResolver;

impl GazetteerResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GazetteerResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationResolver for GazetteerResolver {
    async fn resolve(&self, title: &str) -> Result<Option<ResolvedLocation>> {
        Ok(match_place(title).map(|(_, lat, lng)| ResolvedLocation {
            label: GAZETTEER_LABEL.to_string(),
            lat,
            lng,
        }))
    }

    fn name(&self) -> &str {
        "gazetteer"
    }
}
