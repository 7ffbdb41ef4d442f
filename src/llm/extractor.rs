use async_trait::async_trait;

use crate::error::Result;

/// Text-understanding capability: pull a single place name out of a
/// headline.
#[async_trait]
pub trait PlaceExtractor: Send + Sync {
    /// The extracted place name, or `None` when the title carries no
    /// identifiable location.
    async fn extract_place(&self, title: &str) -> Result<Option<String>>;

    fn name(&self) -> &str;
}

/// Extractor used when no LLM credential is configured. Every title is a
/// miss, so the pipeline still runs end to end without the capability.
pub struct DisabledExtractor;

#[async_trait]
impl PlaceExtractor for DisabledExtractor {
    async fn extract_place(&self, _title: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn name(&self) -> &str {
        "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_extractor_always_misses() {
        let extractor = DisabledExtractor;
        let got = extractor.extract_place("札幌で熊が目撃された").await.unwrap();
        assert!(got.is_none());
    }
}
