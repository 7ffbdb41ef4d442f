use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::sleep;

use crate::error::Result;
use crate::feed::FeedIngestor;
use crate::models::{Candidate, SightingRecord};
use crate::resolver::LocationResolver;
use crate::store::SightingStore;

/// What a run did. `added` is the externally reported outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub candidates: usize,
    pub added: usize,
}

/// One-shot orchestrator: loads the store, fetches and screens feed
/// entries, resolves each candidate, then commits. Invoked once per
/// external trigger; terminal on completion.
pub struct IngestPipeline {
    store: SightingStore,
    ingestor: FeedIngestor,
    resolver: Box<dyn LocationResolver>,
}

impl IngestPipeline {
    pub fn new(
        store: SightingStore,
        ingestor: FeedIngestor,
        resolver: Box<dyn LocationResolver>,
    ) -> Self {
        Self {
            store,
            ingestor,
            resolver,
        }
    }

    pub async fn run(&self) -> Result<IngestSummary> {
        // Step 1: Load existing records and build the identity index
        let mut records = self.store.load()?;
        let known_links = SightingStore::link_index(&records);
        tracing::info!("Loaded {} existing sightings", records.len());

        // Step 2: Fetch and screen feed entries; a fetch failure aborts the
        // run here, before anything is committed
        let candidates = self.ingestor.fetch_candidates(&known_links).await?;
        tracing::info!(
            "{} candidates after dedup and keyword filter",
            candidates.len()
        );

        // Step 3: Resolve candidates one at a time, in feed order
        let new_records = self.resolve_candidates(&candidates).await;

        let summary = IngestSummary {
            candidates: candidates.len(),
            added: new_records.len(),
        };

        // Step 4: Commit. An empty batch must not touch the file at all.
        if new_records.is_empty() {
            tracing::info!("No new sightings found");
            return Ok(summary);
        }

        records.extend(new_records);
        self.store.save(&mut records)?;
        tracing::info!("Saved {} new sighting(s)", summary.added);

        Ok(summary)
    }

    async fn resolve_candidates(&self, candidates: &[Candidate]) -> Vec<SightingRecord> {
        let pb = ProgressBar::new(candidates.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} candidates",
                )
                .unwrap()
                .progress_chars("#>-"),
        );

        let mut new_records = Vec::new();

        for (i, candidate) in candidates.iter().enumerate() {
            // Pacing between successive resolver calls; rate-limited
            // variants declare the interval, the gazetteer declares none.
            if i > 0 {
                if let Some(interval) = self.resolver.call_interval() {
                    sleep(interval).await;
                }
            }

            match self.resolver.resolve(&candidate.title).await {
                Ok(Some(location)) => {
                    tracing::info!("New sighting: {} ({})", candidate.title, candidate.date);
                    new_records.push(SightingRecord {
                        id: SightingRecord::id_for(&candidate.link),
                        title: candidate.title.clone(),
                        location: location.label,
                        lat: location.lat,
                        lng: location.lng,
                        date: candidate.date.clone(),
                        link: candidate.link.clone(),
                        source: candidate.source.clone(),
                    });
                }
                Ok(None) => {
                    tracing::debug!("No location resolved for: {}", candidate.title);
                }
                Err(e) => {
                    tracing::warn!("Resolver failed for {}: {}", candidate.title, e);
                }
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        new_records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::feed::FeedSource;
    use crate::models::FeedEntry;
    use crate::resolver::GazetteerResolver;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::fs;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    struct StaticFeed {
        entries: Vec<FeedEntry>,
    }

    #[async_trait]
    impl FeedSource for StaticFeed {
        async fn fetch(&self) -> Result<Vec<FeedEntry>> {
            Ok(self.entries.clone())
        }
    }

    struct BrokenFeed;

    #[async_trait]
    impl FeedSource for BrokenFeed {
        async fn fetch(&self) -> Result<Vec<FeedEntry>> {
            Err(Error::Feed("connection reset".to_string()))
        }
    }

    /// Resolver that records every title it is asked about.
    struct SpyResolver {
        titles: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl LocationResolver for SpyResolver {
        async fn resolve(
            &self,
            title: &str,
        ) -> Result<Option<crate::models::ResolvedLocation>> {
            self.titles.lock().unwrap().push(title.to_string());
            Ok(None)
        }

        fn name(&self) -> &str {
            "spy"
        }
    }

    fn entry(title: &str, link: &str, day: u32, hour: u32) -> FeedEntry {
        FeedEntry {
            title: title.to_string(),
            link: link.to_string(),
            published: Some(Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap()),
            source: None,
        }
    }

    fn pipeline(path: &Path, entries: Vec<FeedEntry>) -> IngestPipeline {
        IngestPipeline::new(
            SightingStore::new(path),
            FeedIngestor::new(Box::new(StaticFeed { entries })),
            Box::new(GazetteerResolver::new()),
        )
    }

    fn sighting_entries() -> Vec<FeedEntry> {
        vec![
            entry("札幌で熊が目撃された", "https://example.com/1", 1, 8),
            entry("秋田の山中でクマ出没", "https://example.com/2", 2, 9),
        ]
    }

    #[tokio::test]
    async fn second_run_over_unchanged_feed_adds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bear_data.json");

        let first = pipeline(&path, sighting_entries()).run().await.unwrap();
        assert_eq!(first.added, 2);
        let after_first = fs::read(&path).unwrap();

        let second = pipeline(&path, sighting_entries()).run().await.unwrap();
        assert_eq!(second.added, 0);
        assert_eq!(fs::read(&path).unwrap(), after_first);
    }

    #[tokio::test]
    async fn duplicate_links_in_one_pull_produce_one_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bear_data.json");

        let entries = vec![
            entry("札幌で熊が目撃された", "https://example.com/1", 1, 8),
            entry("札幌で熊が目撃された(続報)", "https://example.com/1", 1, 9),
        ];
        let summary = pipeline(&path, entries).run().await.unwrap();
        assert_eq!(summary.added, 1);

        let store = SightingStore::new(&path);
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn persisted_records_are_sorted_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bear_data.json");

        let entries = vec![
            entry("秋田の山中でクマ出没", "https://example.com/old", 1, 8),
            entry("札幌で熊が目撃された", "https://example.com/new", 3, 8),
            entry("青森でクマの足跡", "https://example.com/mid", 2, 8),
        ];
        pipeline(&path, entries).run().await.unwrap();

        let records = SightingStore::new(&path).load().unwrap();
        let dates: Vec<&str> = records.iter().map(|r| r.date.as_str()).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }

    #[tokio::test]
    async fn run_with_no_resolvable_candidates_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bear_data.json");

        // Seed the store so there is a file whose bytes can be compared.
        pipeline(&path, sighting_entries()).run().await.unwrap();
        let before = fs::read(&path).unwrap();

        // No gazetteer place in the title: resolution misses, no commit.
        let entries = vec![entry("熊の目撃情報まとめ", "https://example.com/9", 4, 8)];
        let summary = pipeline(&path, entries).run().await.unwrap();
        assert_eq!(summary.added, 0);
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn feed_failure_aborts_without_touching_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bear_data.json");

        pipeline(&path, sighting_entries()).run().await.unwrap();
        let before = fs::read(&path).unwrap();

        let broken = IngestPipeline::new(
            SightingStore::new(&path),
            FeedIngestor::new(Box::new(BrokenFeed)),
            Box::new(GazetteerResolver::new()),
        );
        let result = broken.run().await;

        assert!(matches!(result, Err(Error::Feed(_))));
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn filtered_titles_never_reach_the_resolver() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bear_data.json");

        let titles = Arc::new(Mutex::new(Vec::new()));
        let entries = vec![
            entry("札幌で熊が目撃された", "https://example.com/1", 1, 8),
            entry("株価が大幅に上昇", "https://example.com/2", 1, 9),
        ];
        let pipeline = IngestPipeline::new(
            SightingStore::new(&path),
            FeedIngestor::new(Box::new(StaticFeed { entries })),
            Box::new(SpyResolver {
                titles: titles.clone(),
            }),
        );
        pipeline.run().await.unwrap();

        let seen = titles.lock().unwrap();
        assert_eq!(seen.as_slice(), ["札幌で熊が目撃された"]);
    }

    #[tokio::test]
    async fn record_ids_derive_from_links() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bear_data.json");

        pipeline(&path, sighting_entries()).run().await.unwrap();

        let records = SightingStore::new(&path).load().unwrap();
        for record in records {
            assert_eq!(record.id, SightingRecord::id_for(&record.link));
        }
    }
}
