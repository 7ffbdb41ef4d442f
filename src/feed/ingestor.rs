use std::collections::HashSet;

use crate::error::Result;
use crate::feed::source::FeedSource;
use crate::models::Candidate;

/// Title keywords that mark an entry as a sighting report. Plain substring
/// match, exact text, no stemming.
pub const SIGHTING_KEYWORDS: &[&str] = &["熊", "クマ"];

/// Source name used when the feed entry carries none.
pub const DEFAULT_SOURCE: &str = "Google News";

/// Publish-time format used verbatim as the record date and sort key.
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Pulls raw entries from a feed source and screens them down to
/// candidates for resolution.
pub struct FeedIngestor {
    source: Box<dyn FeedSource>,
}

impl FeedIngestor {
    pub fn new(source: Box<dyn FeedSource>) -> Self {
        Self { source }
    }

    /// Fetch the feed and keep the entries that survive, in feed order.
    /// The duplicate check runs before the keyword filter; anything
    /// dropped here never reaches a resolver. A link seen earlier in the
    /// same pull is also a duplicate.
    pub async fn fetch_candidates(
        &self,
        known_links: &HashSet<String>,
    ) -> Result<Vec<Candidate>> {
        let entries = self.source.fetch().await?;
        tracing::debug!("Feed returned {} entries", entries.len());

        let mut seen_this_run: HashSet<String> = HashSet::new();
        let mut candidates = Vec::new();

        for entry in entries {
            if known_links.contains(&entry.link) || !seen_this_run.insert(entry.link.clone()) {
                continue;
            }

            if !title_matches(&entry.title) {
                continue;
            }

            // An entry with no usable timestamp cannot take part in the
            // date-ordered store.
            let published = match entry.published {
                Some(ts) => ts,
                None => {
                    tracing::debug!("Skipping entry without publish time: {}", entry.link);
                    continue;
                }
            };

            candidates.push(Candidate {
                title: entry.title,
                link: entry.link,
                date: published.format(DATE_FORMAT).to_string(),
                source: entry.source.unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            });
        }

        Ok(candidates)
    }
}

fn title_matches(title: &str) -> bool {
    SIGHTING_KEYWORDS.iter().any(|kw| title.contains(kw))
}
