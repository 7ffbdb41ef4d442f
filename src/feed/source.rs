use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};

use crate::error::{Error, Result};
use crate::models::FeedEntry;

/// Feed capability: one fetch yields a finite batch of entries. No state is
/// kept across calls, so every invocation restarts from the live feed.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<FeedEntry>>;
}

/// RSS/Atom feed over HTTP.
pub struct RssFeedSource {
    client: Client,
    url: String,
}

impl RssFeedSource {
    pub fn new(url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl FeedSource for RssFeedSource {
    async fn fetch(&self) -> Result<Vec<FeedEntry>> {
        tracing::info!("Fetching feed: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(header::USER_AGENT, "bearwatch/0.1")
            .send()
            .await
            .map_err(|e| Error::Feed(format!("Feed fetch failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Feed(format!(
                "Feed fetch returned {}",
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Feed(format!("Failed to read feed body: {}", e)))?;

        parse_entries(&bytes)
    }
}

/// Decode an RSS/Atom document into feed entries. Entries without a link
/// are dropped; the publish time falls back to the entry's updated time.
pub fn parse_entries(bytes: &[u8]) -> Result<Vec<FeedEntry>> {
    let feed = feed_rs::parser::parse(bytes)
        .map_err(|e| Error::Feed(format!("Failed to parse feed: {}", e)))?;

    let entries = feed
        .entries
        .into_iter()
        .filter_map(|entry| {
            let link = entry.links.first().map(|l| l.href.clone())?;
            let title = entry.title.map(|t| t.content).unwrap_or_default();
            let published = entry.published.or(entry.updated);

            Some(FeedEntry {
                title,
                link,
                published,
                source: entry.source,
            })
        })
        .collect();

    Ok(entries)
}
