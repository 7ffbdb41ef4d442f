use crate::error::{Error, Result};
use std::env;

/// Default feed query: bear-sighting news from the last day, Japan edition.
pub const DEFAULT_FEED_URL: &str =
    "https://news.google.com/rss/search?q=熊+出没+when:1d&hl=ja&gl=JP&ceid=JP:ja";

const DEFAULT_DATA_FILE: &str = "bear_data.json";

/// Per-run configuration, read from the environment once at startup and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub feed_url: String,
    pub data_file: String,
    pub resolver: ResolverKind,
    pub anthropic_api_key: Option<String>,
    pub geocode_delay_ms: u64,
    pub geocode_timeout_secs: u64,
}

/// Which resolution strategy this deployment runs with. Selected once per
/// run; the pipeline itself is variant-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverKind {
    Gazetteer,
    Geocode,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let feed_url = env::var("FEED_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string());

        let data_file = env::var("DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());

        let resolver = parse_resolver(env::var("RESOLVER").ok().as_deref())?;

        // Optional: without it the geocode variant still runs, with
        // extraction disabled.
        let anthropic_api_key = env::var("ANTHROPIC_API_KEY").ok();

        let geocode_delay_ms = env::var("GEOCODE_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1000);

        let geocode_timeout_secs = env::var("GEOCODE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            feed_url,
            data_file,
            resolver,
            anthropic_api_key,
            geocode_delay_ms,
            geocode_timeout_secs,
        })
    }
}

fn parse_resolver(value: Option<&str>) -> Result<ResolverKind> {
    match value {
        None | Some("gazetteer") => Ok(ResolverKind::Gazetteer),
        Some("geocode") => Ok(ResolverKind::Geocode),
        Some(other) => Err(Error::Config(format!("Unknown RESOLVER value: {}", other))),
    }
}
