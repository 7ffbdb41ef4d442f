use chrono::{DateTime, Utc};

/// A raw entry as parsed from the feed, before any filtering.
#[derive(Debug, Clone)]
pub struct FeedEntry {
    pub title: String,
    pub link: String,
    pub published: Option<DateTime<Utc>>,
    pub source: Option<String>,
}

/// An entry that survived the duplicate and keyword filters but has not
/// been resolved to a coordinate yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub title: String,
    pub link: String,
    pub date: String,
    pub source: String,
}
