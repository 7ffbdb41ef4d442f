pub mod ingestor;
pub mod source;

pub use ingestor::{FeedIngestor, DEFAULT_SOURCE, SIGHTING_KEYWORDS};
pub use source::{parse_entries, FeedSource, RssFeedSource};
