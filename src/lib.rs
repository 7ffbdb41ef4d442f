pub mod config;
pub mod error;
pub mod feed;
pub mod gazetteer;
pub mod geo;
pub mod llm;
pub mod models;
pub mod pipeline;
pub mod resolver;
pub mod store;

pub use config::{Config, ResolverKind};
pub use error::{Error, Result};
pub use feed::{FeedIngestor, FeedSource, RssFeedSource};
pub use geo::{Geocoder, NominatimClient};
pub use llm::{ClaudeExtractor, DisabledExtractor, PlaceExtractor};
pub use pipeline::{IngestPipeline, IngestSummary};
pub use resolver::{GazetteerResolver, GeocodeResolver, LocationResolver};
pub use store::SightingStore;
