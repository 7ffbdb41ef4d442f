pub mod ingest;

pub use ingest::{IngestPipeline, IngestSummary};
