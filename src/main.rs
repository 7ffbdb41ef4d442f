use std::time::Duration;

use tracing_subscriber::EnvFilter;

use bearwatch::{
    ClaudeExtractor, Config, DisabledExtractor, FeedIngestor, GazetteerResolver, GeocodeResolver,
    IngestPipeline, LocationResolver, NominatimClient, PlaceExtractor, ResolverKind,
    RssFeedSource, SightingStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("bearwatch=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    let store = SightingStore::new(&config.data_file);
    let ingestor = FeedIngestor::new(Box::new(RssFeedSource::new(&config.feed_url)));
    let resolver = build_resolver(&config);

    tracing::info!("Starting ingest run (resolver: {})", resolver.name());
    let pipeline = IngestPipeline::new(store, ingestor, resolver);
    let summary = pipeline.run().await?;

    println!("Added {} new sighting(s)", summary.added);

    Ok(())
}

fn build_resolver(config: &Config) -> Box<dyn LocationResolver> {
    match config.resolver {
        ResolverKind::Gazetteer => Box::new(GazetteerResolver::new()),
        ResolverKind::Geocode => {
            let extractor: Box<dyn PlaceExtractor> = match &config.anthropic_api_key {
                Some(key) => Box::new(ClaudeExtractor::new(key.clone(), None)),
                None => {
                    tracing::warn!(
                        "ANTHROPIC_API_KEY not set; place extraction disabled for this run"
                    );
                    Box::new(DisabledExtractor)
                }
            };

            let geocoder = NominatimClient::new(Duration::from_secs(config.geocode_timeout_secs));

            Box::new(GeocodeResolver::new(
                extractor,
                Box::new(geocoder),
                Duration::from_millis(config.geocode_delay_ms),
            ))
        }
    }
}
