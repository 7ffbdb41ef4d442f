use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Feed error: {0}")]
    Feed(String),

    #[error("LLM API error: {0}")]
    Llm(String),

    #[error("Geocoding error: {0}")]
    Geocode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Failures that abort the whole run. Everything else is handled
    /// per-candidate and the run continues.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Feed(_) | Error::Config(_) | Error::Io(_) | Error::Serialization(_)
        )
    }
}
