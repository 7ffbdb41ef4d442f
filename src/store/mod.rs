pub mod json;

pub use json::SightingStore;
