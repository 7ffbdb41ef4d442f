pub mod feed;
pub mod sighting;

pub use feed::*;
pub use sighting::*;
