pub mod geocoder;
pub mod nominatim;

pub use geocoder::Geocoder;
pub use nominatim::NominatimClient;
