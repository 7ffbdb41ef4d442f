pub mod places;

pub use places::{match_place, PLACES};
