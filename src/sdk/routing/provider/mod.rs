pub mod mapbox;
pub mod types;

pub use mapbox::{parse_travel_time_minutes, RouteLookup};
