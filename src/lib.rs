pub mod sdk;

pub use sdk::config::{ConfigError, MapboxConfig};
pub use sdk::routing::{Coordinate, RouteLookup, RouteQuery, RoutingError, TravelTimeProvider};
