pub mod error;
pub mod provider;
pub mod query;
pub mod service;

pub use error::RoutingError;
pub use provider::RouteLookup;
pub use query::{Coordinate, RouteQuery};
pub use service::TravelTimeProvider;
