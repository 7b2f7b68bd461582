use super::error::RoutingError;
use super::query::RouteQuery;

pub trait TravelTimeProvider: Send + Sync {
    /// Estimated driving time from `query.source` to `query.destination`, in minutes.
    fn travel_time_minutes(&self, query: &RouteQuery) -> Result<f64, RoutingError>;
}
