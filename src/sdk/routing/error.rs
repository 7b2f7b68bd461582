use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoutingError {
    /// `routes` was missing, not an array, or empty.
    #[error("No routes found in Mapbox API response. Check your coordinates.")]
    NoRouteFound,

    #[error("Mapbox API returned an empty response body")]
    MissingResponseBody,

    #[error("Underlying request failed: {0}")]
    Request(#[source] reqwest::Error),

    // Raw body is kept as-is; provider error codes are not interpreted.
    #[error("Mapbox API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid routing URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl RoutingError {
    /// True for failures of the HTTP exchange itself rather than of the route lookup.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            RoutingError::Request(_)
                | RoutingError::Status { .. }
                | RoutingError::Parse(_)
                | RoutingError::MissingResponseBody
        )
    }
}

impl From<reqwest::Error> for RoutingError {
    fn from(err: reqwest::Error) -> Self {
        RoutingError::Request(err)
    }
}
