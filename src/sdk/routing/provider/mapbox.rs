use super::types::DirectionsResponse;
use crate::sdk::config::MapboxConfig;
use crate::sdk::routing::error::RoutingError;
use crate::sdk::routing::query::RouteQuery;
use crate::sdk::routing::service::TravelTimeProvider;
use crate::sdk::util::log::redact_token;
use reqwest::blocking::Client;
use reqwest::Url;

const SECONDS_PER_MINUTE: f64 = 60.0;

/// Driving travel time between two points from the Mapbox Directions API.
///
/// Every call issues exactly one GET. Nothing is cached or retried and the
/// only state kept between calls is the configuration and the HTTP client.
pub struct RouteLookup {
    client: Client,
    config: MapboxConfig,
}

impl RouteLookup {
    /// Builds a lookup with its own client, using `config.timeout` for every request.
    pub fn new(config: MapboxConfig) -> Result<Self, RoutingError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(RoutingError::Client)?;
        Self::with_client(config, client)
    }

    /// Uses a caller-configured client; `config.timeout` is not applied to it.
    pub fn with_client(config: MapboxConfig, client: Client) -> Result<Self, RoutingError> {
        Url::parse(&config.base_url).map_err(|e| RoutingError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self { client, config })
    }

    /// `{base_url}/{srcLon},{srcLat};{dstLon},{dstLat}?overview=full&geometries=geojson&steps=true&access_token={token}`
    pub fn request_url(&self, query: &RouteQuery) -> Result<Url, RoutingError> {
        let raw = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            query.coordinates_path()
        );
        let mut url = Url::parse(&raw).map_err(|e| RoutingError::InvalidBaseUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut()
            .append_pair("overview", "full")
            .append_pair("geometries", "geojson")
            .append_pair("steps", "true")
            .append_pair("access_token", &self.config.access_token);
        Ok(url)
    }

    pub fn get_travel_time_minutes(
        &self,
        src_lat: f64,
        src_lon: f64,
        dst_lat: f64,
        dst_lon: f64,
    ) -> Result<f64, RoutingError> {
        self.travel_time(&RouteQuery::from_degrees(src_lat, src_lon, dst_lat, dst_lon))
    }

    pub fn travel_time(&self, query: &RouteQuery) -> Result<f64, RoutingError> {
        let url = self.request_url(query)?;
        let logged_url = redact_token(url.as_str());
        log::debug!(
            "[PROVIDER] Calling Mapbox directions for {}. URL: {}",
            query.coordinates_path(),
            logged_url
        );

        let response = match self.client.get(url).send() {
            Ok(resp) => resp,
            Err(e) => {
                log::error!(
                    "Failed to send GET request. URL: {}\nError: {}",
                    logged_url,
                    e
                );
                return Err(RoutingError::Request(e));
            }
        };

        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            log::error!(
                "API returned non-success status: {}. URL: {}\nBody: {}",
                status,
                logged_url,
                text
            );
            return Err(RoutingError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        parse_travel_time_minutes(&text).inspect_err(|e| {
            if let RoutingError::Parse(_) = e {
                log::error!(
                    "Failed to parse DirectionsResponse. URL: {}\nError: {}. Body: {}",
                    logged_url,
                    e,
                    text
                );
            }
        })
    }
}

impl TravelTimeProvider for RouteLookup {
    fn travel_time_minutes(&self, query: &RouteQuery) -> Result<f64, RoutingError> {
        self.travel_time(query)
    }
}

/// Minutes of the first route in a Directions response body.
pub fn parse_travel_time_minutes(body: &str) -> Result<f64, RoutingError> {
    if body.trim().is_empty() {
        return Err(RoutingError::MissingResponseBody);
    }

    // A literal `null` document is an absent body as well.
    let response: Option<DirectionsResponse> = serde_json::from_str(body)?;
    let response = response.ok_or(RoutingError::MissingResponseBody)?;

    Ok(response.first_route_duration_secs()? / SECONDS_PER_MINUTE)
}
