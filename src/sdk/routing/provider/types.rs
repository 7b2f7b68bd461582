use crate::sdk::routing::error::RoutingError;
use serde::{de::Error as _, Deserialize, Deserializer};

/// The part of a Directions API response that the lookup consumes.
#[derive(Deserialize, Debug)]
pub struct DirectionsResponse {
    #[serde(default, deserialize_with = "routes_if_array")]
    pub routes: Option<Vec<Route>>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Route {
    /// Seconds.
    #[serde(default)]
    pub duration: Option<f64>,
}

impl DirectionsResponse {
    /// Duration in seconds of the first route.
    pub fn first_route_duration_secs(&self) -> Result<f64, RoutingError> {
        let route = self
            .routes
            .as_deref()
            .and_then(|routes| routes.first())
            .ok_or(RoutingError::NoRouteFound)?;

        Ok(route.duration.unwrap_or_else(|| {
            log::warn!("First route has no duration field, reading it as 0 seconds");
            0.0
        }))
    }
}

// Anything other than a JSON array (null, object, number...) is treated like a missing field.
// Only the first element is decoded; later routes are never read.
fn routes_if_array<'de, D>(deserializer: D) -> Result<Option<Vec<Route>>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(items) => match items.into_iter().next() {
            Some(first) => serde_json::from_value::<Route>(first)
                .map(|route| Some(vec![route]))
                .map_err(D::Error::custom),
            None => Ok(Some(Vec::new())),
        },
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> DirectionsResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn picks_first_route() {
        let resp = parse(r#"{"routes":[{"duration":600.5,"distance":1},{"duration":30}]}"#);
        assert_eq!(resp.first_route_duration_secs().unwrap(), 600.5);
    }

    #[test]
    fn later_routes_are_not_decoded() {
        for body in [
            r#"{"routes":[{"duration":600},5]}"#,
            r#"{"routes":[{"duration":600},{"duration":"n/a"}]}"#,
            r#"{"routes":[{"duration":600},null]}"#,
        ] {
            assert_eq!(parse(body).first_route_duration_secs().unwrap(), 600.0, "{body}");
        }
    }

    #[test]
    fn missing_non_array_and_empty_routes_are_all_no_route() {
        for body in [
            r#"{"code":"NoRoute"}"#,
            r#"{"routes":null}"#,
            r#"{"routes":{"duration":5}}"#,
            r#"{"routes":"none"}"#,
            r#"{"routes":[]}"#,
        ] {
            let err = parse(body).first_route_duration_secs().unwrap_err();
            assert!(matches!(err, RoutingError::NoRouteFound), "{body}");
        }
    }

    #[test]
    fn route_without_duration_reads_as_zero() {
        let resp = parse(r#"{"routes":[{"distance":1200}]}"#);
        assert_eq!(resp.first_route_duration_secs().unwrap(), 0.0);
    }

    #[test]
    fn ignores_unrelated_fields() {
        let resp = parse(
            r#"{"uuid":"abc","waypoints":[],"routes":[{"duration":60,"geometry":{"type":"LineString","coordinates":[]},"legs":[]}]}"#,
        );
        assert_eq!(resp.first_route_duration_secs().unwrap(), 60.0);
    }
}
