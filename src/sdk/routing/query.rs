use serde::{Deserialize, Serialize};

/// A point on Earth in decimal degrees. Values are passed to the provider as given.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RouteQuery {
    pub source: Coordinate,
    pub destination: Coordinate,
}

impl RouteQuery {
    pub fn new(source: Coordinate, destination: Coordinate) -> Self {
        Self {
            source,
            destination,
        }
    }

    pub fn from_degrees(src_lat: f64, src_lon: f64, dst_lat: f64, dst_lon: f64) -> Self {
        Self::new(
            Coordinate::new(src_lat, src_lon),
            Coordinate::new(dst_lat, dst_lon),
        )
    }

    /// Path segment in the provider's `lon,lat;lon,lat` order, source first.
    pub fn coordinates_path(&self) -> String {
        format!(
            "{:.6},{:.6};{:.6},{:.6}",
            self.source.lon, self.source.lat, self.destination.lon, self.destination.lat
        )
    }
}
