use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("coordinate out of range: latitude {latitude}, longitude {longitude}")]
pub struct CoordinateRangeError {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Latitude must lie in [-90, 90], longitude in [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateRangeError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateRangeError { latitude, longitude });
        }

        Ok(Self { latitude, longitude })
    }
}

/// What a fetch was asked for. Carried in errors so callers can report the
/// original query rather than whatever the provider echoed back.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    City(String),
    Position(Coordinate),
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationQuery::City(name) => f.write_str(name),
            LocationQuery::Position(coord) => {
                write!(f, "{:.4}, {:.4}", coord.latitude, coord.longitude)
            }
        }
    }
}

/// Current conditions for one resolved location.
///
/// Built only from a fully well-formed provider response; a body missing any
/// field fails decoding instead of producing a half-filled snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Provider-resolved display name; may differ from the query string.
    pub city: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub pressure_hpa: u32,
    /// Free-text condition summary, e.g. "clear sky".
    pub description: String,
    /// Opaque provider icon identifier, e.g. "01d".
    pub icon_code: String,
    pub sunrise_unix: i64,
    pub sunset_unix: i64,
}

impl WeatherSnapshot {
    pub fn sunrise_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.sunrise_unix, 0)
    }

    pub fn sunset_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.sunset_unix, 0)
    }
}
