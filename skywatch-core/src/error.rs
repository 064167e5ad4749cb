use reqwest::StatusCode;
use thiserror::Error;

use crate::model::LocationQuery;

/// Failures raised by the geolocation collaborator before any network call.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location services are disabled")]
    ServicesDisabled,
    #[error("location unavailable: {0}")]
    Unavailable(String),
}

/// Everything a weather fetch can fail with.
///
/// One fetch is one attempt: nothing here is retried, and a failed fetch
/// never mutates search history.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Provider answered 404 for the query.
    #[error("no weather data found for '{query}'")]
    LocationNotFound { query: LocationQuery },

    /// Provider rejected the configured credential (HTTP 401).
    #[error("weather provider rejected the API key")]
    InvalidApiKey,

    /// Provider throttled us (HTTP 429).
    #[error("weather provider rate limit exceeded")]
    RateLimited,

    /// Any other non-success status.
    #[error("weather provider returned status {status}")]
    Provider { status: StatusCode },

    /// 200 response whose body did not match the expected shape.
    #[error("malformed weather response: {0}")]
    Decode(String),

    /// Transport-level failure: connectivity, DNS, timeout.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error(transparent)]
    Location(#[from] LocationError),
}
