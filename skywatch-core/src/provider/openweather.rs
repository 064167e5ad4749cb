use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::{
    error::WeatherError,
    model::{Coordinate, LocationQuery, WeatherSnapshot},
};

use super::WeatherProvider;

const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the OpenWeather current-weather endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Result<Self, WeatherError> {
        Self::with_base_url(api_key, OPENWEATHER_BASE_URL.to_string())
    }

    /// Point the provider at a different host. Tests use this to target a
    /// local mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, WeatherError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { api_key, base_url, http })
    }

    async fn fetch_current(&self, query: LocationQuery) -> Result<WeatherSnapshot, WeatherError> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        debug!(%query, "requesting current weather");

        let request = match &query {
            LocationQuery::City(name) => self.http.get(&url).query(&[("q", name.as_str())]),
            LocationQuery::Position(coord) => self.http.get(&url).query(&[
                ("lat", coord.latitude.to_string()),
                ("lon", coord.longitude.to_string()),
            ]),
        };

        let res = request
            .query(&[("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(match status {
                StatusCode::NOT_FOUND => WeatherError::LocationNotFound { query },
                StatusCode::UNAUTHORIZED => WeatherError::InvalidApiKey,
                StatusCode::TOO_MANY_REQUESTS => WeatherError::RateLimited,
                status => WeatherError::Provider { status },
            });
        }

        // Read the body first so transport failures stay Network errors and
        // only serde failures become Decode errors.
        let body = res.text().await?;
        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Decode(e.to_string()))?;

        parsed.into_snapshot()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_by_city(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        self.fetch_current(LocationQuery::City(city.to_string())).await
    }

    async fn current_by_coordinates(
        &self,
        coord: Coordinate,
    ) -> Result<WeatherSnapshot, WeatherError> {
        self.fetch_current(LocationQuery::Position(coord)).await
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

impl OwCurrentResponse {
    /// A snapshot is built only from a complete response; an empty `weather`
    /// array counts as malformed, same as a missing field.
    fn into_snapshot(self) -> Result<WeatherSnapshot, WeatherError> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::Decode("weather array is empty".to_string()))?;

        Ok(WeatherSnapshot {
            city: self.name,
            temperature_c: self.main.temp,
            feels_like_c: self.main.feels_like,
            humidity_pct: self.main.humidity,
            wind_speed_mps: self.wind.speed,
            pressure_hpa: self.main.pressure,
            description: condition.description,
            icon_code: condition.icon,
            sunrise_unix: self.sys.sunrise,
            sunset_unix: self.sys.sunset,
        })
    }
}
