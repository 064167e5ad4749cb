use crate::{
    Config,
    error::WeatherError,
    model::{Coordinate, WeatherSnapshot},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Abstraction over the weather data source.
///
/// One invocation is one outbound request: implementations do not retry,
/// cache, or rate-limit.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_by_city(&self, city: &str) -> Result<WeatherSnapshot, WeatherError>;

    async fn current_by_coordinates(
        &self,
        coord: Coordinate,
    ) -> Result<WeatherSnapshot, WeatherError>;
}

/// Construct the OpenWeather provider from config.
///
/// Fails with a configure hint when no API key is available from either the
/// config file or the environment.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.resolve_api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `skywatch configure` and enter your OpenWeather API key,\n\
             or set the {} environment variable.",
            crate::config::API_KEY_ENV
        )
    })?;

    Ok(Box::new(OpenWeatherProvider::new(api_key)?))
}
