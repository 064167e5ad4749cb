use std::sync::Mutex;

use tracing::{info, warn};

use crate::{
    Config,
    error::WeatherError,
    history::SearchHistory,
    location::LocationSource,
    model::{Coordinate, WeatherSnapshot},
    provider::{WeatherProvider, provider_from_config},
};

/// One app session: a provider, the search history, and the snapshot
/// currently on display.
///
/// At most one fetch is logically in flight at a time, but history and
/// snapshot mutations are serialized behind mutexes so the invariants hold
/// even if a host drives the session concurrently. Locks are never held
/// across an await point.
pub struct WeatherSession {
    provider: Box<dyn WeatherProvider>,
    history: Mutex<SearchHistory>,
    last_snapshot: Mutex<Option<WeatherSnapshot>>,
    record_coordinate_lookups: bool,
}

impl WeatherSession {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let provider = provider_from_config(config)?;
        Ok(Self::with_provider(provider, config))
    }

    pub fn with_provider(provider: Box<dyn WeatherProvider>, config: &Config) -> Self {
        Self {
            provider,
            history: Mutex::new(SearchHistory::new(config.history_capacity)),
            last_snapshot: Mutex::new(None),
            record_coordinate_lookups: config.record_coordinate_lookups,
        }
    }

    /// Fetch current weather for a city name.
    ///
    /// On success the snapshot is stored and the provider-resolved city name
    /// is recorded in history. On failure the stored snapshot is cleared and
    /// history is left untouched.
    pub async fn fetch_by_city(&self, city: &str) -> Result<WeatherSnapshot, WeatherError> {
        let result = self.provider.current_by_city(city).await;
        self.settle(result, true)
    }

    /// Fetch current weather for a coordinate pair. Recording in history is
    /// governed by `Config::record_coordinate_lookups`.
    pub async fn fetch_by_coordinates(
        &self,
        coord: Coordinate,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let result = self.provider.current_by_coordinates(coord).await;
        self.settle(result, self.record_coordinate_lookups)
    }

    /// Resolve the device position, then fetch by coordinates. A location
    /// failure short-circuits before any network request.
    pub async fn fetch_by_location(
        &self,
        source: &dyn LocationSource,
    ) -> Result<WeatherSnapshot, WeatherError> {
        let coord = match source.current().await {
            Ok(coord) => coord,
            Err(err) => {
                warn!(%err, "location source failed before fetch");
                self.clear_snapshot();
                return Err(err.into());
            }
        };

        self.fetch_by_coordinates(coord).await
    }

    /// Most-recent-first snapshot of the session's search history.
    pub fn history(&self) -> Vec<String> {
        self.history.lock().expect("history lock poisoned").entries()
    }

    pub fn clear_history(&self) {
        self.history.lock().expect("history lock poisoned").clear();
    }

    /// The snapshot from the last successful fetch, if the fetch after it
    /// has not failed since.
    pub fn last_snapshot(&self) -> Option<WeatherSnapshot> {
        self.last_snapshot.lock().expect("snapshot lock poisoned").clone()
    }

    fn settle(
        &self,
        result: Result<WeatherSnapshot, WeatherError>,
        record: bool,
    ) -> Result<WeatherSnapshot, WeatherError> {
        match result {
            Ok(snapshot) => {
                info!(city = %snapshot.city, "weather fetch succeeded");
                if record {
                    self.history
                        .lock()
                        .expect("history lock poisoned")
                        .record(&snapshot.city);
                }
                *self.last_snapshot.lock().expect("snapshot lock poisoned") =
                    Some(snapshot.clone());
                Ok(snapshot)
            }
            Err(err) => {
                warn!(%err, "weather fetch failed");
                // Keep the display consistent: never pair stale weather data
                // with an error message.
                self.clear_snapshot();
                Err(err)
            }
        }
    }

    fn clear_snapshot(&self) {
        *self.last_snapshot.lock().expect("snapshot lock poisoned") = None;
    }
}
