//! Cache-first wrapper over a [`ForecastSource`].

use crate::cache::TtlCache;
use crate::error::{WeatherError, WeatherResult};
use crate::snapshot::{LocationSuggestion, WeatherSnapshot};
use crate::source::ForecastSource;
use showcase_shared::constants::{
    CURRENT_TTL_MINUTES, FORECAST_TTL_MINUTES, MAX_FORECAST_DAYS, MIN_SEARCH_QUERY_LEN,
    SEARCH_TTL_MINUTES,
};
use showcase_shared::Clock;

/// Forecast lookups with expiring caches in front of the source.
pub struct WeatherService<S, C> {
    /// Upstream.
    source: S,
    /// Current conditions and forecasts.
    snapshots: TtlCache<WeatherSnapshot, C>,
    /// Location search results.
    searches: TtlCache<Vec<LocationSuggestion>, C>,
}

impl<S: ForecastSource, C: Clock + Clone> WeatherService<S, C> {
    /// Creates a service with empty caches.
    #[must_use]
    pub fn new(source: S, clock: C) -> Self {
        Self {
            source,
            snapshots: TtlCache::new(clock.clone()),
            searches: TtlCache::new(clock),
        }
    }

    /// Returns the upstream source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Current conditions, cached for 10 minutes.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::InvalidQuery`] for a blank location, or the
    /// source's error. Failures are not cached.
    pub fn current(&self, location: &str) -> WeatherResult<WeatherSnapshot> {
        let location = require_location(location)?;
        let key = format!("current_{location}");
        if let Some(hit) = self.snapshots.get(&key) {
            return Ok(hit);
        }

        let snapshot = self.source.fetch_current(location).map_err(|e| {
            tracing::warn!("Error fetching current weather for {location}: {e}");
            e
        })?;
        self.snapshots.set(key, snapshot.clone(), CURRENT_TTL_MINUTES);
        Ok(snapshot)
    }

    /// Forecast for `days` (clamped to 1..=14), cached for 30 minutes.
    ///
    /// # Errors
    ///
    /// As [`WeatherService::current`].
    pub fn forecast(&self, location: &str, days: u8) -> WeatherResult<WeatherSnapshot> {
        let location = require_location(location)?;
        let days = days.clamp(1, MAX_FORECAST_DAYS);
        let key = format!("forecast_{location}_{days}");
        if let Some(hit) = self.snapshots.get(&key) {
            return Ok(hit);
        }

        let snapshot = self.source.fetch_forecast(location, days).map_err(|e| {
            tracing::warn!("Error fetching weather forecast for {location}: {e}");
            e
        })?;
        self.snapshots.set(key, snapshot.clone(), FORECAST_TTL_MINUTES);
        Ok(snapshot)
    }

    /// Alerts ride along with a one-day forecast.
    ///
    /// # Errors
    ///
    /// As [`WeatherService::current`].
    pub fn alerts(&self, location: &str) -> WeatherResult<WeatherSnapshot> {
        self.forecast(location, 1)
    }

    /// Location autocomplete, cached for an hour.
    ///
    /// Short queries and upstream failures both yield no suggestions.
    pub fn search(&self, query: &str) -> Vec<LocationSuggestion> {
        if query.chars().count() < MIN_SEARCH_QUERY_LEN {
            return Vec::new();
        }
        let key = format!("search_{query}");
        if let Some(hit) = self.searches.get(&key) {
            return hit;
        }

        match self.source.search_locations(query) {
            Ok(suggestions) => {
                self.searches
                    .set(key, suggestions.clone(), SEARCH_TTL_MINUTES);
                suggestions
            }
            Err(e) => {
                tracing::warn!("Error searching locations for {query}: {e}");
                Vec::new()
            }
        }
    }
}

fn require_location(location: &str) -> WeatherResult<&str> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        Err(WeatherError::InvalidQuery("location is empty".to_string()))
    } else {
        Ok(trimmed)
    }
}
