//! The upstream seam.

use crate::error::WeatherResult;
use crate::snapshot::{LocationSuggestion, WeatherSnapshot};

/// Something that can answer weather queries, typically over HTTP.
///
/// Implementations do no caching; [`crate::WeatherService`] handles that.
pub trait ForecastSource {
    /// Current conditions for `location`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WeatherError::NotFound`] for unknown locations and
    /// [`crate::WeatherError::Upstream`] for anything else that fails.
    fn fetch_current(&self, location: &str) -> WeatherResult<WeatherSnapshot>;

    /// Current conditions, `days` of forecast and any alerts for `location`.
    ///
    /// # Errors
    ///
    /// As [`ForecastSource::fetch_current`].
    fn fetch_forecast(&self, location: &str, days: u8) -> WeatherResult<WeatherSnapshot>;

    /// Locations matching a partial name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::WeatherError::Upstream`] if the search fails.
    fn search_locations(&self, query: &str) -> WeatherResult<Vec<LocationSuggestion>>;
}

impl<S: ForecastSource + ?Sized> ForecastSource for &S {
    fn fetch_current(&self, location: &str) -> WeatherResult<WeatherSnapshot> {
        (**self).fetch_current(location)
    }

    fn fetch_forecast(&self, location: &str, days: u8) -> WeatherResult<WeatherSnapshot> {
        (**self).fetch_forecast(location, days)
    }

    fn search_locations(&self, query: &str) -> WeatherResult<Vec<LocationSuggestion>> {
        (**self).search_locations(query)
    }
}
