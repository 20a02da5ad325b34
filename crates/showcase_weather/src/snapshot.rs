//! Weather data as the demo consumes it.
//!
//! Field names follow the upstream API's metric/imperial pairs so sources can
//! map payloads one-to-one.

use serde::{Deserialize, Serialize};

/// Where the data is for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// City name.
    pub name: String,
    /// Country name.
    pub country: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

/// Sky condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Human-readable description.
    pub text: String,
    /// Icon URL.
    #[serde(default)]
    pub icon: String,
    /// Upstream condition code.
    #[serde(default)]
    pub code: u32,
}

/// Conditions right now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature, °C.
    pub temp_c: f64,
    /// Temperature, °F.
    pub temp_f: f64,
    /// Sky condition.
    pub condition: Condition,
    /// Wind speed, km/h.
    pub wind_kph: f64,
    /// Compass wind direction.
    pub wind_dir: String,
    /// Relative humidity, percent.
    pub humidity: u8,
    /// Apparent temperature, °C.
    pub feelslike_c: f64,
    /// Apparent temperature, °F.
    pub feelslike_f: f64,
    /// UV index.
    pub uv: f64,
}

/// One day of forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// ISO date.
    pub date: String,
    /// Daily high, °C.
    pub maxtemp_c: f64,
    /// Daily low, °C.
    pub mintemp_c: f64,
    /// Sky condition.
    pub condition: Condition,
    /// Chance of rain, percent.
    pub daily_chance_of_rain: u8,
}

/// A published weather alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherAlert {
    /// Short title.
    pub headline: String,
    /// Severity as published.
    pub severity: String,
    /// Urgency as published.
    pub urgency: String,
    /// Affected areas.
    pub areas: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Start time.
    #[serde(default)]
    pub effective: String,
    /// End time.
    #[serde(default)]
    pub expires: String,
}

/// Everything fetched for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Location.
    pub location: Location,
    /// Current conditions.
    pub current: CurrentConditions,
    /// Forecast days, empty for current-only fetches.
    #[serde(default)]
    pub forecast: Vec<ForecastDay>,
    /// Active alerts.
    #[serde(default)]
    pub alerts: Vec<WeatherAlert>,
}

impl WeatherSnapshot {
    /// Returns true if any alert is active.
    #[must_use]
    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }
}

/// Autocomplete entry from a location search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSuggestion {
    /// Upstream location id.
    pub id: u64,
    /// City name.
    pub name: String,
    /// Region; may be empty.
    #[serde(default)]
    pub region: String,
    /// Country name.
    pub country: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl LocationSuggestion {
    /// `name, region, country`, skipping an empty region.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.region.trim().is_empty() {
            format!("{}, {}", self.name, self.country)
        } else {
            format!("{}, {}, {}", self.name, self.region, self.country)
        }
    }
}
