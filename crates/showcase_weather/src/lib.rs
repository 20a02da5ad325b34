//! # SHOWCASE Weather
//!
//! The weather demo's data layer, reduced to its contracts.
//!
//! ```text
//! WeatherService ──get──▶ TtlCache ──miss──▶ ForecastSource
//!        ◀────────────── set(ttl) ◀──────────────┘
//! ```
//!
//! Current conditions live for 10 minutes, forecasts for 30, location
//! searches for 60.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cache;
pub mod error;
pub mod service;
pub mod snapshot;
pub mod source;

pub use cache::TtlCache;
pub use error::{WeatherError, WeatherResult};
pub use service::WeatherService;
pub use snapshot::{
    Condition, CurrentConditions, ForecastDay, Location, LocationSuggestion, WeatherAlert,
    WeatherSnapshot,
};
pub use source::ForecastSource;
