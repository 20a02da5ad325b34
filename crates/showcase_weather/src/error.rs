//! # Weather Error Types

use thiserror::Error;

/// Errors surfaced by forecast sources and the service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeatherError {
    /// Upstream has no data for the location.
    #[error("weather data not found for {location}")]
    NotFound {
        /// Location as queried.
        location: String,
    },

    /// Upstream failed (transport, status, or payload).
    #[error("weather service failed: {0}")]
    Upstream(String),

    /// The query cannot be sent at all.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

/// Result type for weather operations.
pub type WeatherResult<T> = Result<T, WeatherError>;
