//! # Configuration Error Types
//!
//! The sequencer itself never fails: an out-of-order trigger is ignored.
//! Everything here comes from loading presets and size profiles.

use thiserror::Error;

/// Errors raised while building button configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Preset file could not be read.
    #[error("failed to read {path}: {reason}")]
    Io {
        /// File that was being read.
        path: String,
        /// Underlying I/O error.
        reason: String,
    },

    /// Preset document is not valid TOML or has the wrong shape.
    #[error("failed to parse presets: {0}")]
    Parse(String),

    /// No timing preset with that name.
    #[error("unknown timing preset: {0}")]
    UnknownPreset(String),

    /// No size profile with that name.
    #[error("unknown size profile: {0} (expected small, medium or large)")]
    UnknownSize(String),

    /// Timing table values out of range.
    #[error("invalid timing in preset {preset}: {reason}")]
    InvalidTiming {
        /// Preset name.
        preset: String,
        /// What is wrong.
        reason: String,
    },

    /// Size profile lets the icon escape the shell or collide with the label.
    #[error("invalid geometry for {size} profile: {reason}")]
    InvalidGeometry {
        /// Profile name.
        size: String,
        /// What is wrong.
        reason: String,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
