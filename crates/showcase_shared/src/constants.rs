//! # Timing & Cache Constants
//!
//! Default values baked into the demos.
//!
//! **NOTE:** Timing presets loaded from TOML override the millisecond values;
//! the cache lifetimes are fixed.

// =============================================================================
// BUTTON SEQUENCE - DEFAULT "showcase" PRESET (milliseconds)
// =============================================================================

/// Initial label fade-out.
pub const TEXT_FADE_OUT_MS: u32 = 300;

/// Plane icon travel to the centre of the shell.
pub const ICON_CENTER_MS: u32 = 400;

/// Shell squeeze down to its compact width.
pub const SHELL_COMPRESS_MS: u32 = 400;

/// Shell relax back up to a circle of its own height.
pub const SHELL_RELAX_MS: u32 = 400;

/// Plane to tick cross-fade.
pub const ICON_SWAP_MS: u32 = 300;

/// Shell growth back to its minimum content width.
pub const SHELL_EXPAND_MS: u32 = 400;

/// Icon travel from the centre back to the left edge.
pub const ICON_MOVE_TO_LEFT_MS: u32 = 400;

/// Wait after the shell starts expanding before the success label appears.
pub const TEXT_FADE_IN_DELAY_MS: u32 = 150;

/// Success label fade-in.
pub const TEXT_FADE_IN_MS: u32 = 300;

/// Share of a phase that must elapse before an overlapping successor starts.
pub const OVERLAP_PERCENT: u32 = 80;

// =============================================================================
// WEATHER CACHE
// =============================================================================

/// Lifetime of cached current conditions.
pub const CURRENT_TTL_MINUTES: u32 = 10;

/// Lifetime of cached forecasts (they update less often).
pub const FORECAST_TTL_MINUTES: u32 = 30;

/// Lifetime of cached location search results.
pub const SEARCH_TTL_MINUTES: u32 = 60;

/// Upper bound the upstream API accepts for forecast length.
pub const MAX_FORECAST_DAYS: u8 = 14;

/// Shorter search queries are answered with no suggestions.
pub const MIN_SEARCH_QUERY_LEN: usize = 2;
