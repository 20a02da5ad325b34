//! # SHOWCASE Shared
//!
//! Common types used by both the button sequencer and the weather service.
//!
//! ## CRITICAL RULE
//!
//! Nothing in this crate reads platform state on its own. Time comes in
//! through a [`Clock`] so every consumer can run on a virtual timeline.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod clock;
pub mod constants;

pub use clock::{Clock, ManualClock, SystemClock};
pub use constants::{
    CURRENT_TTL_MINUTES, FORECAST_TTL_MINUTES, MAX_FORECAST_DAYS, MIN_SEARCH_QUERY_LEN,
    SEARCH_TTL_MINUTES,
};
