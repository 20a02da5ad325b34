//! # SHOWCASE
//!
//! Front-end demo models, integrated.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                       SHOWCASE                        │
//! ├───────────────────────────────────────────────────────┤
//! │  ┌──────────────────┐          ┌──────────────────┐   │
//! │  │  showcase_ui     │          │ showcase_weather │   │
//! │  │  • Sequencer     │          │  • TtlCache      │   │
//! │  │  • Shell / Icon  │          │  • WeatherService│   │
//! │  │  • Presets       │          │  • ForecastSource│   │
//! │  └────────┬─────────┘          └────────┬─────────┘   │
//! │           └──────────┬──────────────────┘             │
//! │               showcase_shared (Clock, constants)      │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `timeline`: Records a button run on a virtual clock

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod timeline;

pub use showcase_shared as shared;
pub use showcase_ui as ui;
pub use showcase_weather as weather;

pub use timeline::{estimate_content_width, record_timeline, sample_widths, WidthSample};
