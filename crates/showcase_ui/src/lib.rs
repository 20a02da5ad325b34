//! # SHOWCASE UI
//!
//! The stateful "action" button: click once, watch it book a flight.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      BUTTON PIPELINE                       │
//! ├────────────────────────────────────────────────────────────┤
//! │  Click → Sequencer → SequencerState → Shell / Icon views   │
//! │            ↑                              ↑                │
//! │   TransitionTable (PhaseTiming)    RenderContext (size,    │
//! │   advanced by a Clock              timing, reduced motion) │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Data flows one way. The sequencer owns the phase; the shell and icon are
//! pure functions of it.
//!
//! ## Example
//!
//! ```rust
//! use showcase_ui::{AnimationPhase, ButtonConfig, Sequencer};
//!
//! let mut button = Sequencer::new(ButtonConfig::default());
//! button.trigger(0);
//! button.advance_to(300);
//! assert_eq!(button.phase(), AnimationPhase::IconCentering);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod config;
pub mod driver;
pub mod error;
pub mod icon;
pub mod layout;
pub mod phase;
pub mod render;
pub mod sequencer;
pub mod shell;
pub mod size;
pub mod style;
pub mod timing;

pub use animation::{Easing, Transition, Tween};
pub use config::{ButtonConfig, PresetBook, INSTANT_PRESET, SHOWCASE_PRESET};
pub use driver::SequenceDriver;
pub use error::{ConfigError, ConfigResult};
pub use icon::{Glyph, IconPlacement, IconView};
pub use layout::Rect;
pub use phase::AnimationPhase;
pub use render::RenderContext;
pub use sequencer::{ButtonView, Sequencer, SequencerEvent, SequencerState};
pub use shell::{Cursor, Extent, LabelAnchor, ShellView};
pub use size::{SizeKind, SizeProfile};
pub use style::{Color, Palette};
pub use timing::{PhaseStep, PhaseTiming, TransitionTable};
