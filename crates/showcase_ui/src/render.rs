//! Inputs shared by the render leaves.
//!
//! The shell and icon own no state. Everything they need besides the phase
//! is bundled here once per frame.

use crate::config::ButtonConfig;
use crate::size::SizeProfile;
use crate::style::Palette;
use crate::timing::PhaseTiming;

/// Per-frame render inputs that do not come from the sequencer state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    /// Geometry.
    pub profile: SizeProfile,
    /// Timing, already collapsed if `reduced_motion` is set.
    pub timing: PhaseTiming,
    /// Host accessibility preference.
    pub reduced_motion: bool,
    /// Whether the status icon is present.
    pub show_icon: bool,
    /// Colours.
    pub palette: Palette,
}

impl RenderContext {
    /// Builds the context for `config`, collapsing timings under reduced motion.
    #[must_use]
    pub fn from_config(config: &ButtonConfig) -> Self {
        Self {
            profile: config.profile,
            timing: config.timing.effective(config.reduced_motion),
            reduced_motion: config.reduced_motion,
            show_icon: config.show_icon,
            palette: Palette::SHOWCASE,
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::from_config(&ButtonConfig::default())
    }
}
