//! # Phase Timing
//!
//! Durations for every phase plus the transition table derived from them.
//!
//! ## Overlap
//!
//! Two hand-offs fire before the outgoing phase has finished animating:
//! `icon-centering → shell-compressing` and `shell-relaxing → icon-swapping`
//! advance once `overlap_percent` of the outgoing duration has elapsed, so
//! the next motion starts while the previous one is still settling.

use crate::error::{ConfigError, ConfigResult};
use crate::phase::AnimationPhase;
use serde::{Deserialize, Serialize};
use showcase_shared::constants::{
    ICON_CENTER_MS, ICON_MOVE_TO_LEFT_MS, ICON_SWAP_MS, OVERLAP_PERCENT, SHELL_COMPRESS_MS,
    SHELL_EXPAND_MS, SHELL_RELAX_MS, TEXT_FADE_IN_DELAY_MS, TEXT_FADE_IN_MS, TEXT_FADE_OUT_MS,
};

/// Millisecond timing table for one button.
///
/// Omitted keys in a TOML preset fall back to [`PhaseTiming::showcase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhaseTiming {
    /// `text-fading` duration.
    pub text_fade_out: u32,
    /// `icon-centering` duration.
    pub icon_center: u32,
    /// `shell-compressing` duration.
    pub shell_compress: u32,
    /// `shell-relaxing` duration.
    pub shell_relax: u32,
    /// `icon-swapping` duration.
    pub icon_swap: u32,
    /// `shell-expanding` duration.
    pub shell_expand: u32,
    /// Icon travel back to the left edge.
    pub icon_move_to_left: u32,
    /// Wait after entering `shell-expanding` before the success label shows.
    pub text_fade_in_delay: u32,
    /// Success label fade-in duration.
    pub text_fade_in: u32,
    /// Extra wait after `text-fading`.
    pub delay_after_text_fade_out: u32,
    /// Extra wait after `icon-centering`.
    pub delay_after_icon_center: u32,
    /// Extra wait after `shell-compressing`.
    pub delay_after_shell_compress: u32,
    /// Extra wait after `shell-relaxing`.
    pub delay_after_shell_relax: u32,
    /// Extra wait after `icon-swapping`.
    pub delay_after_icon_swap: u32,
    /// Share (1-100) of an overlapping phase that elapses before advancing.
    pub overlap_percent: u32,
}

impl PhaseTiming {
    /// The tuned default table.
    #[must_use]
    pub const fn showcase() -> Self {
        Self {
            text_fade_out: TEXT_FADE_OUT_MS,
            icon_center: ICON_CENTER_MS,
            shell_compress: SHELL_COMPRESS_MS,
            shell_relax: SHELL_RELAX_MS,
            icon_swap: ICON_SWAP_MS,
            shell_expand: SHELL_EXPAND_MS,
            icon_move_to_left: ICON_MOVE_TO_LEFT_MS,
            text_fade_in_delay: TEXT_FADE_IN_DELAY_MS,
            text_fade_in: TEXT_FADE_IN_MS,
            delay_after_text_fade_out: 0,
            delay_after_icon_center: 0,
            delay_after_shell_compress: 0,
            delay_after_shell_relax: 0,
            delay_after_icon_swap: 0,
            overlap_percent: OVERLAP_PERCENT,
        }
    }

    /// Every duration and delay zero.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            text_fade_out: 0,
            icon_center: 0,
            shell_compress: 0,
            shell_relax: 0,
            icon_swap: 0,
            shell_expand: 0,
            icon_move_to_left: 0,
            text_fade_in_delay: 0,
            text_fade_in: 0,
            delay_after_text_fade_out: 0,
            delay_after_icon_center: 0,
            delay_after_shell_compress: 0,
            delay_after_shell_relax: 0,
            delay_after_icon_swap: 0,
            overlap_percent: OVERLAP_PERCENT,
        }
    }

    /// The table render leaves should use: collapsed to zero under reduced
    /// motion, unchanged otherwise.
    #[must_use]
    pub const fn effective(&self, reduced_motion: bool) -> Self {
        if reduced_motion {
            Self {
                overlap_percent: self.overlap_percent,
                ..Self::instant()
            }
        } else {
            *self
        }
    }

    /// Animation duration of `phase`. Zero for `idle`.
    #[must_use]
    pub const fn duration_of(&self, phase: AnimationPhase) -> u32 {
        match phase {
            AnimationPhase::Idle => 0,
            AnimationPhase::TextFading => self.text_fade_out,
            AnimationPhase::IconCentering => self.icon_center,
            AnimationPhase::ShellCompressing => self.shell_compress,
            AnimationPhase::ShellRelaxing => self.shell_relax,
            AnimationPhase::IconSwapping => self.icon_swap,
            AnimationPhase::ShellExpanding => self.shell_expand,
        }
    }

    /// Extra wait after `phase` before its successor starts.
    #[must_use]
    pub const fn post_delay_of(&self, phase: AnimationPhase) -> u32 {
        match phase {
            AnimationPhase::TextFading => self.delay_after_text_fade_out,
            AnimationPhase::IconCentering => self.delay_after_icon_center,
            AnimationPhase::ShellCompressing => self.delay_after_shell_compress,
            AnimationPhase::ShellRelaxing => self.delay_after_shell_relax,
            AnimationPhase::IconSwapping => self.delay_after_icon_swap,
            AnimationPhase::Idle | AnimationPhase::ShellExpanding => 0,
        }
    }

    /// Share of `phase` that must elapse before advancing.
    #[must_use]
    pub const fn advance_percent_of(&self, phase: AnimationPhase) -> u32 {
        match phase {
            AnimationPhase::IconCentering | AnimationPhase::ShellRelaxing => self.overlap_percent,
            _ => 100,
        }
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTiming`] if `overlap_percent` is outside
    /// `1..=100`.
    pub fn validate(&self, preset: &str) -> ConfigResult<()> {
        if !(1..=100).contains(&self.overlap_percent) {
            return Err(ConfigError::InvalidTiming {
                preset: preset.to_string(),
                reason: format!(
                    "overlap_percent must be within 1..=100, got {}",
                    self.overlap_percent
                ),
            });
        }
        Ok(())
    }
}

impl Default for PhaseTiming {
    fn default() -> Self {
        Self::showcase()
    }
}

/// One edge of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseStep {
    /// Outgoing phase.
    pub from: AnimationPhase,
    /// Incoming phase.
    pub to: AnimationPhase,
    /// Outgoing phase duration.
    pub duration_ms: u32,
    /// Share of `duration_ms` that elapses before advancing.
    pub advance_percent: u32,
    /// Extra wait once that share has elapsed.
    pub post_delay_ms: u32,
}

impl PhaseStep {
    /// Time from entering `from` to entering `to`.
    #[must_use]
    pub const fn delay_ms(&self) -> u64 {
        (self.duration_ms as u64) * (self.advance_percent as u64) / 100 + self.post_delay_ms as u64
    }
}

/// What a scheduled step does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// Switch to a phase.
    Enter(AnimationPhase),
    /// Make the success label visible.
    RevealSuccessText,
}

/// A step of a run, relative to the step before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedStep {
    /// Effect.
    pub action: StepAction,
    /// Wait after the previous step fired.
    pub delay_ms: u64,
}

/// Phase → next phase table for one button variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    steps: Vec<PhaseStep>,
    reveal_delay_ms: u64,
}

impl TransitionTable {
    /// Phase order with the status icon.
    pub const ICON_ROUTE: [AnimationPhase; 6] = [
        AnimationPhase::TextFading,
        AnimationPhase::IconCentering,
        AnimationPhase::ShellCompressing,
        AnimationPhase::ShellRelaxing,
        AnimationPhase::IconSwapping,
        AnimationPhase::ShellExpanding,
    ];

    /// Phase order without the status icon.
    pub const PLAIN_ROUTE: [AnimationPhase; 2] =
        [AnimationPhase::TextFading, AnimationPhase::ShellExpanding];

    /// Builds the table for `timing`, with or without the icon phases.
    #[must_use]
    pub fn new(timing: &PhaseTiming, with_icon: bool) -> Self {
        let route: &[AnimationPhase] = if with_icon {
            &Self::ICON_ROUTE
        } else {
            &Self::PLAIN_ROUTE
        };

        let steps = route
            .windows(2)
            .map(|pair| PhaseStep {
                from: pair[0],
                to: pair[1],
                duration_ms: timing.duration_of(pair[0]),
                advance_percent: timing.advance_percent_of(pair[0]),
                post_delay_ms: timing.post_delay_of(pair[0]),
            })
            .collect();

        Self {
            steps,
            reveal_delay_ms: u64::from(timing.text_fade_in_delay),
        }
    }

    /// All edges in order.
    #[must_use]
    pub fn steps(&self) -> &[PhaseStep] {
        &self.steps
    }

    /// The edge leaving `phase`, if any.
    #[must_use]
    pub fn next(&self, phase: AnimationPhase) -> Option<&PhaseStep> {
        self.steps.iter().find(|step| step.from == phase)
    }

    /// The steps a run fires after `text-fading` has been entered.
    #[must_use]
    pub fn plan(&self) -> Vec<PlannedStep> {
        self.steps
            .iter()
            .map(|step| PlannedStep {
                action: StepAction::Enter(step.to),
                delay_ms: step.delay_ms(),
            })
            .chain(std::iter::once(PlannedStep {
                action: StepAction::RevealSuccessText,
                delay_ms: self.reveal_delay_ms,
            }))
            .collect()
    }

    /// Time from trigger to the success label appearing.
    #[must_use]
    pub fn total_ms(&self) -> u64 {
        self.plan().iter().map(|step| step.delay_ms).sum()
    }
}
