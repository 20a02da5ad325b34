//! Animation phases of the action button.
//!
//! Exactly one phase is active at any instant. The phase alone decides what
//! the shell and icon look like; the derived flags below are the whole
//! render contract.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One discrete step of the click-triggered animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationPhase {
    /// Resting: label visible, plane on the left.
    #[default]
    Idle,
    /// Initial label fading out.
    TextFading,
    /// Plane travelling to the centre.
    IconCentering,
    /// Shell squeezing to its compact width.
    ShellCompressing,
    /// Shell relaxing to a circle of its own height.
    ShellRelaxing,
    /// Plane cross-fading into the tick.
    IconSwapping,
    /// Shell growing back, tick on the left, success label incoming.
    ShellExpanding,
}

impl AnimationPhase {
    /// Every phase in sequence order.
    pub const ALL: [Self; 7] = [
        Self::Idle,
        Self::TextFading,
        Self::IconCentering,
        Self::ShellCompressing,
        Self::ShellRelaxing,
        Self::IconSwapping,
        Self::ShellExpanding,
    ];

    /// Kebab-case name, matching the serialized form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::TextFading => "text-fading",
            Self::IconCentering => "icon-centering",
            Self::ShellCompressing => "shell-compressing",
            Self::ShellRelaxing => "shell-relaxing",
            Self::IconSwapping => "icon-swapping",
            Self::ShellExpanding => "shell-expanding",
        }
    }

    /// The initial label is only shown while idle.
    #[inline]
    #[must_use]
    pub const fn is_initial_text_visible(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The icon sits in the middle of the shell.
    #[inline]
    #[must_use]
    pub const fn is_icon_centered(self) -> bool {
        matches!(
            self,
            Self::IconCentering | Self::ShellCompressing | Self::ShellRelaxing | Self::IconSwapping
        )
    }

    /// The icon is pinned to the left offset. Overrides centring.
    #[inline]
    #[must_use]
    pub const fn is_icon_on_left(self) -> bool {
        matches!(self, Self::Idle | Self::ShellExpanding)
    }

    /// The shell is changing width (icon position transitions are held).
    #[inline]
    #[must_use]
    pub const fn is_shell_resizing(self) -> bool {
        matches!(
            self,
            Self::ShellCompressing | Self::ShellRelaxing | Self::IconSwapping
        )
    }

    /// Phases that only exist when the button carries an icon.
    #[inline]
    #[must_use]
    pub const fn requires_icon(self) -> bool {
        self.is_icon_centered()
    }
}

impl fmt::Display for AnimationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
