//! Button shell render leaf.
//!
//! Maps a phase to the shell's box model:
//!
//! ```text
//! phase               width      min-width  resize transition
//! shell-compressing   compact    compact    shell_compress
//! shell-relaxing      height     height     shell_relax
//! icon-swapping       height     height     none
//! shell-expanding     min_width  min_width  shell_expand
//! anything else       auto       min_width  none
//! ```

use crate::animation::{Easing, Transition};
use crate::phase::AnimationPhase;
use crate::render::RenderContext;
use crate::sequencer::SequencerState;
use crate::style::Color;

/// A CSS length that may be left to content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// Sized by content.
    Auto,
    /// Fixed pixel length.
    Px(f32),
}

impl Extent {
    /// Pixel value, or `content` when auto.
    #[must_use]
    pub fn resolve(self, content: f32) -> f32 {
        match self {
            Self::Auto => content,
            Self::Px(px) => px,
        }
    }
}

/// Pointer feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Clickable.
    Pointer,
    /// Run in progress or finished.
    NotAllowed,
}

/// Horizontal anchoring of a label inside the shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelAnchor {
    /// Left edge at this offset, vertically centred.
    Left(f32),
    /// Centred on both axes.
    Center,
}

/// One text label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelView {
    /// Opacity target is 1 when visible, 0 otherwise.
    pub visible: bool,
    /// Placement.
    pub anchor: LabelAnchor,
    /// Opacity (and, for the success label, slide) transition.
    pub fade: Transition,
}

/// Visual box model of the shell for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellView {
    /// Width.
    pub width: Extent,
    /// Minimum width.
    pub min_width: Extent,
    /// Height.
    pub height: f32,
    /// Label font size.
    pub font_size: f32,
    /// Transition on width and min-width.
    pub resize: Transition,
    /// Fill colour.
    pub fill: Color,
    /// Fill colour while hovered.
    pub hover_fill: Color,
    /// Label colour.
    pub foreground: Color,
    /// Keyboard focus outline.
    pub focus_ring: Color,
    /// Pointer feedback.
    pub cursor: Cursor,
    /// Label shown at rest.
    pub label: LabelView,
    /// Label shown once the run completes.
    pub success_label: LabelView,
}

impl ShellView {
    /// Laid-out width given the width the content would take on its own.
    #[must_use]
    pub fn resolved_width(&self, content_width: f32) -> f32 {
        let width = self.width.resolve(content_width);
        width.max(self.min_width.resolve(0.0))
    }
}

/// Renders the shell for `state`.
#[must_use]
pub fn render_shell(state: SequencerState, ctx: &RenderContext) -> ShellView {
    let profile = &ctx.profile;
    let timing = &ctx.timing;
    let phase = state.phase;

    let (width, min_width) = match phase {
        AnimationPhase::ShellCompressing => (
            Extent::Px(profile.compact_width),
            Extent::Px(profile.compact_width),
        ),
        AnimationPhase::ShellRelaxing | AnimationPhase::IconSwapping => {
            (Extent::Px(profile.height), Extent::Px(profile.height))
        }
        AnimationPhase::ShellExpanding => {
            (Extent::Px(profile.min_width), Extent::Px(profile.min_width))
        }
        AnimationPhase::Idle | AnimationPhase::TextFading | AnimationPhase::IconCentering => {
            (Extent::Auto, Extent::Px(profile.min_width))
        }
    };

    let resize_ms = match phase {
        AnimationPhase::ShellCompressing
        | AnimationPhase::ShellRelaxing
        | AnimationPhase::ShellExpanding => timing.duration_of(phase),
        _ => 0,
    };

    let idle = phase == AnimationPhase::Idle;
    let label_anchor = if ctx.show_icon {
        LabelAnchor::Left(profile.text_left)
    } else {
        LabelAnchor::Center
    };
    // The success label slides from the centre into place as it appears.
    let success_anchor = if ctx.show_icon && state.success_text_visible {
        LabelAnchor::Left(profile.text_left)
    } else {
        LabelAnchor::Center
    };

    ShellView {
        width,
        min_width,
        height: profile.height,
        font_size: profile.font_size,
        resize: Transition::new(resize_ms, Easing::STANDARD),
        fill: ctx.palette.fill,
        hover_fill: if idle {
            ctx.palette.fill_hover
        } else {
            ctx.palette.fill
        },
        foreground: ctx.palette.foreground,
        focus_ring: ctx.palette.focus_ring,
        cursor: if idle {
            Cursor::Pointer
        } else {
            Cursor::NotAllowed
        },
        label: LabelView {
            visible: phase.is_initial_text_visible(),
            anchor: label_anchor,
            fade: Transition::new(timing.text_fade_out, Easing::EaseOut),
        },
        success_label: LabelView {
            visible: state.success_text_visible,
            anchor: success_anchor,
            fade: Transition::new(timing.text_fade_in, Easing::EaseOut),
        },
    }
}
