//! Status icon render leaf.
//!
//! Two fixed glyphs share one square container: the plane while the booking
//! is pending and the tick once it is done. The inactive glyph is scaled and
//! faded to nothing, so swapping them is a single cross-fade.

use crate::animation::{Easing, Transition};
use crate::layout::Rect;
use crate::phase::AnimationPhase;
use crate::render::RenderContext;
use crate::style::Color;

/// Plane outline, in its own view box (y grows upward, scaled by 0.1).
pub const PLANE_PATH: &str = "M916 1579 c-42 -33 -43 -28 79 -409 61 -190 143 -461 147 -485 3 -17 -3 -20 -37 -22 -22 -1 -83 -9 -136 -18 -78 -12 -360 -45 -389 -45 -4 0 -51 55 -104 123 -54 67 -113 139 -133 160 l-37 37 -106 0 c-118 0 -150 -12 -150 -57 0 -25 57 -218 120 -403 15 -47 40 -124 54 -171 32 -106 54 -129 133 -140 58 -8 403 -22 893 -37 511 -16 1067 0 1238 34 146 30 248 99 293 198 48 107 -2 222 -135 308 -126 81 -264 100 -597 79 -107 -7 -206 -14 -221 -17 -23 -5 -30 2 -65 56 -21 33 -98 151 -172 263 -74 111 -174 265 -224 342 -103 161 -118 180 -169 206 -30 15 -59 19 -146 19 -95 0 -113 -3 -136 -21z";

/// Tick outline, in its own view box (y grows upward, scaled by 0.1).
pub const TICK_PATH: &str = "M1578 1287 c-20 -9 -526 -501 -994 -966 -3 -3 -91 81 -197 186 -121 121 -202 194 -220 198 -15 4 -42 4 -60 1 -73 -14 -109 -103 -69 -168 12 -18 125 -134 252 -258 240 -233 264 -251 326 -236 20 5 189 167 567 544 477 477 538 542 544 575 14 88 -71 159 -149 124z";

/// Which glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Plane: booking not yet confirmed.
    Pending,
    /// Tick: booking confirmed.
    Done,
}

impl Glyph {
    /// SVG path data.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Pending => PLANE_PATH,
            Self::Done => TICK_PATH,
        }
    }

    /// SVG view box `(width, height)`.
    #[must_use]
    pub const fn view_box(self) -> (f32, f32) {
        match self {
            Self::Pending => (285.0, 164.0),
            Self::Done => (176.0, 135.0),
        }
    }
}

/// One glyph layer of the icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphLayer {
    /// The glyph drawn in this layer.
    pub glyph: Glyph,
    /// SVG path data of `glyph`.
    pub path: &'static str,
    /// SVG view box of `glyph`.
    pub view_box: (f32, f32),
    /// Fill colour.
    pub color: Color,
    /// Whether this layer is the visible one.
    pub active: bool,
    /// Scale target (1 or 0).
    pub scale: f32,
    /// Opacity target (1 or 0).
    pub opacity: f32,
}

impl GlyphLayer {
    fn new(glyph: Glyph, active: bool, color: Color) -> Self {
        let level = if active { 1.0 } else { 0.0 };
        Self {
            glyph,
            path: glyph.path(),
            view_box: glyph.view_box(),
            color,
            active,
            scale: level,
            opacity: level,
        }
    }
}

/// Where the icon container sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconPlacement {
    /// Centred in the shell.
    Centered,
    /// Left edge at this offset, vertically centred.
    Left(f32),
}

/// Render inputs derived from the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconInputs {
    /// Show the tick rather than the plane.
    pub show_tick_glyph: bool,
    /// Sequencer wants the icon centred.
    pub is_icon_centered: bool,
    /// Sequencer pins the icon left; wins over centring.
    pub is_icon_on_left: bool,
    /// Current phase, for transition selection.
    pub phase: AnimationPhase,
}

/// Visual state of the icon for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconView {
    /// Container edge length.
    pub size: f32,
    /// Container placement.
    pub placement: IconPlacement,
    /// Plane layer.
    pub pending: GlyphLayer,
    /// Tick layer.
    pub done: GlyphLayer,
    /// Scale and opacity cross-fade between the layers.
    pub swap: Transition,
    /// Position transition of the container.
    pub travel: Transition,
}

impl IconView {
    /// The glyph currently shown.
    #[must_use]
    pub fn active_glyph(&self) -> Glyph {
        if self.done.active {
            Glyph::Done
        } else {
            Glyph::Pending
        }
    }

    /// Container bounds inside `shell`.
    #[must_use]
    pub fn bounds(&self, shell: &Rect) -> Rect {
        match self.placement {
            IconPlacement::Centered => Rect::centered_square(shell, self.size),
            IconPlacement::Left(left) => Rect::left_square(shell, left, self.size),
        }
    }
}

/// Renders the icon.
#[must_use]
pub fn render_icon(inputs: IconInputs, ctx: &RenderContext) -> IconView {
    let centered = inputs.is_icon_centered && !inputs.is_icon_on_left;
    let placement = if centered {
        IconPlacement::Centered
    } else {
        IconPlacement::Left(ctx.profile.icon_left)
    };

    // Moving the container while the shell width animates makes it shake.
    let travel_ms = if inputs.phase.is_shell_resizing() {
        0
    } else if centered {
        ctx.timing.icon_center
    } else {
        ctx.timing.icon_move_to_left
    };

    let glyph_color = ctx.palette.foreground;
    IconView {
        size: ctx.profile.icon_size,
        placement,
        pending: GlyphLayer::new(Glyph::Pending, !inputs.show_tick_glyph, glyph_color),
        done: GlyphLayer::new(Glyph::Done, inputs.show_tick_glyph, glyph_color),
        swap: Transition::new(ctx.timing.icon_swap, Easing::OVERSHOOT),
        travel: Transition::new(travel_ms, Easing::STANDARD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ButtonConfig;

    fn inputs(phase: AnimationPhase, show_tick_glyph: bool) -> IconInputs {
        IconInputs {
            show_tick_glyph,
            is_icon_centered: phase.is_icon_centered(),
            is_icon_on_left: phase.is_icon_on_left(),
            phase,
        }
    }

    #[test]
    fn test_exactly_one_glyph_active() {
        let ctx = RenderContext::default();
        for tick in [false, true] {
            let view = render_icon(inputs(AnimationPhase::IconSwapping, tick), &ctx);
            assert_ne!(view.pending.active, view.done.active);
            assert_eq!(view.active_glyph() == Glyph::Done, tick);
            let hidden = if tick { view.pending } else { view.done };
            assert!(hidden.scale.abs() < f32::EPSILON && hidden.opacity.abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_layers_carry_glyph_data() {
        let ctx = RenderContext::default();
        let view = render_icon(inputs(AnimationPhase::Idle, false), &ctx);

        assert_eq!(view.pending.path, PLANE_PATH);
        assert_eq!(view.pending.view_box, (285.0, 164.0));
        assert_eq!(view.done.path, TICK_PATH);
        assert_eq!(view.done.view_box, (176.0, 135.0));
        assert_eq!(view.pending.color, ctx.palette.foreground);
        assert_eq!(view.done.color, ctx.palette.foreground);
    }

    #[test]
    fn test_placement_follows_phase() {
        let ctx = RenderContext::default();
        for phase in AnimationPhase::ALL {
            let view = render_icon(inputs(phase, false), &ctx);
            if phase.is_icon_centered() {
                assert_eq!(view.placement, IconPlacement::Centered, "{phase}");
            } else {
                assert_eq!(view.placement, IconPlacement::Left(24.0), "{phase}");
            }
        }
    }

    #[test]
    fn test_left_override_wins() {
        let ctx = RenderContext::default();
        let view = render_icon(
            IconInputs {
                show_tick_glyph: true,
                is_icon_centered: true,
                is_icon_on_left: true,
                phase: AnimationPhase::ShellExpanding,
            },
            &ctx,
        );
        assert_eq!(view.placement, IconPlacement::Left(24.0));
    }

    #[test]
    fn test_travel_held_while_shell_resizes() {
        let ctx = RenderContext::default();
        let travel = |phase| render_icon(inputs(phase, false), &ctx).travel.duration_ms;

        assert_eq!(travel(AnimationPhase::IconCentering), 400);
        assert_eq!(travel(AnimationPhase::ShellCompressing), 0);
        assert_eq!(travel(AnimationPhase::ShellRelaxing), 0);
        assert_eq!(travel(AnimationPhase::IconSwapping), 0);
        assert_eq!(travel(AnimationPhase::ShellExpanding), 400);
    }

    #[test]
    fn test_swap_duration_and_reduced_motion() {
        let ctx = RenderContext::default();
        assert_eq!(render_icon(inputs(AnimationPhase::Idle, false), &ctx).swap.duration_ms, 300);

        let reduced = RenderContext::from_config(&ButtonConfig::default().with_reduced_motion(true));
        for phase in AnimationPhase::ALL {
            let view = render_icon(inputs(phase, true), &reduced);
            assert!(view.swap.is_instant() && view.travel.is_instant(), "{phase}");
        }
    }

    #[test]
    fn test_icon_stays_inside_shell() {
        let ctx = RenderContext::default();
        let p = ctx.profile;
        let cases = [
            (AnimationPhase::Idle, p.min_width),
            (AnimationPhase::ShellCompressing, p.compact_width),
            (AnimationPhase::ShellRelaxing, p.height),
            (AnimationPhase::IconSwapping, p.height),
            (AnimationPhase::ShellExpanding, p.min_width),
        ];
        for (phase, width) in cases {
            let shell = Rect::new(0.0, 0.0, width, p.height);
            let icon = render_icon(inputs(phase, false), &ctx).bounds(&shell);
            assert!(shell.contains_rect(&icon), "{phase}: {icon:?} escapes {shell:?}");
        }
    }
}
