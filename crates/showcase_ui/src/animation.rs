//! Easing curves and tweened values.
//!
//! The curves are the CSS ones the button was tuned with: a standard
//! deceleration for shell and icon travel, and an overshooting curve for the
//! glyph cross-fade so the tick "pops".

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// CSS `ease-out`.
    #[default]
    EaseOut,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier {
        /// First control point x (0-1).
        x1: f32,
        /// First control point y.
        y1: f32,
        /// Second control point x (0-1).
        x2: f32,
        /// Second control point y.
        y2: f32,
    },
    /// Instant (no animation).
    Instant,
}

impl Easing {
    /// `cubic-bezier(0.4, 0, 0.2, 1)`: shell width and icon travel.
    pub const STANDARD: Self = Self::CubicBezier {
        x1: 0.4,
        y1: 0.0,
        x2: 0.2,
        y2: 1.0,
    };

    /// `cubic-bezier(0.34, 1.56, 0.64, 1)`: glyph scale/opacity swap.
    pub const OVERSHOOT: Self = Self::CubicBezier {
        x1: 0.34,
        y1: 1.56,
        x2: 0.64,
        y2: 1.0,
    };

    /// Applies the easing function to a t value (0-1).
    ///
    /// The result may leave `0..=1` for overshooting curves.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
            Self::Instant => 1.0,
        }
    }
}

/// One coordinate of a cubic Bézier with endpoints 0 and 1.
fn bezier_coord(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Evaluates the curve's y at horizontal progress `x`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    // Newton first, bisection if the slope flattens out.
    let mut s = x;
    for _ in 0..8 {
        let err = bezier_coord(x1, x2, s) - x;
        if err.abs() < 1e-5 {
            return bezier_coord(y1, y2, s);
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let value = bezier_coord(x1, x2, s);
        if (value - x).abs() < 1e-5 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    bezier_coord(y1, y2, s)
}

/// A timed CSS-style transition on one property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Duration in milliseconds. Zero means the change is applied instantly.
    pub duration_ms: u32,
    /// Curve.
    pub easing: Easing,
}

impl Transition {
    /// No transition at all.
    pub const NONE: Self = Self {
        duration_ms: 0,
        easing: Easing::Instant,
    };

    /// Creates a transition.
    #[must_use]
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    /// Returns true if the change is applied without animation.
    #[must_use]
    pub const fn is_instant(&self) -> bool {
        self.duration_ms == 0
    }
}

/// A single tweened value driven in milliseconds.
#[derive(Debug, Clone)]
pub struct Tween {
    /// Current value.
    current: f32,
    /// Target value.
    target: f32,
    /// Start value (for interpolation).
    start: f32,
    /// Elapsed time of the running transition.
    elapsed_ms: u32,
    /// Active transition.
    transition: Transition,
}

impl Tween {
    /// Creates a tween resting at `value`.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            current: value,
            target: value,
            start: value,
            elapsed_ms: 0,
            transition: Transition::NONE,
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns the value being approached.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Returns true if the tween has reached its target.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed_ms >= self.transition.duration_ms
    }

    /// Starts moving toward `target` from wherever the value is now.
    ///
    /// A zero-length transition snaps immediately.
    pub fn retarget(&mut self, target: f32, transition: Transition) {
        if (target - self.target).abs() <= f32::EPSILON {
            return;
        }
        if transition.is_instant() {
            self.set_immediate(target);
            return;
        }
        self.start = self.current;
        self.target = target;
        self.elapsed_ms = 0;
        self.transition = transition;
    }

    /// Immediately sets the value without animation.
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.start = value;
        self.elapsed_ms = 0;
        self.transition = Transition::NONE;
    }

    /// Advances the tween by `dt_ms`.
    pub fn advance(&mut self, dt_ms: u32) {
        if self.is_complete() {
            return;
        }

        self.elapsed_ms = self
            .elapsed_ms
            .saturating_add(dt_ms)
            .min(self.transition.duration_ms);

        #[allow(clippy::cast_precision_loss)]
        let progress = self.elapsed_ms as f32 / self.transition.duration_ms as f32;
        let eased = self.transition.easing.apply(progress);
        self.current = self.start + (self.target - self.start) * eased;

        if self.is_complete() {
            self.current = self.target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curves_hit_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::STANDARD, Easing::OVERSHOOT] {
            assert!(easing.apply(0.0).abs() < 1e-4, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-4, "{easing:?}");
        }
    }

    #[test]
    fn test_standard_decelerates() {
        // Front-loaded: well past halfway at half time.
        let mid = Easing::STANDARD.apply(0.5);
        assert!(mid > 0.7, "standard curve at 0.5 was {mid}");
    }

    #[test]
    fn test_overshoot_exceeds_one() {
        let peak = (1..100)
            .map(|i| Easing::OVERSHOOT.apply(i as f32 / 100.0))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0, "overshoot curve never passed 1.0 (peak {peak})");
    }

    #[test]
    fn test_tween_reaches_target() {
        let mut tween = Tween::new(240.0);
        tween.retarget(58.0, Transition::new(400, Easing::STANDARD));

        for _ in 0..25 {
            tween.advance(16);
        }

        assert!((tween.value() - 58.0).abs() < 0.01);
        assert!(tween.is_complete());
    }

    #[test]
    fn test_instant_transition_snaps() {
        let mut tween = Tween::new(0.0);
        tween.retarget(68.0, Transition::NONE);
        assert!((tween.value() - 68.0).abs() < f32::EPSILON);
        assert!(tween.is_complete());
    }

    #[test]
    fn test_retarget_midway_starts_from_current() {
        let mut tween = Tween::new(0.0);
        tween.retarget(100.0, Transition::new(100, Easing::Linear));
        tween.advance(50);
        assert!((tween.value() - 50.0).abs() < 0.01);

        tween.retarget(0.0, Transition::new(100, Easing::Linear));
        tween.advance(50);
        assert!((tween.value() - 25.0).abs() < 0.01);
    }
}
