//! Size profiles: geometry presets for the button at each UI density.
//!
//! All values are CSS pixels. A profile must keep the icon inside the shell
//! at every width the shell takes during the sequence, and must keep the
//! initial label clear of the icon while idle.

use crate::error::{ConfigError, ConfigResult};
use crate::layout::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named size variant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SizeKind {
    /// Dense layouts.
    Small,
    /// Default.
    #[default]
    Medium,
    /// Hero placement.
    Large,
}

impl SizeKind {
    /// Every size in ascending order.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Built-in geometry for this size.
    #[must_use]
    pub const fn profile(self) -> SizeProfile {
        match self {
            Self::Small => SizeProfile::SMALL,
            Self::Medium => SizeProfile::MEDIUM,
            Self::Large => SizeProfile::LARGE,
        }
    }
}

impl fmt::Display for SizeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SizeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownSize(s.to_string()))
    }
}

/// Geometry constants for one size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SizeProfile {
    /// Shell height; also the diameter of the relaxed circle.
    pub height: f32,
    /// Minimum content width of the shell.
    pub min_width: f32,
    /// Width the shell squeezes to while compressing.
    pub compact_width: f32,
    /// Icon edge length.
    pub icon_size: f32,
    /// Icon distance from the shell's left edge when left-aligned.
    pub icon_left: f32,
    /// Label distance from the shell's left edge when an icon is shown.
    pub text_left: f32,
    /// Label font size.
    pub font_size: f32,
}

impl SizeProfile {
    /// `small`: 24px icon, 8px gap to the label.
    pub const SMALL: Self = Self {
        height: 48.0,
        min_width: 180.0,
        compact_width: 38.0,
        icon_size: 24.0,
        icon_left: 16.0,
        text_left: 48.0,
        font_size: 16.0,
    };

    /// `medium`: 36px icon, 16px gap to the label.
    pub const MEDIUM: Self = Self {
        height: 68.0,
        min_width: 240.0,
        compact_width: 58.0,
        icon_size: 36.0,
        icon_left: 24.0,
        text_left: 76.0,
        font_size: 20.0,
    };

    /// `large`: 48px icon, 16px gap to the label.
    pub const LARGE: Self = Self {
        height: 88.0,
        min_width: 300.0,
        compact_width: 78.0,
        icon_size: 48.0,
        icon_left: 32.0,
        text_left: 96.0,
        font_size: 24.0,
    };

    /// Icon bounds when left-aligned in a shell of `shell_width`.
    #[must_use]
    pub fn left_icon_rect(&self, shell_width: f32) -> Rect {
        let shell = Rect::new(0.0, 0.0, shell_width, self.height);
        Rect::left_square(&shell, self.icon_left, self.icon_size)
    }

    /// Icon bounds when centred in a shell of `shell_width`.
    #[must_use]
    pub fn centered_icon_rect(&self, shell_width: f32) -> Rect {
        let shell = Rect::new(0.0, 0.0, shell_width, self.height);
        Rect::centered_square(&shell, self.icon_size)
    }

    /// Checks the geometry invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGeometry`] naming the first violation.
    pub fn validate(&self, kind: SizeKind) -> ConfigResult<()> {
        let fail = |reason: String| {
            Err(ConfigError::InvalidGeometry {
                size: kind.name().to_string(),
                reason,
            })
        };

        let values = [
            ("height", self.height),
            ("min_width", self.min_width),
            ("compact_width", self.compact_width),
            ("icon_size", self.icon_size),
            ("font_size", self.font_size),
        ];
        for (name, value) in values {
            if !value.is_finite() || value <= 0.0 {
                return fail(format!("{name} must be positive, got {value}"));
            }
        }
        for (name, value) in [("icon_left", self.icon_left), ("text_left", self.text_left)] {
            if !value.is_finite() || value < 0.0 {
                return fail(format!("{name} must not be negative, got {value}"));
            }
        }

        // Left-aligned at rest and while expanding.
        let wide = Rect::new(0.0, 0.0, self.min_width, self.height);
        if !wide.contains_rect(&self.left_icon_rect(self.min_width)) {
            return fail("left-aligned icon does not fit inside the shell".to_string());
        }

        // Centred while the shell is squeezed and relaxed.
        for width in [self.compact_width, self.height] {
            let shell = Rect::new(0.0, 0.0, width, self.height);
            if !shell.contains_rect(&self.centered_icon_rect(width)) {
                return fail(format!("centred icon does not fit a {width}px wide shell"));
            }
        }

        if self.text_left >= self.min_width {
            return fail("label starts beyond the shell's minimum width".to_string());
        }
        let label = Rect::new(self.text_left, 0.0, self.min_width - self.text_left, self.height);
        if label.intersects(&self.left_icon_rect(self.min_width)) {
            return fail("label overlaps the icon at rest".to_string());
        }

        Ok(())
    }
}

impl Default for SizeProfile {
    fn default() -> Self {
        Self::MEDIUM
    }
}
