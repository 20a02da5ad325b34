//! Colours for the action button.

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS `#rrggbb` form, alpha dropped.
    #[must_use]
    pub fn to_css_hex(self) -> String {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Colours used by the button shell and its glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Shell fill.
    pub fill: Color,
    /// Shell fill under the pointer while the button still accepts clicks.
    pub fill_hover: Color,
    /// Label and glyph colour.
    pub foreground: Color,
    /// Keyboard focus outline.
    pub focus_ring: Color,
}

impl Palette {
    /// The flight-booking blue.
    pub const SHOWCASE: Self = Self {
        fill: Color::rgba(25.0 / 255.0, 107.0 / 255.0, 1.0, 1.0),
        fill_hover: Color::rgba(0.0, 86.0 / 255.0, 179.0 / 255.0, 1.0),
        foreground: Color::WHITE,
        focus_ring: Color::rgba(25.0 / 255.0, 107.0 / 255.0, 1.0, 1.0),
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::SHOWCASE
    }
}
