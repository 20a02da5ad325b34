//! Box geometry for the shell and icon.

/// A rectangle in shell-local coordinates (origin at the shell's top-left).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// A `size`×`size` square centred inside `container`.
    #[must_use]
    pub fn centered_square(container: &Self, size: f32) -> Self {
        let (cx, cy) = container.center();
        Self::new(cx - size * 0.5, cy - size * 0.5, size, size)
    }

    /// A `size`×`size` square at `left` inside `container`, vertically centred.
    #[must_use]
    pub fn left_square(container: &Self, left: f32, size: f32) -> Self {
        let (_, cy) = container.center();
        Self::new(container.x + left, cy - size * 0.5, size, size)
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Returns true if `other` lies entirely within this rectangle.
    #[must_use]
    pub fn contains_rect(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns true if two rectangles overlap with non-zero area.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}
