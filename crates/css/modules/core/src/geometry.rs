//! Geometry primitives in CSS pixels.
//!
//! All coordinates are in the owning container's content-box space, matching
//! the `getBoundingClientRect()`-style reads the harness performs.

/// A point in CSS pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// A size in CSS pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The zero size.
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// A rectangle in CSS pixels (content rect of a laid-out box).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rect from origin and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The zero rect.
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// The right edge (`x + width`).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// The bottom edge (`y + height`).
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// The size of this rect.
    pub const fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

/// Per-side lengths (margins, padding, insets) in CSS pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Edges {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Edges {
    /// Sum of the horizontal sides.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of the vertical sides.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Quantize a CSS pixel value to the layout unit (1/64 px) to match
/// Chromium's subpixel model.
#[inline]
pub fn quantize_layout(value: f32) -> f32 {
    (value * 64.0).round() / 64.0
}

/// Quantize a CSS pixel value downward to the layout unit (1/64 px). Used for
/// between-spacing so fixed-point accumulation never overflows the free space
/// across slots.
#[inline]
pub fn quantize_layout_floor(value: f32) -> f32 {
    (value * 64.0).floor() / 64.0
}
