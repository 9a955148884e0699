//! CSS Box Sizing Module Level 4 — aspect-ratio resolution and size clamping.
//! Spec: <https://www.w3.org/TR/css-sizing-4/#aspect-ratio>
//!
//! The aspect-ratio resolver derives a missing axis from the preferred ratio
//! and the known axis. Degenerate ratios (zero or non-finite components)
//! resolve to "no ratio" so callers never divide by zero.

use log::trace;

/// A preferred aspect ratio, stored as width / height.
///
/// Spec: <https://www.w3.org/TR/css-sizing-4/#aspect-ratio-interpolation>
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AspectRatio {
    ratio: f32,
}

impl AspectRatio {
    /// Build a ratio from `aspect-ratio: <width> / <height>` components.
    ///
    /// Returns `None` for degenerate ratios (either component zero, negative,
    /// or non-finite), per the used-value fallback of `auto`.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
            Some(Self {
                ratio: width / height,
            })
        } else {
            trace!(target: "css::sizing", "degenerate aspect-ratio {width}/{height} treated as auto");
            None
        }
    }

    /// Build directly from a precomputed width/height quotient.
    pub fn from_quotient(ratio: f32) -> Option<Self> {
        if ratio > 0.0 && ratio.is_finite() {
            Some(Self { ratio })
        } else {
            None
        }
    }

    /// The width/height quotient.
    pub const fn quotient(self) -> f32 {
        self.ratio
    }

    /// Derive the width from a known height.
    pub fn width_for_height(self, height: f32) -> f32 {
        height * self.ratio
    }

    /// Derive the height from a known width.
    pub fn height_for_width(self, width: f32) -> f32 {
        width / self.ratio
    }
}

/// Clamp a size by optional min/max constraints with the min-wins rule:
/// when `min > max`, the minimum takes precedence.
///
/// Spec: <https://www.w3.org/TR/css-sizing-3/#min-size-properties>
pub fn clamp_size(value: f32, min: Option<f32>, max: Option<f32>) -> f32 {
    let upper = max.unwrap_or(f32::INFINITY);
    let lower = min.unwrap_or(0.0);
    value.min(upper).max(lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.5;

    #[test]
    /// # Panics
    /// Panics if 16/9 with a 90px height does not derive a 160px width.
    fn sixteen_by_nine_derives_width() {
        let ratio = AspectRatio::new(16.0, 9.0);
        let Some(ratio) = ratio else {
            assert!(ratio.is_some(), "16/9 must be a valid ratio");
            return;
        };
        assert!((ratio.width_for_height(90.0) - 160.0).abs() < EPSILON);
        assert!((ratio.height_for_width(160.0) - 90.0).abs() < EPSILON);
    }

    #[test]
    /// # Panics
    /// Panics if degenerate ratios are not rejected.
    fn degenerate_ratios_are_auto() {
        assert!(AspectRatio::new(0.0, 9.0).is_none());
        assert!(AspectRatio::new(16.0, 0.0).is_none());
        assert!(AspectRatio::new(f32::NAN, 9.0).is_none());
        assert!(AspectRatio::from_quotient(f32::INFINITY).is_none());
    }

    #[test]
    /// # Panics
    /// Panics if min does not win over a smaller max.
    fn min_wins_over_max() {
        let clamped = clamp_size(150.0, Some(200.0), Some(100.0));
        assert!((clamped - 200.0).abs() < 1e-6);
    }

    #[test]
    /// # Panics
    /// Panics if unconstrained clamping changes the value.
    fn unconstrained_clamp_is_identity() {
        let clamped = clamp_size(42.0, None, None);
        assert!((clamped - 42.0).abs() < 1e-6);
    }
}
