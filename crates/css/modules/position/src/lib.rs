//! CSS Positioned Layout Module Level 3 — absolutely positioned boxes and
//! relative offsets.
//! Spec: <https://www.w3.org/TR/css-position-3/>
//!
//! Absolutely positioned boxes resolve against their containing block's
//! padding box; inset percentages are resolved to pixels upstream. Out-of-flow
//! boxes never affect their siblings, so this module is pure arithmetic from
//! containing block to border-box rectangle.

use css_core::{Point, Rect, quantize_layout};
use css_sizing::{AspectRatio, clamp_size};
use log::debug;

/// Inputs for one absolutely positioned box. `None` insets and sizes are
/// `auto`.
#[derive(Clone, Debug, Default)]
pub struct AbsoluteBox {
    pub inset_left: Option<f32>,
    pub inset_right: Option<f32>,
    pub inset_top: Option<f32>,
    pub inset_bottom: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub min_width: Option<f32>,
    pub max_width: Option<f32>,
    pub min_height: Option<f32>,
    pub max_height: Option<f32>,
    /// Shrink-to-fit fallback sizes when the axis stays auto.
    pub max_content_width: f32,
    pub max_content_height: f32,
    pub aspect_ratio: Option<AspectRatio>,
    /// The static position: where the box would have been placed in flow,
    /// relative to the containing block. Used when both insets in an axis
    /// are `auto`.
    pub static_position: Point,
}

/// One axis of an absolute box: insets, containing-block extent, and sizes.
struct AxisSpec {
    start: Option<f32>,
    end: Option<f32>,
    extent: f32,
    preferred: Option<f32>,
    fallback: f32,
    min: Option<f32>,
    max: Option<f32>,
    static_offset: f32,
}

fn resolve_axis(spec: &AxisSpec) -> (f32, f32) {
    let AxisSpec {
        start,
        end,
        extent,
        preferred,
        fallback,
        min,
        max,
        static_offset,
    } = *spec;
    match (start, end) {
        (Some(start), Some(end)) => {
            // Both insets: a definite size wins (the leftover inset slack is
            // ignored without auto margins); an auto size stretches.
            let size = preferred.unwrap_or_else(|| (extent - start - end).max(0.0));
            (start, clamp_size(size, min, max))
        }
        (Some(start), None) => {
            let size = clamp_size(preferred.unwrap_or(fallback), min, max);
            (start, size)
        }
        (None, Some(end)) => {
            let size = clamp_size(preferred.unwrap_or(fallback), min, max);
            (extent - end - size, size)
        }
        (None, None) => {
            // Both auto: the box sits at its static position.
            let size = clamp_size(preferred.unwrap_or(fallback), min, max);
            (static_offset, size)
        }
    }
}

/// Resolve an absolutely positioned box against its containing block.
///
/// Returns the border-box rectangle in the containing block's coordinate
/// space (offset by its origin). The aspect ratio transfers a definite axis
/// onto an auto one; a doubly-inset (stretched) axis counts as definite.
pub fn resolve_absolute(containing_block: Rect, item: &AbsoluteBox) -> Rect {
    // Ratio transfer for the preferred sizes before axis resolution. A
    // stretched axis (both insets set, auto size) is already determined, so
    // the ratio only fills axes that would otherwise shrink-to-fit.
    let horizontal_stretched =
        item.inset_left.is_some() && item.inset_right.is_some() && item.width.is_none();
    let vertical_stretched =
        item.inset_top.is_some() && item.inset_bottom.is_some() && item.height.is_none();

    let stretched_width = (containing_block.width
        - item.inset_left.unwrap_or(0.0)
        - item.inset_right.unwrap_or(0.0))
    .max(0.0);
    let stretched_height = (containing_block.height
        - item.inset_top.unwrap_or(0.0)
        - item.inset_bottom.unwrap_or(0.0))
    .max(0.0);

    let known_width = item.width.or(horizontal_stretched.then_some(stretched_width));
    let known_height = item.height.or(vertical_stretched.then_some(stretched_height));

    let preferred_width = known_width.or_else(|| {
        item.aspect_ratio
            .zip(known_height)
            .map(|(ratio, height)| ratio.width_for_height(height))
    });
    let preferred_height = known_height.or_else(|| {
        item.aspect_ratio
            .zip(preferred_width)
            .map(|(ratio, width)| ratio.height_for_width(width))
    });

    let (x, width) = resolve_axis(&AxisSpec {
        start: item.inset_left,
        end: item.inset_right,
        extent: containing_block.width,
        preferred: if horizontal_stretched {
            None
        } else {
            preferred_width
        },
        fallback: item.max_content_width,
        min: item.min_width,
        max: item.max_width,
        static_offset: item.static_position.x,
    });
    let (y, height) = resolve_axis(&AxisSpec {
        start: item.inset_top,
        end: item.inset_bottom,
        extent: containing_block.height,
        preferred: if vertical_stretched {
            None
        } else {
            preferred_height
        },
        fallback: item.max_content_height,
        min: item.min_height,
        max: item.max_height,
        static_offset: item.static_position.y,
    });

    let rect = Rect::new(
        quantize_layout(containing_block.x + x),
        quantize_layout(containing_block.y + y),
        quantize_layout(width),
        quantize_layout(height),
    );
    debug!(
        target: "css::position",
        "[ABSPOS] cb {containing_block:?} -> {rect:?}"
    );
    rect
}

/// The offset a `position: relative` box shifts by after normal layout.
///
/// `left` wins over `right` and `top` over `bottom` when both are set;
/// siblings are never affected by the shift.
///
/// Spec: <https://www.w3.org/TR/css-position-3/#rel-pos>
pub fn relative_offset(
    left: Option<f32>,
    right: Option<f32>,
    top: Option<f32>,
    bottom: Option<f32>,
) -> Point {
    Point {
        x: left.or(right.map(|value| -value)).unwrap_or(0.0),
        y: top.or(bottom.map(|value| -value)).unwrap_or(0.0),
    }
}
