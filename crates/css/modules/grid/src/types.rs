//! Grid container and item types.
//! Spec: <https://www.w3.org/TR/css-grid-2/#grid-concepts>

use css_align::ItemAlignment;
use css_sizing::AspectRatio;

/// A single track sizing function component.
///
/// Spec: <https://www.w3.org/TR/css-grid-2/#typedef-track-breadth>
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TrackBreadth {
    /// Fixed length in pixels.
    Length(f32),
    /// Percentage of the container's size in the track's axis (0.0 to 1.0).
    Percentage(f32),
    /// Flexible length (fr unit).
    Flex(f32),
    /// Sized to the smallest size that fits the content.
    MinContent,
    /// Sized to the largest size the content wants.
    MaxContent,
    /// Behaves as the largest content size when used as a maximum,
    /// and as the smallest when used as a minimum.
    Auto,
}

impl TrackBreadth {
    /// Whether this breadth is content-based (intrinsic).
    pub const fn is_intrinsic(self) -> bool {
        matches!(self, Self::MinContent | Self::MaxContent | Self::Auto)
    }

    /// Whether this breadth is a flexible `fr` length.
    pub const fn is_flexible(self) -> bool {
        matches!(self, Self::Flex(_))
    }

    /// The flex factor, if this breadth is flexible.
    pub const fn flex_factor(self) -> Option<f32> {
        match self {
            Self::Flex(factor) => Some(factor),
            _ => None,
        }
    }

    /// Resolve to a definite pixel value where possible. Percentages resolve
    /// against `available`; with an indefinite container they behave as
    /// `auto` and return `None`.
    pub fn definite(self, available: Option<f32>) -> Option<f32> {
        match self {
            Self::Length(px) => Some(px),
            Self::Percentage(fraction) => available.map(|basis| basis * fraction),
            Self::Flex(_) | Self::MinContent | Self::MaxContent | Self::Auto => None,
        }
    }
}

/// A track sizing function: a single breadth, a `minmax()` pair, or
/// `fit-content()`.
///
/// Spec: <https://www.w3.org/TR/css-grid-2/#track-sizing>
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GridTrackSize {
    /// A single breadth, e.g. `100px`, `1fr`, `auto`.
    Breadth(TrackBreadth),
    /// `minmax(min, max)`.
    MinMax(TrackBreadth, TrackBreadth),
    /// `fit-content(limit)`: formula-equivalent to
    /// `minmax(auto, min(max-content, limit))`.
    FitContent(TrackBreadth),
}

impl GridTrackSize {
    /// The effective minimum sizing function.
    ///
    /// A lone flexible breadth has an automatic minimum; `fit-content()`
    /// likewise sizes its minimum as `auto`.
    pub const fn min_breadth(self) -> TrackBreadth {
        match self {
            Self::Breadth(TrackBreadth::Flex(_)) => TrackBreadth::Auto,
            Self::Breadth(breadth) => breadth,
            Self::MinMax(min, _) => min,
            Self::FitContent(_) => TrackBreadth::Auto,
        }
    }

    /// The effective maximum sizing function.
    pub const fn max_breadth(self) -> TrackBreadth {
        match self {
            Self::Breadth(breadth) => breadth,
            Self::MinMax(_, max) => max,
            Self::FitContent(_) => TrackBreadth::MaxContent,
        }
    }

    /// The `fit-content()` limit, if this track uses one.
    pub const fn fit_content_limit(self) -> Option<TrackBreadth> {
        match self {
            Self::FitContent(limit) => Some(limit),
            _ => None,
        }
    }
}

/// Whether a track came from the template or was synthesized by placement.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TrackListType {
    Explicit,
    Implicit,
}

/// One track of the grid in a single axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridTrack {
    pub size: GridTrackSize,
    pub track_type: TrackListType,
}

impl GridTrack {
    pub const fn explicit(size: GridTrackSize) -> Self {
        Self {
            size,
            track_type: TrackListType::Explicit,
        }
    }

    pub const fn implicit(size: GridTrackSize) -> Self {
        Self {
            size,
            track_type: TrackListType::Implicit,
        }
    }
}

/// The `grid-auto-flow` property.
///
/// Spec: <https://www.w3.org/TR/css-grid-2/#grid-auto-flow-property>
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum GridAutoFlow {
    #[default]
    Row,
    Column,
    RowDense,
    ColumnDense,
}

impl GridAutoFlow {
    /// Whether auto-placement fills rows first (the flow axis is the inline
    /// axis).
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowDense)
    }

    /// Whether the dense packing algorithm rescans from the grid start for
    /// every item instead of carrying a forward-only cursor.
    pub const fn is_dense(self) -> bool {
        matches!(self, Self::RowDense | Self::ColumnDense)
    }
}

/// One side of an item's placement in one axis
/// (`grid-row-start`, `grid-column-end`, ...).
///
/// Spec: <https://www.w3.org/TR/css-grid-2/#typedef-grid-row-start-grid-line>
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum GridLine {
    /// Auto-placement in this axis.
    #[default]
    Auto,
    /// A numbered grid line. Positive counts from the start, negative from
    /// the end of the explicit grid. Zero is invalid and treated as `Auto`.
    Index(i32),
    /// `span <n>`: span that many tracks from the opposite side.
    Span(usize),
    /// A named grid line. Unmatched names resolve to the first implicit line
    /// past the explicit grid.
    Named(String),
}

/// A grid item: placement inputs plus the sizing contributions the track
/// sizing algorithm consumes. Contributions are content measurements supplied
/// by the caller; this module never measures content itself.
#[derive(Clone, Debug)]
pub struct GridItem<NodeId> {
    pub node_id: NodeId,
    pub row_start: GridLine,
    pub row_end: GridLine,
    pub column_start: GridLine,
    pub column_end: GridLine,
    /// `grid-area: <name>` shorthand referencing a named template area.
    pub area_name: Option<String>,
    /// Smallest inline size that fits the content without overflow.
    pub min_content_width: f32,
    /// Inline size the content would take with no wrapping.
    pub max_content_width: f32,
    pub min_content_height: f32,
    pub max_content_height: f32,
    /// Definite preferred sizes; `None` means `auto`.
    pub preferred_width: Option<f32>,
    pub preferred_height: Option<f32>,
    pub min_width: Option<f32>,
    pub max_width: Option<f32>,
    pub min_height: Option<f32>,
    pub max_height: Option<f32>,
    pub aspect_ratio: Option<AspectRatio>,
    /// `justify-self` / `align-self` overrides; `None` inherits the
    /// container's `*-items` value.
    pub justify_self: Option<ItemAlignment>,
    pub align_self: Option<ItemAlignment>,
}

impl<NodeId> GridItem<NodeId> {
    /// A fully-auto item with zero-size content.
    pub fn new(node_id: NodeId) -> Self {
        Self {
            node_id,
            row_start: GridLine::Auto,
            row_end: GridLine::Auto,
            column_start: GridLine::Auto,
            column_end: GridLine::Auto,
            area_name: None,
            min_content_width: 0.0,
            max_content_width: 0.0,
            min_content_height: 0.0,
            max_content_height: 0.0,
            preferred_width: None,
            preferred_height: None,
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
            aspect_ratio: None,
            justify_self: None,
            align_self: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if a lone fr breadth does not expose an automatic minimum.
    fn flex_breadth_has_auto_minimum() {
        let track = GridTrackSize::Breadth(TrackBreadth::Flex(2.0));
        assert_eq!(track.min_breadth(), TrackBreadth::Auto);
        assert_eq!(track.max_breadth(), TrackBreadth::Flex(2.0));
    }

    #[test]
    /// # Panics
    /// Panics if fit-content does not decompose into minmax(auto, max-content)
    /// with a recorded limit.
    fn fit_content_decomposition() {
        let track = GridTrackSize::FitContent(TrackBreadth::Length(150.0));
        assert_eq!(track.min_breadth(), TrackBreadth::Auto);
        assert_eq!(track.max_breadth(), TrackBreadth::MaxContent);
        assert_eq!(
            track.fit_content_limit(),
            Some(TrackBreadth::Length(150.0))
        );
    }

    #[test]
    /// # Panics
    /// Panics if percentage resolution against an indefinite basis is not auto.
    fn percentage_needs_definite_basis() {
        let breadth = TrackBreadth::Percentage(0.5);
        assert_eq!(breadth.definite(Some(400.0)), Some(200.0));
        assert_eq!(breadth.definite(None), None);
    }

    #[test]
    /// # Panics
    /// Panics if dense/row flow classification is wrong.
    fn auto_flow_classification() {
        assert!(GridAutoFlow::Row.is_row());
        assert!(!GridAutoFlow::ColumnDense.is_row());
        assert!(GridAutoFlow::RowDense.is_dense());
        assert!(!GridAutoFlow::Column.is_dense());
    }
}
