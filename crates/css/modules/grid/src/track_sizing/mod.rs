//! Grid track sizing algorithm.
//! Spec: <https://www.w3.org/TR/css-grid-2/#algo-track-sizing>
//!
//! Tracks carry a base size and a growth limit. Sizing runs in five steps:
//! initialize from the sizing functions, distribute item contributions to
//! intrinsic tracks, maximize toward definite limits, expand flexible (`fr`)
//! tracks into remaining free space, and stretch `auto` tracks under
//! `*-content: stretch`.

mod contributions;
mod distribution;

use css_align::ContentAlignment;
use css_core::AvailableSpace;
use css_sizing::clamp_size;
use log::debug;

use crate::placement::GridArea;
use crate::types::{GridItem, GridTrack, TrackBreadth};

/// Convergence threshold for distribution loops, in CSS pixels.
pub(crate) const EPSILON: f32 = 0.001;

/// Which axis the sizing pass runs in.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GridAxis {
    Row,
    Column,
}

impl GridAxis {
    /// The 0-based track range an area spans in this axis.
    pub(crate) const fn track_range(self, area: &GridArea) -> std::ops::Range<usize> {
        match self {
            Self::Row => area.row_start - 1..area.row_end - 1,
            Self::Column => area.column_start - 1..area.column_end - 1,
        }
    }

    /// The item's minimum content contribution in this axis: the preferred
    /// size when definite (transferring through the aspect ratio if needed),
    /// otherwise the min-content size, clamped by the min/max properties.
    pub(crate) fn min_contribution<NodeId>(self, item: &GridItem<NodeId>) -> f32 {
        match self {
            Self::Column => clamp_size(
                self.preferred(item).unwrap_or(item.min_content_width),
                item.min_width,
                item.max_width,
            ),
            Self::Row => clamp_size(
                self.preferred(item).unwrap_or(item.min_content_height),
                item.min_height,
                item.max_height,
            ),
        }
    }

    /// The item's maximum content contribution in this axis.
    pub(crate) fn max_contribution<NodeId>(self, item: &GridItem<NodeId>) -> f32 {
        match self {
            Self::Column => clamp_size(
                self.preferred(item).unwrap_or(item.max_content_width),
                item.min_width,
                item.max_width,
            ),
            Self::Row => clamp_size(
                self.preferred(item).unwrap_or(item.max_content_height),
                item.min_height,
                item.max_height,
            ),
        }
    }

    /// The item's definite preferred size in this axis, deriving it through
    /// the aspect ratio from the opposite axis when only that one is set.
    fn preferred<NodeId>(self, item: &GridItem<NodeId>) -> Option<f32> {
        match self {
            Self::Column => item.preferred_width.or_else(|| {
                item.aspect_ratio
                    .zip(item.preferred_height)
                    .map(|(ratio, height)| ratio.width_for_height(height))
            }),
            Self::Row => item.preferred_height.or_else(|| {
                item.aspect_ratio
                    .zip(item.preferred_width)
                    .map(|(ratio, width)| ratio.height_for_width(width))
            }),
        }
    }
}

/// Inputs to one axis of track sizing.
pub struct TrackSizingInputs<'inputs, NodeId> {
    pub tracks: &'inputs [GridTrack],
    pub items: &'inputs [GridItem<NodeId>],
    /// Definite areas for `items`, index-aligned.
    pub placements: &'inputs [GridArea],
    pub axis: GridAxis,
    /// The gutter between adjacent tracks.
    pub gap: f32,
    /// The container's content-box size in this axis.
    pub available: AvailableSpace,
    /// `justify-content` (columns) or `align-content` (rows); only the
    /// `Stretch` keyword affects sizing.
    pub alignment: ContentAlignment,
}

/// Per-track working state for the sizing algorithm.
pub(crate) struct TrackState {
    pub(crate) base: f32,
    /// `f32::INFINITY` while the limit is intrinsic and untouched.
    pub(crate) limit: f32,
    /// Whether the minimum sizing function is content-based.
    pub(crate) intrinsic_min: bool,
    /// Whether the maximum sizing function is content-based.
    pub(crate) intrinsic_max: bool,
    pub(crate) flex: Option<f32>,
    /// The resolved `fit-content()` limit, applied after contributions.
    pub(crate) fit_limit: Option<f32>,
    /// Whether the maximum sizing function is the `auto` keyword, which makes
    /// the track eligible for `*-content: stretch` growth.
    pub(crate) stretchable: bool,
}

/// Resolved track sizes in one axis. The used size of each track is its
/// final base size; growth limits are retained for diagnostics.
#[derive(Clone, Debug, Default)]
pub struct ResolvedTrackSizes {
    pub base_sizes: Vec<f32>,
    pub growth_limits: Vec<f32>,
}

impl ResolvedTrackSizes {
    pub fn len(&self) -> usize {
        self.base_sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base_sizes.is_empty()
    }

    /// Total extent of all tracks plus gutters.
    pub fn total(&self, gap: f32) -> f32 {
        let sizes: f32 = self.base_sizes.iter().sum();
        let gaps = gap * self.base_sizes.len().saturating_sub(1) as f32;
        sizes + gaps
    }
}

fn initialize_track(track: &GridTrack, basis: Option<f32>) -> TrackState {
    let min_breadth = track.size.min_breadth();
    let max_breadth = track.size.max_breadth();

    let (base, intrinsic_min) = match min_breadth.definite(basis) {
        Some(size) => (size, false),
        // Intrinsic minimums (and percentages against an indefinite basis)
        // start at zero and grow from content.
        None => (0.0, true),
    };
    let (limit, intrinsic_max, flex) = if let Some(factor) = max_breadth.flex_factor() {
        (f32::INFINITY, false, Some(factor))
    } else {
        match max_breadth.definite(basis) {
            Some(size) => (size, false, None),
            None => (f32::INFINITY, true, None),
        }
    };
    // fit-content() limits resolving as indefinite (percentage limit in an
    // indefinite container) leave the track as plain minmax(auto, max-content).
    let fit_limit = track
        .size
        .fit_content_limit()
        .and_then(|breadth| breadth.definite(basis));

    TrackState {
        base,
        // A definite maximum below the minimum is clamped to the minimum.
        limit: limit.max(base),
        intrinsic_min,
        intrinsic_max,
        flex,
        fit_limit,
        stretchable: matches!(max_breadth, TrackBreadth::Auto),
    }
}

/// Resolve the sizes of every track in one axis.
pub fn resolve_track_sizes<NodeId>(inputs: &TrackSizingInputs<'_, NodeId>) -> ResolvedTrackSizes {
    let basis = inputs.available.definite();
    let mut states: Vec<TrackState> = inputs
        .tracks
        .iter()
        .map(|track| initialize_track(track, basis))
        .collect();
    if states.is_empty() {
        return ResolvedTrackSizes::default();
    }

    contributions::distribute_item_contributions(&mut states, inputs);

    // End of the intrinsic step: remaining infinite growth limits collapse to
    // the base size, and fit-content() caps its limit.
    for state in &mut states {
        if !state.limit.is_finite() {
            state.limit = state.base;
        }
        if let Some(fit) = state.fit_limit {
            state.limit = state.limit.min(fit);
        }
        state.limit = state.limit.max(state.base);
    }

    if let Some(basis) = basis {
        let gaps = inputs.gap * states.len().saturating_sub(1) as f32;
        distribution::maximize_tracks(&mut states, basis - gaps);
        distribution::expand_flexible_tracks(&mut states, basis - gaps);
        if inputs.alignment.normalized() == ContentAlignment::Stretch {
            distribution::stretch_auto_tracks(&mut states, basis - gaps);
        }
    }

    let resolved = ResolvedTrackSizes {
        base_sizes: states.iter().map(|state| state.base).collect(),
        growth_limits: states.iter().map(|state| state.limit).collect(),
    };
    debug!(
        target: "css::grid",
        "[TRACK_SIZING] {:?} axis: {} tracks -> {:?}",
        inputs.axis,
        resolved.len(),
        resolved.base_sizes
    );
    resolved
}
