//! CSS Grid Layout Module Level 2
//! Spec: <https://www.w3.org/TR/css-grid-2/>
//!
//! This module implements CSS Grid layout, a two-dimensional layout system
//! that lets you lay out content in rows and columns: item placement
//! (explicit, named, auto, dense) followed by the track sizing algorithm and
//! per-item alignment within resolved areas.

// Grid container and item types
mod types;
pub use types::{
    GridAutoFlow, GridItem, GridLine, GridTrack, GridTrackSize, TrackBreadth, TrackListType,
};

// Grid placement algorithm
mod placement;
pub use placement::{
    GridArea, NamedLines, PlacementInputs, PlacementResult, TemplateAreas, place_grid_items,
};

// Track sizing algorithm
mod track_sizing;
pub use track_sizing::{GridAxis, ResolvedTrackSizes, TrackSizingInputs, resolve_track_sizes};

// Grid layout algorithm
mod layout;
pub use layout::{GridContainerInputs, GridLayoutResult, GridPlacedItem, layout_grid};
