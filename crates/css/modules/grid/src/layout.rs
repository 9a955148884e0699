//! Grid container layout: placement, track sizing in both axes, and item
//! alignment within resolved areas.
//! Spec: <https://www.w3.org/TR/css-grid-2/#layout-algorithm>

use css_align::{
    ContentAlignment, ItemAlignment, align_item, distribute_content, resolve_self_alignment,
};
use css_core::{AvailableSpace, Rect, quantize_layout};
use log::debug;

use crate::placement::{GridArea, NamedLines, PlacementInputs, TemplateAreas, place_grid_items};
use crate::track_sizing::{
    GridAxis, ResolvedTrackSizes, TrackSizingInputs, resolve_track_sizes,
};
use crate::types::{GridAutoFlow, GridItem, GridTrack, GridTrackSize, TrackBreadth};

/// Container-level inputs for grid layout.
#[derive(Clone, Debug, Default)]
pub struct GridContainerInputs {
    pub template_rows: Vec<GridTrackSize>,
    pub template_columns: Vec<GridTrackSize>,
    /// Sizes cycled for implicit rows created by placement.
    pub auto_rows: Vec<GridTrackSize>,
    pub auto_columns: Vec<GridTrackSize>,
    pub auto_flow: GridAutoFlow,
    pub row_gap: f32,
    pub column_gap: f32,
    pub available_width: AvailableSpace,
    pub available_height: AvailableSpace,
    pub justify_content: ContentAlignment,
    pub align_content: ContentAlignment,
    pub justify_items: ItemAlignment,
    pub align_items: ItemAlignment,
    pub row_names: NamedLines,
    pub column_names: NamedLines,
    pub areas: Option<TemplateAreas>,
}

/// One laid-out grid item.
#[derive(Clone, Debug)]
pub struct GridPlacedItem<NodeId> {
    pub node_id: NodeId,
    /// Border-box rectangle relative to the container's content box.
    pub rect: Rect,
    /// The resolved grid area the item was aligned within.
    pub area: GridArea,
}

/// The laid-out grid.
#[derive(Clone, Debug)]
pub struct GridLayoutResult<NodeId> {
    pub items: Vec<GridPlacedItem<NodeId>>,
    /// Extent of all column tracks plus gutters.
    pub content_width: f32,
    pub content_height: f32,
    pub column_sizes: ResolvedTrackSizes,
    pub row_sizes: ResolvedTrackSizes,
    /// Start offset of each column track, gutters and content distribution
    /// included.
    pub column_offsets: Vec<f32>,
    pub row_offsets: Vec<f32>,
}

impl<NodeId> GridLayoutResult<NodeId> {
    /// The rectangle covered by `area`, gutters inside the span included.
    pub fn area_rect(&self, area: &GridArea) -> Rect {
        let (x, width) = span_extent(
            &self.column_offsets,
            &self.column_sizes,
            area.column_start - 1..area.column_end - 1,
        );
        let (y, height) = span_extent(
            &self.row_offsets,
            &self.row_sizes,
            area.row_start - 1..area.row_end - 1,
        );
        Rect::new(x, y, width, height)
    }
}

/// Assemble the full track list for one axis: explicit template tracks
/// (padded with `auto` when template areas imply more), then implicit tracks
/// cycling the `grid-auto-*` sizes.
fn build_tracks(
    template: &[GridTrackSize],
    explicit_count: usize,
    auto_sizes: &[GridTrackSize],
    total: usize,
) -> Vec<GridTrack> {
    let mut tracks: Vec<GridTrack> = template
        .iter()
        .map(|&size| GridTrack::explicit(size))
        .collect();
    while tracks.len() < explicit_count {
        tracks.push(GridTrack::explicit(GridTrackSize::Breadth(
            TrackBreadth::Auto,
        )));
    }
    while tracks.len() < total {
        let size = if auto_sizes.is_empty() {
            GridTrackSize::Breadth(TrackBreadth::Auto)
        } else {
            auto_sizes[(tracks.len() - explicit_count) % auto_sizes.len()]
        };
        tracks.push(GridTrack::implicit(size));
    }
    tracks
}

/// Cumulative track start offsets, including gutters and content
/// distribution spacing.
fn track_offsets(
    sizes: &ResolvedTrackSizes,
    gap: f32,
    available: AvailableSpace,
    alignment: ContentAlignment,
) -> Vec<f32> {
    let count = sizes.len();
    let distribution = match available.definite() {
        Some(basis) => distribute_content(alignment, basis - sizes.total(gap), count),
        None => css_align::ContentDistribution::default(),
    };
    let mut offsets = Vec::with_capacity(count);
    let mut cursor = distribution.leading;
    for &size in &sizes.base_sizes {
        offsets.push(cursor);
        cursor += size + gap + distribution.between;
    }
    offsets
}

/// The extent covered by the tracks `range` spans, gutters included.
fn span_extent(offsets: &[f32], sizes: &ResolvedTrackSizes, range: std::ops::Range<usize>) -> (f32, f32) {
    if range.is_empty() || range.end > offsets.len() {
        return (0.0, 0.0);
    }
    let start = offsets[range.start];
    let end = offsets[range.end - 1] + sizes.base_sizes[range.end - 1];
    (start, end - start)
}

/// Lay out a grid container's items.
///
/// Content measurement happens upstream: each item carries its content
/// contributions and preferred sizes. The result is deterministic for
/// identical inputs.
pub fn layout_grid<NodeId: Clone>(
    items: &[GridItem<NodeId>],
    inputs: &GridContainerInputs,
) -> GridLayoutResult<NodeId> {
    let explicit_rows = inputs
        .template_rows
        .len()
        .max(inputs.areas.as_ref().map_or(0, TemplateAreas::row_count));
    let explicit_columns = inputs
        .template_columns
        .len()
        .max(inputs.areas.as_ref().map_or(0, TemplateAreas::column_count));

    let placement = place_grid_items(
        items,
        &PlacementInputs {
            explicit_rows,
            explicit_columns,
            row_names: inputs.row_names.clone(),
            column_names: inputs.column_names.clone(),
            areas: inputs.areas.clone(),
            auto_flow: inputs.auto_flow,
        },
    );

    let column_tracks = build_tracks(
        &inputs.template_columns,
        explicit_columns,
        &inputs.auto_columns,
        placement.column_count,
    );
    let row_tracks = build_tracks(
        &inputs.template_rows,
        explicit_rows,
        &inputs.auto_rows,
        placement.row_count,
    );

    let column_sizes = resolve_track_sizes(&TrackSizingInputs {
        tracks: &column_tracks,
        items,
        placements: &placement.areas,
        axis: GridAxis::Column,
        gap: inputs.column_gap,
        available: inputs.available_width,
        alignment: inputs.justify_content,
    });
    let row_sizes = resolve_track_sizes(&TrackSizingInputs {
        tracks: &row_tracks,
        items,
        placements: &placement.areas,
        axis: GridAxis::Row,
        gap: inputs.row_gap,
        available: inputs.available_height,
        alignment: inputs.align_content,
    });

    let column_offsets = track_offsets(
        &column_sizes,
        inputs.column_gap,
        inputs.available_width,
        inputs.justify_content,
    );
    let row_offsets = track_offsets(
        &row_sizes,
        inputs.row_gap,
        inputs.available_height,
        inputs.align_content,
    );

    let placed = items
        .iter()
        .zip(&placement.areas)
        .map(|(item, area)| {
            let (cell_x, cell_width) = span_extent(
                &column_offsets,
                &column_sizes,
                area.column_start - 1..area.column_end - 1,
            );
            let (cell_y, cell_height) = span_extent(
                &row_offsets,
                &row_sizes,
                area.row_start - 1..area.row_end - 1,
            );

            let justify = resolve_self_alignment(item.justify_self, inputs.justify_items);
            let align = resolve_self_alignment(item.align_self, inputs.align_items);

            // Preferred sizes transfer through the aspect ratio when only
            // the opposite axis is definite.
            let preferred_width = item.preferred_width.or_else(|| {
                item.aspect_ratio
                    .zip(item.preferred_height)
                    .map(|(ratio, height)| ratio.width_for_height(height))
            });
            let horizontal = align_item(
                justify,
                cell_width,
                preferred_width,
                item.max_content_width,
                item.min_width.unwrap_or(0.0),
                item.max_width.unwrap_or(f32::INFINITY),
            );

            // The resolved width feeds the ratio before vertical alignment,
            // so a stretched width still yields a proportional height.
            let preferred_height = item.preferred_height.or_else(|| {
                item.aspect_ratio
                    .map(|ratio| ratio.height_for_width(horizontal.size))
            });
            let vertical = align_item(
                align,
                cell_height,
                preferred_height,
                item.max_content_height,
                item.min_height.unwrap_or(0.0),
                item.max_height.unwrap_or(f32::INFINITY),
            );

            GridPlacedItem {
                node_id: item.node_id.clone(),
                rect: Rect::new(
                    quantize_layout(cell_x + horizontal.offset),
                    quantize_layout(cell_y + vertical.offset),
                    quantize_layout(horizontal.size),
                    quantize_layout(vertical.size),
                ),
                area: *area,
            }
        })
        .collect();

    let content_width = column_sizes.total(inputs.column_gap);
    let content_height = row_sizes.total(inputs.row_gap);
    debug!(
        target: "css::grid",
        "[LAYOUT] {} items, content {content_width:.1}x{content_height:.1}",
        items.len()
    );
    GridLayoutResult {
        items: placed,
        content_width,
        content_height,
        column_sizes,
        row_sizes,
        column_offsets,
        row_offsets,
    }
}
