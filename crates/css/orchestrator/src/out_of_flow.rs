//! Out-of-flow (absolutely positioned) children.
//!
//! An absolutely positioned child never occupies a track or flex line. Its
//! containing block is the resolved grid area when it carries a definite grid
//! placement in an axis, otherwise the container's content box.

use css_core::{AvailableSpace2, Measure, NodeKey, Point, Rect, Size};
use css_grid::{GridItem, GridLayoutResult, GridLine, PlacementInputs, place_grid_items};
use css_position::{AbsoluteBox, resolve_absolute};
use log::trace;

use crate::resolve_size;
use crate::style_model::{ComputedStyle, ContainerStyle};

/// Whether an axis of the child's grid placement pins it to real lines.
/// A bare `span` or `auto` leaves the axis anchored to the container.
const fn axis_pinned(start: &GridLine, end: &GridLine) -> bool {
    matches!(start, GridLine::Index(_) | GridLine::Named(_))
        || matches!(end, GridLine::Index(_) | GridLine::Named(_))
}

/// The containing block for one absolutely positioned child, in container
/// content-box coordinates.
fn containing_block(
    style: &ComputedStyle,
    container_box: Size,
    grid: Option<&GridLayoutResult<NodeKey>>,
    container: &ContainerStyle,
) -> Rect {
    let mut block = Rect::new(0.0, 0.0, container_box.width, container_box.height);
    let Some(grid) = grid else {
        return block;
    };

    let area_defined = style
        .grid_area
        .as_ref()
        .and_then(|name| container.areas.as_ref().and_then(|areas| areas.area(name)))
        .is_some();
    let columns_pinned =
        area_defined || axis_pinned(&style.grid_column_start, &style.grid_column_end);
    let rows_pinned = area_defined || axis_pinned(&style.grid_row_start, &style.grid_row_end);
    if !columns_pinned && !rows_pinned {
        return block;
    }

    // Resolve the placement the same way in-flow items do, then take only
    // the pinned axes; the other axis stays at the container edges.
    let mut item = GridItem::new(NodeKey(0));
    item.row_start = style.grid_row_start.clone();
    item.row_end = style.grid_row_end.clone();
    item.column_start = style.grid_column_start.clone();
    item.column_end = style.grid_column_end.clone();
    item.area_name = style.grid_area.clone();
    let placement = place_grid_items(
        &[item],
        &PlacementInputs {
            explicit_rows: container
                .template_rows
                .len()
                .max(container.areas.as_ref().map_or(0, |areas| areas.row_count())),
            explicit_columns: container.template_columns.len().max(
                container
                    .areas
                    .as_ref()
                    .map_or(0, |areas| areas.column_count()),
            ),
            row_names: container.row_names.clone(),
            column_names: container.column_names.clone(),
            areas: container.areas.clone(),
            auto_flow: container.auto_flow,
        },
    );
    let area = placement.areas[0];
    let area_rect = grid.area_rect(&area);

    if columns_pinned && area.column_end - 1 <= grid.column_offsets.len() {
        block.x = area_rect.x;
        block.width = area_rect.width;
    }
    if rows_pinned && area.row_end - 1 <= grid.row_offsets.len() {
        block.y = area_rect.y;
        block.height = area_rect.height;
    }
    trace!(target: "css::orchestrator", "abspos containing block {block:?}");
    block
}

/// Resolve one absolutely positioned child to its border-box rect in
/// container coordinates.
pub(crate) fn resolve(
    node: NodeKey,
    style: &ComputedStyle,
    container_box: Size,
    grid: Option<&GridLayoutResult<NodeKey>>,
    container: &ContainerStyle,
    measure: &mut dyn Measure,
) -> Rect {
    let block = containing_block(style, container_box, grid, container);
    let report = measure.measure(node, AvailableSpace2::indefinite());

    let item = AbsoluteBox {
        inset_left: resolve_size(style.left, style.left_percent, Some(block.width)),
        inset_right: resolve_size(style.right, style.right_percent, Some(block.width)),
        inset_top: resolve_size(style.top, style.top_percent, Some(block.height)),
        inset_bottom: resolve_size(style.bottom, style.bottom_percent, Some(block.height)),
        width: resolve_size(style.width, style.width_percent, Some(block.width)),
        height: resolve_size(style.height, style.height_percent, Some(block.height)),
        min_width: style.min_width,
        max_width: style.max_width,
        min_height: style.min_height,
        max_height: style.max_height,
        max_content_width: report.max_content.width.max(report.preferred.width),
        max_content_height: report.max_content.height.max(report.preferred.height),
        aspect_ratio: style.aspect_ratio,
        // Static position: the containing block's start edge.
        static_position: Point::default(),
    };
    resolve_absolute(block, &item)
}
