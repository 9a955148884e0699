//! Grid layout request assembly.
//!
//! Translates computed styles into `css_grid` inputs, runs the layout, and
//! drives the percentage re-resolution pass: percentage tracks in an
//! indefinite axis behave as `auto` first, then the axis is re-run as
//! definite at the content-derived size.

use css_core::{AvailableSpace, AvailableSpace2, Measure, NodeKey, Rect, Size};
use css_grid::{
    GridContainerInputs, GridItem, GridLayoutResult, GridTrackSize, TrackBreadth, layout_grid,
};
use tracing::debug;

use crate::resolve_size;
use crate::style_model::{ComputedStyle, ContainerStyle};

pub(crate) struct GridOutcome {
    /// Rects aligned with the in-flow child list.
    pub(crate) rects: Vec<Rect>,
    pub(crate) content: Size,
    pub(crate) result: GridLayoutResult<NodeKey>,
}

fn has_percentage(tracks: &[GridTrackSize]) -> bool {
    tracks.iter().any(|size| {
        matches!(size.min_breadth(), TrackBreadth::Percentage(_))
            || matches!(size.max_breadth(), TrackBreadth::Percentage(_))
    })
}

fn build_item(
    node: NodeKey,
    style: &ComputedStyle,
    measure: &mut dyn Measure,
    available: AvailableSpace2,
) -> GridItem<NodeKey> {
    let report = measure.measure(node, available);
    let mut item = GridItem::new(node);
    item.row_start = style.grid_row_start.clone();
    item.row_end = style.grid_row_end.clone();
    item.column_start = style.grid_column_start.clone();
    item.column_end = style.grid_column_end.clone();
    item.area_name = style.grid_area.clone();
    item.min_content_width = report.min_content.width;
    item.max_content_width = report.max_content.width.max(report.preferred.width);
    item.min_content_height = report.min_content.height;
    item.max_content_height = report.max_content.height.max(report.preferred.height);
    item.preferred_width = resolve_size(style.width, style.width_percent, available.width.definite());
    item.preferred_height =
        resolve_size(style.height, style.height_percent, available.height.definite());
    item.min_width = style.min_width;
    item.max_width = style.max_width;
    item.min_height = style.min_height;
    item.max_height = style.max_height;
    item.aspect_ratio = style.aspect_ratio;
    item.justify_self = style.justify_self;
    item.align_self = style.align_self;
    item
}

fn run_once(
    container: &ContainerStyle,
    in_flow: &[(NodeKey, &ComputedStyle)],
    measure: &mut dyn Measure,
    available_width: AvailableSpace,
    available_height: AvailableSpace,
) -> GridOutcome {
    let available = AvailableSpace2 {
        width: available_width,
        height: available_height,
    };
    let items: Vec<GridItem<NodeKey>> = in_flow
        .iter()
        .map(|&(node, style)| build_item(node, style, measure, available))
        .collect();
    let inputs = GridContainerInputs {
        template_rows: container.template_rows.clone(),
        template_columns: container.template_columns.clone(),
        auto_rows: container.auto_rows.clone(),
        auto_columns: container.auto_columns.clone(),
        auto_flow: container.auto_flow,
        row_gap: container.row_gap.max(0.0),
        column_gap: container.column_gap.max(0.0),
        available_width,
        available_height,
        justify_content: container.justify_content,
        align_content: container.align_content,
        justify_items: container.justify_items,
        align_items: container.align_items,
        row_names: container.row_names.clone(),
        column_names: container.column_names.clone(),
        areas: container.areas.clone(),
    };
    let result = layout_grid(&items, &inputs);
    GridOutcome {
        rects: result.items.iter().map(|item| item.rect).collect(),
        content: Size::new(result.content_width, result.content_height),
        result,
    }
}

pub(crate) fn run_grid(
    container: &ContainerStyle,
    in_flow: &[(NodeKey, &ComputedStyle)],
    measure: &mut dyn Measure,
) -> GridOutcome {
    let first = run_once(
        container,
        in_flow,
        measure,
        container.available_width,
        container.available_height,
    );

    // Percentage tracks in an indefinite axis resolved as auto above; once
    // the content determines the axis, one explicit re-run makes them
    // definite. At most two passes.
    let retry_width = !container.available_width.is_definite()
        && (has_percentage(&container.template_columns)
            || has_percentage(&container.auto_columns));
    let retry_height = !container.available_height.is_definite()
        && (has_percentage(&container.template_rows) || has_percentage(&container.auto_rows));
    if !(retry_width || retry_height) {
        return first;
    }

    let width = if retry_width {
        AvailableSpace::Definite(first.content.width)
    } else {
        container.available_width
    };
    let height = if retry_height {
        AvailableSpace::Definite(first.content.height)
    } else {
        container.available_height
    };
    debug!(
        target: "css::orchestrator",
        "percentage re-resolution pass at {width:?} x {height:?}"
    );
    run_once(container, in_flow, measure, width, height)
}
