//! Flex layout request assembly: maps width/height styles onto the main and
//! cross axes of the container's direction before handing off to
//! `css_flexbox`.

use css_core::{AvailableSpace2, Measure, NodeKey, Rect, Size};
use css_flexbox::{FlexContainerInputs, FlexItem, layout_flex};

use crate::resolve_size;
use crate::style_model::{ComputedStyle, ContainerStyle};

pub(crate) struct FlexOutcome {
    /// Rects aligned with the in-flow child list.
    pub(crate) rects: Vec<Rect>,
    pub(crate) content: Size,
}

fn build_item(
    node: NodeKey,
    style: &ComputedStyle,
    container: &ContainerStyle,
    measure: &mut dyn Measure,
) -> FlexItem<NodeKey> {
    let is_row = container.direction.is_row();
    let available = AvailableSpace2 {
        width: container.available_width,
        height: container.available_height,
    };
    let report = measure.measure(node, available);

    let preferred_width =
        resolve_size(style.width, style.width_percent, available.width.definite());
    let preferred_height =
        resolve_size(style.height, style.height_percent, available.height.definite());
    let max_content_width = report.max_content.width.max(report.preferred.width);
    let max_content_height = report.max_content.height.max(report.preferred.height);

    let mut item = FlexItem::new(node);
    item.order = style.order;
    // Negative flex factors normalize to zero.
    item.flex_grow = style.flex_grow.max(0.0);
    item.flex_shrink = style.flex_shrink.max(0.0);
    let main_basis = if is_row {
        container.available_width.definite()
    } else {
        container.available_height.definite()
    };
    item.flex_basis = resolve_size(style.flex_basis, style.flex_basis_percent, main_basis);
    item.aspect_ratio = style.aspect_ratio;
    item.align_self = style.align_self;

    if is_row {
        item.preferred_main = preferred_width;
        item.preferred_cross = preferred_height;
        item.min_main = style.min_width;
        item.max_main = style.max_width;
        item.min_cross = style.min_height;
        item.max_cross = style.max_height;
        item.min_content_main = report.min_content.width;
        item.max_content_main = max_content_width;
        item.max_content_cross = max_content_height;
    } else {
        item.preferred_main = preferred_height;
        item.preferred_cross = preferred_width;
        item.min_main = style.min_height;
        item.max_main = style.max_height;
        item.min_cross = style.min_width;
        item.max_cross = style.max_width;
        item.min_content_main = report.min_content.height;
        item.max_content_main = max_content_height;
        item.max_content_cross = max_content_width;
    }

    // Physical margins map onto the main/cross axes; reverse directions swap
    // the main-axis ends so margin-left still hugs the left edge.
    let (main_start, main_end) = if is_row {
        (style.margin_left, style.margin_right)
    } else {
        (style.margin_top, style.margin_bottom)
    };
    let (main_start, main_end) = if container.direction.is_reverse() {
        (main_end, main_start)
    } else {
        (main_start, main_end)
    };
    let (cross_start, cross_end) = if is_row {
        (style.margin_top, style.margin_bottom)
    } else {
        (style.margin_left, style.margin_right)
    };
    item.margin_main_start = main_start;
    item.margin_main_end = main_end;
    item.margin_cross_start = cross_start;
    item.margin_cross_end = cross_end;
    item
}

pub(crate) fn run_flex(
    container: &ContainerStyle,
    in_flow: &[(NodeKey, &ComputedStyle)],
    measure: &mut dyn Measure,
) -> FlexOutcome {
    let is_row = container.direction.is_row();
    let items: Vec<FlexItem<NodeKey>> = in_flow
        .iter()
        .map(|&(node, style)| build_item(node, style, container, measure))
        .collect();

    let (available_main, available_cross) = if is_row {
        (container.available_width, container.available_height)
    } else {
        (container.available_height, container.available_width)
    };
    // The column-gap property separates items along the inline axis.
    let (main_gap, cross_gap) = if is_row {
        (container.column_gap, container.row_gap)
    } else {
        (container.row_gap, container.column_gap)
    };
    let inputs = FlexContainerInputs {
        direction: container.direction,
        wrap: container.wrap,
        main_gap: main_gap.max(0.0),
        cross_gap: cross_gap.max(0.0),
        available_main,
        available_cross,
        justify_content: container.justify_content,
        align_content: container.align_content,
        align_items: container.align_items,
    };
    let result = layout_flex(&items, &inputs);
    FlexOutcome {
        rects: result.items.iter().map(|item| item.rect).collect(),
        content: Size::new(result.content_width, result.content_height),
    }
}
