//! Flex container layout.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>

use css_align::{ContentAlignment, ContentDistribution, ItemAlignment, distribute_content};
use css_core::{AvailableSpace, Rect, quantize_layout};
use log::debug;

use crate::cross::{line_cross_size, place_in_line};
use crate::lines::break_into_lines;
use crate::resolve::resolve_flexible_lengths;
use crate::types::{FlexDirection, FlexItem, FlexWrap};

/// Container-level inputs, already mapped to main/cross axes.
#[derive(Clone, Debug, Default)]
pub struct FlexContainerInputs {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub main_gap: f32,
    pub cross_gap: f32,
    pub available_main: AvailableSpace,
    pub available_cross: AvailableSpace,
    pub justify_content: ContentAlignment,
    pub align_content: ContentAlignment,
    pub align_items: ItemAlignment,
}

/// One laid-out flex item.
#[derive(Clone, Debug)]
pub struct FlexPlacedItem<NodeId> {
    pub node_id: NodeId,
    /// Border-box rectangle relative to the container's content box, in
    /// physical x/y coordinates.
    pub rect: Rect,
}

/// The laid-out flex container.
#[derive(Clone, Debug)]
pub struct FlexLayoutResult<NodeId> {
    /// Items in the original input order.
    pub items: Vec<FlexPlacedItem<NodeId>>,
    pub content_width: f32,
    pub content_height: f32,
    pub line_count: usize,
}

/// Lay out a flex container's items.
///
/// Items are reordered by the `order` property (stable, so ties keep
/// document order), broken into lines, flexed, and aligned. The result maps
/// main/cross positions back to x/y according to the direction.
pub fn layout_flex<NodeId: Clone>(
    items: &[FlexItem<NodeId>],
    inputs: &FlexContainerInputs,
) -> FlexLayoutResult<NodeId> {
    if items.is_empty() {
        return FlexLayoutResult {
            items: Vec::new(),
            content_width: 0.0,
            content_height: 0.0,
            line_count: 0,
        };
    }

    // Modified document order: stable sort by `order`.
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by_key(|&index| items[index].order);
    let sorted: Vec<FlexItem<NodeId>> = order.iter().map(|&index| items[index].clone()).collect();

    let main_limit = inputs.available_main.definite();
    let cross_limit = inputs.available_cross.definite();
    let lines = break_into_lines(&sorted, inputs.wrap, main_limit, inputs.main_gap);

    // Flex each line, then find its cross size.
    let line_main_sizes: Vec<Vec<f32>> = lines
        .iter()
        .map(|line| resolve_flexible_lengths(&sorted[line.clone()], main_limit, inputs.main_gap))
        .collect();
    let mut line_crosses: Vec<f32> = lines
        .iter()
        .zip(&line_main_sizes)
        .map(|(line, sizes)| line_cross_size(&sorted[line.clone()], sizes, inputs.direction))
        .collect();

    // A single-line container's line fills the definite cross size.
    if !inputs.wrap.is_wrapped()
        && let Some(cross) = cross_limit
        && let Some(only) = line_crosses.first_mut()
    {
        *only = cross;
    }

    // align-content: stretch grows lines equally; the other keywords space
    // them.
    let line_count = lines.len();
    let lines_extent = |crosses: &[f32]| {
        crosses.iter().sum::<f32>() + inputs.cross_gap * (line_count - 1) as f32
    };
    if let Some(cross) = cross_limit
        && inputs.align_content.normalized() == ContentAlignment::Stretch
    {
        let free = cross - lines_extent(&line_crosses);
        if free > 0.0 {
            let share = free / line_count as f32;
            for line_cross in &mut line_crosses {
                *line_cross += share;
            }
        }
    }
    let cross_distribution = cross_limit.map_or_else(ContentDistribution::default, |cross| {
        distribute_content(
            inputs.align_content,
            cross - lines_extent(&line_crosses),
            line_count,
        )
    });

    // Cross offsets per line, wrap-reverse stacking lines backwards.
    let mut line_offsets = Vec::with_capacity(line_count);
    let mut cross_cursor = cross_distribution.leading;
    for &line_cross in &line_crosses {
        line_offsets.push(cross_cursor);
        cross_cursor += line_cross + inputs.cross_gap + cross_distribution.between;
    }
    if inputs.wrap.is_reverse() {
        let total = cross_limit.unwrap_or_else(|| lines_extent(&line_crosses));
        for (offset, &line_cross) in line_offsets.iter_mut().zip(&line_crosses) {
            *offset = total - *offset - line_cross;
        }
    }

    let content_cross = lines_extent(&line_crosses);
    let mut content_main = 0.0_f32;
    let mut placed: Vec<Option<FlexPlacedItem<NodeId>>> = vec![None; items.len()];

    for (line_index, line) in lines.iter().enumerate() {
        let line_items = &sorted[line.clone()];
        let main_sizes = &line_main_sizes[line_index];
        let gaps = inputs.main_gap * (line_items.len() - 1) as f32;
        let outer_total: f32 = line_items
            .iter()
            .zip(main_sizes)
            .map(|(item, &main)| main + item.main_margins())
            .sum::<f32>()
            + gaps;
        content_main = content_main.max(outer_total);

        // Auto main margins absorb all positive free space before
        // justify-content gets any.
        let free = main_limit.map_or(0.0, |limit| limit - outer_total);
        let auto_margins: usize = line_items
            .iter()
            .map(|item| {
                usize::from(item.margin_main_start.is_none())
                    + usize::from(item.margin_main_end.is_none())
            })
            .sum();
        let (auto_share, distribution) = if auto_margins > 0 && free > 0.0 {
            (free / auto_margins as f32, ContentDistribution::default())
        } else {
            (
                0.0,
                distribute_content(inputs.justify_content, free, line_items.len()),
            )
        };

        let line_extent = main_limit.unwrap_or(outer_total);
        let mut cursor = distribution.leading;
        for (offset_in_line, (item, &main_size)) in
            line_items.iter().zip(main_sizes).enumerate()
        {
            let margin_start = item.margin_main_start.unwrap_or(auto_share);
            let margin_end = item.margin_main_end.unwrap_or(auto_share);
            let mut main_pos = cursor + margin_start;
            cursor = main_pos + main_size + margin_end + inputs.main_gap + distribution.between;

            // Reverse directions flip positions within the line extent.
            if inputs.direction.is_reverse() {
                main_pos = line_extent - main_pos - main_size;
            }

            let cross = place_in_line(
                item,
                main_size,
                line_crosses[line_index],
                inputs.align_items,
                inputs.direction,
            );
            let cross_pos = line_offsets[line_index] + cross.offset;

            let rect = if inputs.direction.is_row() {
                Rect::new(
                    quantize_layout(main_pos),
                    quantize_layout(cross_pos),
                    quantize_layout(main_size),
                    quantize_layout(cross.size),
                )
            } else {
                Rect::new(
                    quantize_layout(cross_pos),
                    quantize_layout(main_pos),
                    quantize_layout(cross.size),
                    quantize_layout(main_size),
                )
            };
            let original = order[line.start + offset_in_line];
            placed[original] = Some(FlexPlacedItem {
                node_id: item.node_id.clone(),
                rect,
            });
        }
    }

    let items_out: Vec<FlexPlacedItem<NodeId>> = placed.into_iter().flatten().collect();
    let (content_width, content_height) = if inputs.direction.is_row() {
        (content_main, content_cross)
    } else {
        (content_cross, content_main)
    };
    debug!(
        target: "css::flexbox",
        "[LAYOUT] {} items in {line_count} lines, content {content_width:.1}x{content_height:.1}",
        items_out.len()
    );
    FlexLayoutResult {
        items: items_out,
        content_width,
        content_height,
        line_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 0.5;

    fn row_container(width: f32) -> FlexContainerInputs {
        FlexContainerInputs {
            available_main: AvailableSpace::Definite(width),
            available_cross: AvailableSpace::Definite(100.0),
            ..FlexContainerInputs::default()
        }
    }

    fn item(basis: f32, grow: f32) -> FlexItem<u32> {
        let mut item = FlexItem::new(0);
        item.flex_basis = Some(basis);
        item.flex_grow = grow;
        item.preferred_cross = Some(20.0);
        item
    }

    #[test]
    /// # Panics
    /// Panics if a grown row does not fill the container exactly.
    fn grown_row_fills_container() {
        let items = [item(100.0, 1.0), item(100.0, 1.0)];
        let result = layout_flex(&items, &row_container(400.0));
        assert!((result.items[0].rect.width - 200.0).abs() < EPS);
        assert!((result.items[1].rect.x - 200.0).abs() < EPS);
        assert!((result.items[1].rect.width - 200.0).abs() < EPS);
    }

    #[test]
    /// # Panics
    /// Panics if wrapped line extents exceed the container main size.
    fn wrapped_lines_fit_container() {
        let mut inputs = row_container(250.0);
        inputs.wrap = FlexWrap::Wrap;
        let items = [item(100.0, 0.0), item(100.0, 0.0), item(100.0, 0.0)];
        let result = layout_flex(&items, &inputs);
        assert_eq!(result.line_count, 2);
        // Third item wraps to the second line.
        assert!((result.items[2].rect.x).abs() < EPS);
        assert!(result.items[2].rect.y > result.items[0].rect.y);
        assert!(result.content_width <= 250.0 + EPS);
    }

    #[test]
    /// # Panics
    /// Panics if the order property does not reorder items while ties keep
    /// document order.
    fn order_property_reorders() {
        let mut first = item(50.0, 0.0);
        first.order = 1;
        first.node_id = 10;
        let mut second = item(50.0, 0.0);
        second.order = -1;
        second.node_id = 20;
        let mut third = item(50.0, 0.0);
        third.order = 1;
        third.node_id = 30;
        let result = layout_flex(&[first, second, third], &row_container(300.0));
        // second lays out first, then first and third in document order.
        assert!((result.items[1].rect.x).abs() < EPS);
        assert!((result.items[0].rect.x - 50.0).abs() < EPS);
        assert!((result.items[2].rect.x - 100.0).abs() < EPS);
    }

    #[test]
    /// # Panics
    /// Panics if row-reverse does not flip main positions.
    fn row_reverse_flips_positions() {
        let mut inputs = row_container(300.0);
        inputs.direction = FlexDirection::RowReverse;
        let items = [item(100.0, 0.0), item(100.0, 0.0)];
        let result = layout_flex(&items, &inputs);
        // First item sits at the right edge.
        assert!((result.items[0].rect.x - 200.0).abs() < EPS);
        assert!((result.items[1].rect.x - 100.0).abs() < EPS);
    }

    #[test]
    /// # Panics
    /// Panics if column direction does not lay out along the y axis.
    fn column_direction_stacks_vertically() {
        let inputs = FlexContainerInputs {
            direction: FlexDirection::Column,
            available_main: AvailableSpace::Definite(300.0),
            available_cross: AvailableSpace::Definite(100.0),
            ..FlexContainerInputs::default()
        };
        let items = [item(80.0, 0.0), item(80.0, 0.0)];
        let result = layout_flex(&items, &inputs);
        assert!((result.items[0].rect.y).abs() < EPS);
        assert!((result.items[0].rect.height - 80.0).abs() < EPS);
        assert!((result.items[1].rect.y - 80.0).abs() < EPS);
    }

    #[test]
    /// # Panics
    /// Panics if auto main margins do not absorb the free space before
    /// justify-content.
    fn auto_margins_absorb_free_space() {
        let mut inputs = row_container(300.0);
        inputs.justify_content = ContentAlignment::End;
        let mut centered = item(100.0, 0.0);
        centered.margin_main_start = None;
        centered.margin_main_end = None;
        let result = layout_flex(&[centered], &inputs);
        // Both auto margins split the 200px free space; End never applies.
        assert!((result.items[0].rect.x - 100.0).abs() < EPS);
    }

    #[test]
    /// # Panics
    /// Panics if justify-content center does not center the line.
    fn justify_center_centers_line() {
        let mut inputs = row_container(300.0);
        inputs.justify_content = ContentAlignment::Center;
        let items = [item(50.0, 0.0), item(50.0, 0.0)];
        let result = layout_flex(&items, &inputs);
        assert!((result.items[0].rect.x - 100.0).abs() < EPS);
        assert!((result.items[1].rect.x - 150.0).abs() < EPS);
    }

    #[test]
    /// # Panics
    /// Panics if main-axis gaps do not separate items.
    fn main_gap_separates_items() {
        let mut inputs = row_container(300.0);
        inputs.main_gap = 20.0;
        let items = [item(50.0, 0.0), item(50.0, 0.0)];
        let result = layout_flex(&items, &inputs);
        assert!((result.items[1].rect.x - 70.0).abs() < EPS);
        assert!((result.content_width - 120.0).abs() < EPS);
    }
}
