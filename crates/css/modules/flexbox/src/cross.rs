//! Cross sizing and per-line cross alignment.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#cross-sizing>

use css_align::{ItemAlignment, align_item, resolve_self_alignment};
use css_sizing::clamp_size;

use crate::types::{FlexDirection, FlexItem};

/// An item's hypothetical cross size given its resolved main size.
///
/// The aspect ratio is stored in width/height terms, so a row container
/// derives height from the main (width) size and a column container derives
/// width.
pub(crate) fn hypothetical_cross<NodeId>(
    item: &FlexItem<NodeId>,
    main_size: f32,
    direction: FlexDirection,
) -> f32 {
    let preferred = item.preferred_cross.or_else(|| {
        item.aspect_ratio.map(|ratio| {
            if direction.is_row() {
                ratio.height_for_width(main_size)
            } else {
                ratio.width_for_height(main_size)
            }
        })
    });
    clamp_size(
        preferred.unwrap_or(item.max_content_cross),
        item.min_cross,
        item.max_cross,
    )
}

/// The cross size of one line: the largest outer hypothetical cross size of
/// its items.
pub(crate) fn line_cross_size<NodeId>(
    items: &[FlexItem<NodeId>],
    main_sizes: &[f32],
    direction: FlexDirection,
) -> f32 {
    items
        .iter()
        .zip(main_sizes)
        .map(|(item, &main)| hypothetical_cross(item, main, direction) + item.cross_margins())
        .fold(0.0, f32::max)
}

/// Resolved cross placement of one item within its line.
pub(crate) struct CrossPlacement {
    /// Border-box offset from the line's cross start.
    pub(crate) offset: f32,
    pub(crate) size: f32,
}

/// Place one item in the cross axis of its line. Auto cross margins absorb
/// the line's free space before any alignment keyword applies.
pub(crate) fn place_in_line<NodeId>(
    item: &FlexItem<NodeId>,
    main_size: f32,
    line_cross: f32,
    align_items: ItemAlignment,
    direction: FlexDirection,
) -> CrossPlacement {
    let size = hypothetical_cross(item, main_size, direction);

    if item.has_auto_cross_margin() {
        let free = (line_cross - size - item.cross_margins()).max(0.0);
        let offset = match (item.margin_cross_start, item.margin_cross_end) {
            (None, None) => free * 0.5,
            // Auto start margin pushes the item to the cross end.
            (None, Some(_)) => free,
            (Some(start), _) => start,
        };
        return CrossPlacement { offset, size };
    }

    let alignment = resolve_self_alignment(item.align_self, align_items);
    // A ratio-derived cross size counts as definite and is not stretched.
    let definite_cross = item.preferred_cross.or_else(|| {
        item.aspect_ratio.map(|ratio| {
            if direction.is_row() {
                ratio.height_for_width(main_size)
            } else {
                ratio.width_for_height(main_size)
            }
        })
    });
    let placement = align_item(
        alignment,
        line_cross - item.cross_margins(),
        definite_cross,
        item.max_content_cross,
        item.min_cross.unwrap_or(0.0),
        item.max_cross.unwrap_or(f32::INFINITY),
    );
    CrossPlacement {
        offset: item.margin_cross_start.unwrap_or(0.0) + placement.offset,
        size: placement.size,
    }
}
