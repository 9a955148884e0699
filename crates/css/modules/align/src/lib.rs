//! CSS Box Alignment Module Level 3 — distribution and item alignment.
//! Spec: <https://www.w3.org/TR/css-align-3/>
//!
//! Shared by the Grid and Flex formatting contexts: content distribution
//! (`justify-content`/`align-content`) and per-item alignment
//! (`justify-items`/`align-items` with `*-self` overrides) both live here as
//! pure functions over free space, so neither layout engine carries its own
//! spacing arithmetic.

use css_core::{quantize_layout, quantize_layout_floor};
use log::debug;

/// Content-distribution keywords (`justify-content` / `align-content`).
///
/// Spec: <https://www.w3.org/TR/css-align-3/#content-distribution>
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum ContentAlignment {
    #[default]
    Start,
    End,
    Center,
    Stretch,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    /// Legacy flexbox alias for `Start`.
    FlexStart,
    /// Legacy flexbox alias for `End`.
    FlexEnd,
}

impl ContentAlignment {
    /// Collapse the legacy `flex-start`/`flex-end` aliases.
    pub const fn normalized(self) -> Self {
        match self {
            Self::FlexStart => Self::Start,
            Self::FlexEnd => Self::End,
            other => other,
        }
    }
}

/// Self/items alignment keywords (`align-items`, `justify-items`, `*-self`).
///
/// Spec: <https://www.w3.org/TR/css-align-3/#self-alignment>
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum ItemAlignment {
    Start,
    End,
    Center,
    #[default]
    Stretch,
    /// Legacy flexbox alias for `Start`.
    FlexStart,
    /// Legacy flexbox alias for `End`.
    FlexEnd,
}

impl ItemAlignment {
    /// Collapse the legacy `flex-start`/`flex-end` aliases.
    pub const fn normalized(self) -> Self {
        match self {
            Self::FlexStart => Self::Start,
            Self::FlexEnd => Self::End,
            other => other,
        }
    }
}

/// Resolved content distribution: where the first participant starts and how
/// much extra spacing separates adjacent participants (excluding CSS gap).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ContentDistribution {
    /// Offset of the first participant from the start edge.
    pub leading: f32,
    /// Extra spacing between adjacent participants.
    pub between: f32,
}

/// Distribute `free_space` among `count` participants per `alignment`.
///
/// Spec: <https://www.w3.org/TR/css-align-3/#distribution-values>
///
/// Behavior:
/// - Negative free space degenerates every `space-*` keyword to `Start`.
/// - `SpaceBetween` with a single participant degenerates to `Start`.
/// - `Stretch` distributes no spacing here; participant growth is the
///   caller's concern (tracks or line boxes grow, not gaps).
/// - Leading offsets round to the layout unit; between-spacing rounds down so
///   accumulation never overshoots the container.
pub fn distribute_content(
    alignment: ContentAlignment,
    free_space: f32,
    count: usize,
) -> ContentDistribution {
    let remaining = free_space.max(0.0);
    let (leading, between) = match (alignment.normalized(), count) {
        (_, 0) => (0.0, 0.0),
        (ContentAlignment::End, _) => (remaining, 0.0),
        (ContentAlignment::Center, _) => (remaining * 0.5, 0.0),
        (ContentAlignment::SpaceBetween, n) if n > 1 => (0.0, remaining / (n as f32 - 1.0)),
        (ContentAlignment::SpaceAround, n) if n > 0 => {
            (remaining / (n as f32 * 2.0), remaining / n as f32)
        }
        (ContentAlignment::SpaceEvenly, n) if n > 0 => {
            let slots = n as f32 + 1.0;
            (remaining / slots, remaining / slots)
        }
        // Start, Stretch, and the degenerate space-between case.
        _ => (0.0, 0.0),
    };
    debug!(
        target: "css::align",
        "[DISTRIBUTE] {alignment:?} free={free_space:.3} count={count} -> leading={leading:.3} between={between:.3}"
    );
    ContentDistribution {
        leading: quantize_layout(leading),
        between: quantize_layout_floor(between),
    }
}

/// Placement of one item inside an alignment extent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemPlacement {
    /// Offset from the extent's start edge.
    pub offset: f32,
    /// Resolved size along the aligned axis.
    pub size: f32,
}

/// Align one item inside `extent`.
///
/// `size` of `None` means the item's size is `auto` along this axis:
/// `Stretch` then fills the extent (clamped by `min`/`max`); every other
/// keyword falls back to `fallback_size`, the item's content-derived size.
///
/// Spec: <https://www.w3.org/TR/css-align-3/#align-justify-self>
pub fn align_item(
    alignment: ItemAlignment,
    extent: f32,
    size: Option<f32>,
    fallback_size: f32,
    min: f32,
    max: f32,
) -> ItemPlacement {
    let clamp = |value: f32| value.max(min).min(max.max(min));
    match alignment.normalized() {
        ItemAlignment::Stretch => {
            let resolved = size.map_or_else(|| clamp(extent), clamp);
            ItemPlacement {
                offset: 0.0,
                size: resolved,
            }
        }
        ItemAlignment::Start => ItemPlacement {
            offset: 0.0,
            size: clamp(size.unwrap_or(fallback_size)),
        },
        ItemAlignment::End => {
            let resolved = clamp(size.unwrap_or(fallback_size));
            ItemPlacement {
                offset: (extent - resolved).max(0.0),
                size: resolved,
            }
        }
        ItemAlignment::Center => {
            let resolved = clamp(size.unwrap_or(fallback_size));
            ItemPlacement {
                offset: ((extent - resolved) * 0.5).max(0.0),
                size: resolved,
            }
        }
        // Aliases collapsed by normalized(); kept for exhaustiveness.
        ItemAlignment::FlexStart | ItemAlignment::FlexEnd => ItemPlacement {
            offset: 0.0,
            size: clamp(size.unwrap_or(fallback_size)),
        },
    }
}

/// Resolve the effective alignment for one item: a `*-self` value overrides
/// the container's `*-items` value for that item only.
///
/// Spec: <https://www.w3.org/TR/css-align-3/#self-alignment>
pub fn resolve_self_alignment(
    self_value: Option<ItemAlignment>,
    items_value: ItemAlignment,
) -> ItemAlignment {
    self_value.unwrap_or(items_value)
}
