//! Flex container and item types.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#box-model>

use css_align::ItemAlignment;
use css_sizing::{AspectRatio, clamp_size};

/// The `flex-direction` property. The main axis follows the direction; the
/// cross axis is perpendicular to it.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    /// Whether the main axis is the inline (horizontal) axis.
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    /// Whether items flow against the main axis direction.
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}

/// The `flex-wrap` property.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

impl FlexWrap {
    pub const fn is_wrapped(self) -> bool {
        matches!(self, Self::Wrap | Self::WrapReverse)
    }

    /// Whether lines stack against the cross axis direction.
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::WrapReverse)
    }
}

/// A flex item in main/cross coordinates. The caller maps width/height onto
/// main/cross according to the container's direction before layout; margins
/// of `None` are `auto` and absorb free space.
#[derive(Clone, Debug)]
pub struct FlexItem<NodeId> {
    pub node_id: NodeId,
    /// The `order` property; ties break by document order.
    pub order: i32,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    /// `flex-basis`; `None` is `auto` (defer to the main size property).
    pub flex_basis: Option<f32>,
    /// Definite preferred main size; `None` is `auto` (content-sized).
    pub preferred_main: Option<f32>,
    pub preferred_cross: Option<f32>,
    pub min_main: Option<f32>,
    pub max_main: Option<f32>,
    pub min_cross: Option<f32>,
    pub max_cross: Option<f32>,
    /// Content measurements along each axis.
    pub min_content_main: f32,
    pub max_content_main: f32,
    pub max_content_cross: f32,
    /// Width/height ratio; the caller keeps it in width/height terms and
    /// layout transfers it across the axis mapping.
    pub aspect_ratio: Option<AspectRatio>,
    pub align_self: Option<ItemAlignment>,
    pub margin_main_start: Option<f32>,
    pub margin_main_end: Option<f32>,
    pub margin_cross_start: Option<f32>,
    pub margin_cross_end: Option<f32>,
}

impl<NodeId> FlexItem<NodeId> {
    pub fn new(node_id: NodeId) -> Self {
        Self {
            node_id,
            order: 0,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: None,
            preferred_main: None,
            preferred_cross: None,
            min_main: None,
            max_main: None,
            min_cross: None,
            max_cross: None,
            min_content_main: 0.0,
            max_content_main: 0.0,
            max_content_cross: 0.0,
            aspect_ratio: None,
            align_self: None,
            margin_main_start: Some(0.0),
            margin_main_end: Some(0.0),
            margin_cross_start: Some(0.0),
            margin_cross_end: Some(0.0),
        }
    }

    /// The flex base size: `flex-basis`, falling back through the preferred
    /// main size to the max-content size.
    ///
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-base-size>
    pub fn flex_base_size(&self) -> f32 {
        self.flex_basis
            .or(self.preferred_main)
            .unwrap_or(self.max_content_main)
    }

    /// The used minimum main size: an explicit `min-width`/`min-height`, or
    /// the automatic minimum (the min-content size) when the property is
    /// `auto`.
    ///
    /// Spec: <https://www.w3.org/TR/css-flexbox-1/#min-size-auto>
    pub fn min_main_size(&self) -> f32 {
        self.min_main.unwrap_or(self.min_content_main)
    }

    /// The hypothetical main size: the base size clamped by min/max.
    pub fn hypothetical_main_size(&self) -> f32 {
        clamp_size(self.flex_base_size(), Some(self.min_main_size()), self.max_main)
    }

    /// Non-auto main margins; auto margins contribute zero until resolved.
    pub fn main_margins(&self) -> f32 {
        self.margin_main_start.unwrap_or(0.0) + self.margin_main_end.unwrap_or(0.0)
    }

    /// The hypothetical outer main size (margins included).
    pub fn outer_hypothetical_main(&self) -> f32 {
        self.hypothetical_main_size() + self.main_margins()
    }

    pub fn cross_margins(&self) -> f32 {
        self.margin_cross_start.unwrap_or(0.0) + self.margin_cross_end.unwrap_or(0.0)
    }

    pub const fn has_auto_main_margin(&self) -> bool {
        self.margin_main_start.is_none() || self.margin_main_end.is_none()
    }

    pub const fn has_auto_cross_margin(&self) -> bool {
        self.margin_cross_start.is_none() || self.margin_cross_end.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    /// # Panics
    /// Panics if the base size fallback chain is wrong.
    fn base_size_fallback_chain() {
        let mut item = FlexItem::new(0_u32);
        item.max_content_main = 80.0;
        assert!((item.flex_base_size() - 80.0).abs() < EPS);
        item.preferred_main = Some(120.0);
        assert!((item.flex_base_size() - 120.0).abs() < EPS);
        item.flex_basis = Some(40.0);
        assert!((item.flex_base_size() - 40.0).abs() < EPS);
    }

    #[test]
    /// # Panics
    /// Panics if min/max clamping does not shape the hypothetical size.
    fn hypothetical_size_is_clamped() {
        let mut item = FlexItem::new(0_u32);
        item.flex_basis = Some(500.0);
        item.max_main = Some(200.0);
        assert!((item.hypothetical_main_size() - 200.0).abs() < EPS);
        item.min_main = Some(300.0);
        // min wins over max
        assert!((item.hypothetical_main_size() - 300.0).abs() < EPS);
    }

    #[test]
    /// # Panics
    /// Panics if an auto minimum does not floor the hypothetical size at the
    /// min-content size.
    fn auto_minimum_uses_min_content() {
        let mut item = FlexItem::new(0_u32);
        item.flex_basis = Some(20.0);
        item.min_content_main = 60.0;
        assert!((item.min_main_size() - 60.0).abs() < EPS);
        assert!((item.hypothetical_main_size() - 60.0).abs() < EPS);
        item.min_main = Some(0.0);
        assert!((item.hypothetical_main_size() - 20.0).abs() < EPS);
    }

    #[test]
    /// # Panics
    /// Panics if auto margins are not detected.
    fn auto_margin_detection() {
        let mut item = FlexItem::new(0_u32);
        assert!(!item.has_auto_main_margin());
        item.margin_main_start = None;
        assert!(item.has_auto_main_margin());
        assert!((item.main_margins()).abs() < EPS);
    }

    #[test]
    /// # Panics
    /// Panics if axis classification is wrong.
    fn direction_classification() {
        assert!(FlexDirection::Row.is_row());
        assert!(FlexDirection::RowReverse.is_reverse());
        assert!(!FlexDirection::Column.is_row());
        assert!(FlexWrap::WrapReverse.is_wrapped());
        assert!(!FlexWrap::NoWrap.is_wrapped());
    }
}
