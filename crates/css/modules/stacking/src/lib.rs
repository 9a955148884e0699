//! CSS stacking and paint order.
//! Spec: <https://www.w3.org/TR/CSS22/zindex.html>
//!
//! Within one stacking context, children paint in stacking-level buckets:
//! negative z-index first, then in-flow content, then positioned boxes with
//! `z-index: auto`, then positioned boxes with non-negative z-index (an
//! explicit `0` ranks above `auto`). Ties within a bucket keep document
//! order. A child that establishes its own context paints atomically: its
//! descendants never interleave with the parent's other children.

use log::debug;

/// The stacking bucket a box paints in within its parent context.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StackingLevel {
    /// Positioned with `z-index` below zero; paints behind in-flow content.
    NegativeZIndex(i32),
    /// Non-positioned, in-flow content. `z-index` does not apply.
    InFlowContent,
    /// Positioned with `z-index: auto`.
    PositionedAuto,
    /// Positioned with an explicit non-negative `z-index`.
    PositionedZIndex(i32),
}

impl StackingLevel {
    /// Classify a box from its computed style.
    pub const fn from_style(positioned: bool, z_index: Option<i32>) -> Self {
        if !positioned {
            return Self::InFlowContent;
        }
        match z_index {
            Some(z_index) if z_index < 0 => Self::NegativeZIndex(z_index),
            Some(z_index) => Self::PositionedZIndex(z_index),
            None => Self::PositionedAuto,
        }
    }

    /// Bucket plus z-value ordering key.
    const fn sort_key(self) -> (i32, i32) {
        match self {
            Self::NegativeZIndex(z_index) => (0, z_index),
            Self::InFlowContent => (1, 0),
            Self::PositionedAuto => (2, 0),
            Self::PositionedZIndex(z_index) => (3, z_index),
        }
    }
}

impl Ord for StackingLevel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for StackingLevel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Whether a box starts a new stacking context, making its subtree paint
/// atomically within the parent context.
pub const fn establishes_context(positioned: bool, z_index: Option<i32>) -> bool {
    positioned && z_index.is_some()
}

/// The paint order of a context's children: indices into `levels` (one per
/// child, in document order), sorted by stacking level with document order
/// breaking ties. A child that establishes its own context sorts here like
/// any other; its descendants paint inside it, never in this list.
pub fn paint_order(levels: &[StackingLevel]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..levels.len()).collect();
    order.sort_by_key(|&index| levels[index].sort_key());
    debug!(
        target: "css::stacking",
        "[PAINT_ORDER] {} children -> {order:?}",
        levels.len()
    );
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if the bucket order is not negative < in-flow < auto < explicit.
    fn bucket_ordering() {
        let mut levels = [
            StackingLevel::PositionedZIndex(0),
            StackingLevel::PositionedAuto,
            StackingLevel::InFlowContent,
            StackingLevel::NegativeZIndex(-1),
        ];
        levels.sort();
        assert_eq!(
            levels,
            [
                StackingLevel::NegativeZIndex(-1),
                StackingLevel::InFlowContent,
                StackingLevel::PositionedAuto,
                StackingLevel::PositionedZIndex(0),
            ]
        );
    }

    #[test]
    /// # Panics
    /// Panics if an explicit zero does not rank above auto.
    fn explicit_zero_above_auto() {
        assert!(StackingLevel::PositionedZIndex(0) > StackingLevel::PositionedAuto);
    }

    #[test]
    /// # Panics
    /// Panics if ties do not keep document order.
    fn ties_keep_document_order() {
        let levels = [
            StackingLevel::PositionedZIndex(5),
            StackingLevel::InFlowContent,
            StackingLevel::PositionedZIndex(5),
            StackingLevel::InFlowContent,
        ];
        assert_eq!(paint_order(&levels), vec![1, 3, 0, 2]);
    }

    #[test]
    /// # Panics
    /// Panics if z-index classification from style is wrong.
    fn classification_from_style() {
        assert_eq!(
            StackingLevel::from_style(false, Some(9)),
            StackingLevel::InFlowContent
        );
        assert_eq!(
            StackingLevel::from_style(true, None),
            StackingLevel::PositionedAuto
        );
        assert_eq!(
            StackingLevel::from_style(true, Some(-2)),
            StackingLevel::NegativeZIndex(-2)
        );
        assert!(establishes_context(true, Some(0)));
        assert!(!establishes_context(true, None));
        assert!(!establishes_context(false, Some(3)));
    }

    #[test]
    /// # Panics
    /// Panics if negative z-indices do not order among themselves.
    fn negative_values_order() {
        let levels = [
            StackingLevel::NegativeZIndex(-1),
            StackingLevel::NegativeZIndex(-10),
        ];
        assert_eq!(paint_order(&levels), vec![1, 0]);
    }
}
