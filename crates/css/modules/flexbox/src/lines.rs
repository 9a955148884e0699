//! Flex line building.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use std::ops::Range;

use log::debug;

use crate::types::{FlexItem, FlexWrap};

/// Break `items` (already in modified document order) into flex lines.
///
/// Each line collects the maximal prefix of remaining items whose outer
/// hypothetical main sizes plus gaps fit within `main_limit`; every line
/// holds at least one item. `NoWrap` or an indefinite limit yields a single
/// line.
pub fn break_into_lines<NodeId>(
    items: &[FlexItem<NodeId>],
    wrap: FlexWrap,
    main_limit: Option<f32>,
    gap: f32,
) -> Vec<Range<usize>> {
    if items.is_empty() {
        return Vec::new();
    }
    let limit = match (wrap.is_wrapped(), main_limit) {
        (true, Some(limit)) => limit,
        _ => return vec![0..items.len()],
    };

    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut line_used = 0.0_f32;
    for (index, item) in items.iter().enumerate() {
        let outer = item.outer_hypothetical_main();
        let with_gap = if index == line_start { outer } else { outer + gap };
        if index > line_start && line_used + with_gap > limit + f32::EPSILON {
            lines.push(line_start..index);
            line_start = index;
            line_used = outer;
        } else {
            line_used += with_gap;
        }
    }
    lines.push(line_start..items.len());
    debug!(
        target: "css::flexbox",
        "[LINES] {} items -> {} lines (limit {limit:.1})",
        items.len(),
        lines.len()
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(main: f32) -> FlexItem<u32> {
        let mut item = FlexItem::new(0);
        item.preferred_main = Some(main);
        item
    }

    #[test]
    /// # Panics
    /// Panics if items that fit exactly are split across lines.
    fn exact_fit_stays_on_one_line() {
        let items = [item(100.0), item(100.0), item(100.0)];
        let lines = break_into_lines(&items, FlexWrap::Wrap, Some(300.0), 0.0);
        assert_eq!(lines, vec![0..3]);
    }

    #[test]
    /// # Panics
    /// Panics if overflow does not wrap to a new line.
    fn overflow_wraps() {
        let items = [item(120.0), item(120.0), item(120.0)];
        let lines = break_into_lines(&items, FlexWrap::Wrap, Some(300.0), 0.0);
        assert_eq!(lines, vec![0..2, 2..3]);
    }

    #[test]
    /// # Panics
    /// Panics if gaps are not counted against the line limit.
    fn gaps_count_against_limit() {
        let items = [item(100.0), item(100.0), item(100.0)];
        // 3 x 100 fits in 320 without gaps but not with two 20px gaps.
        let lines = break_into_lines(&items, FlexWrap::Wrap, Some(320.0), 20.0);
        assert_eq!(lines, vec![0..2, 2..3]);
    }

    #[test]
    /// # Panics
    /// Panics if an oversized item does not get its own line.
    fn oversized_item_gets_own_line() {
        let items = [item(400.0), item(50.0)];
        let lines = break_into_lines(&items, FlexWrap::Wrap, Some(300.0), 0.0);
        assert_eq!(lines, vec![0..1, 1..2]);
    }

    #[test]
    /// # Panics
    /// Panics if nowrap splits lines.
    fn nowrap_is_single_line() {
        let items = [item(400.0), item(400.0)];
        let lines = break_into_lines(&items, FlexWrap::NoWrap, Some(300.0), 0.0);
        assert_eq!(lines, vec![0..2]);
    }
}
