//! Flexible length resolution for one flex line.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>

use css_sizing::clamp_size;
use log::debug;
use tracing::trace;

use crate::types::FlexItem;

const EPSILON: f32 = 0.001;

/// Resolve the used main sizes of one line's items.
///
/// Positive free space distributes by `flex-grow`; negative free space by
/// `flex-shrink` weighted by the flex base size, so larger items shrink
/// faster but proportionally. Items clamp at their min/max sizes and freeze,
/// and the loop redistributes until no item violates its bounds. An
/// indefinite container leaves every item at its hypothetical size.
pub fn resolve_flexible_lengths<NodeId>(
    items: &[FlexItem<NodeId>],
    available_main: Option<f32>,
    gap: f32,
) -> Vec<f32> {
    let hypothetical: Vec<f32> = items
        .iter()
        .map(FlexItem::hypothetical_main_size)
        .collect();
    let Some(available) = available_main else {
        return hypothetical;
    };
    if items.is_empty() {
        return hypothetical;
    }

    let gaps = gap * (items.len() - 1) as f32;
    let margins: f32 = items.iter().map(FlexItem::main_margins).sum();
    let outer_hypothetical: f32 = hypothetical.iter().sum::<f32>() + margins + gaps;
    let growing = outer_hypothetical < available;

    let mut frozen = vec![false; items.len()];
    let mut target = hypothetical.clone();
    for (index, item) in items.iter().enumerate() {
        let base = item.flex_base_size();
        let factor = if growing { item.flex_grow } else { item.flex_shrink };
        // Inflexible items, and items already clamped in the flexing
        // direction, freeze at their hypothetical size.
        let pre_clamped = if growing {
            base > hypothetical[index] + EPSILON
        } else {
            base < hypothetical[index] - EPSILON
        };
        if factor <= 0.0 || pre_clamped {
            frozen[index] = true;
        } else {
            target[index] = base;
        }
    }

    loop {
        let unfrozen: Vec<usize> = (0..items.len()).filter(|&index| !frozen[index]).collect();
        if unfrozen.is_empty() {
            break;
        }
        // Distribution restarts from base sizes each pass, so free space
        // counts frozen targets but unfrozen base sizes.
        let used: f32 = (0..items.len())
            .map(|index| {
                if frozen[index] {
                    target[index]
                } else {
                    items[index].flex_base_size()
                }
            })
            .sum::<f32>()
            + margins
            + gaps;
        let free = available - used;

        let factor_sum: f32 = unfrozen
            .iter()
            .map(|&index| {
                if growing {
                    items[index].flex_grow
                } else {
                    items[index].flex_shrink
                }
            })
            .sum();
        if factor_sum <= 0.0 {
            break;
        }
        // Factor sums below one leave a fraction of the free space
        // undistributed.
        let magnitude = if factor_sum < 1.0 {
            free * factor_sum
        } else {
            free
        };

        let mut proposed = target.clone();
        if growing {
            for &index in &unfrozen {
                proposed[index] =
                    items[index].flex_base_size() + magnitude * items[index].flex_grow / factor_sum;
            }
        } else {
            let scaled_sum: f32 = unfrozen
                .iter()
                .map(|&index| items[index].flex_shrink * items[index].flex_base_size())
                .sum();
            if scaled_sum <= 0.0 {
                break;
            }
            for &index in &unfrozen {
                let item = &items[index];
                let weight = item.flex_shrink * item.flex_base_size() / scaled_sum;
                proposed[index] = item.flex_base_size() - magnitude.abs() * weight;
            }
        }

        // Clamp and freeze violators; the remaining items re-divide on the
        // next pass.
        let mut total_violation = 0.0_f32;
        let mut violations = vec![0.0_f32; items.len()];
        for &index in &unfrozen {
            let item = &items[index];
            let clamped = clamp_size(
                proposed[index].max(0.0),
                Some(item.min_main_size()),
                item.max_main,
            );
            violations[index] = clamped - proposed[index];
            total_violation += violations[index];
            proposed[index] = clamped;
        }
        target = proposed;

        if total_violation > EPSILON {
            for &index in &unfrozen {
                if violations[index] > 0.0 {
                    frozen[index] = true;
                    trace!(target: "css::flexbox", "item {index} frozen at min {:.2}", target[index]);
                }
            }
        } else if total_violation < -EPSILON {
            for &index in &unfrozen {
                if violations[index] < 0.0 {
                    frozen[index] = true;
                    trace!(target: "css::flexbox", "item {index} frozen at max {:.2}", target[index]);
                }
            }
        } else {
            break;
        }
    }

    debug!(
        target: "css::flexbox",
        "[RESOLVE] {} items {} -> {target:?}",
        items.len(),
        if growing { "grow" } else { "shrink" }
    );
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 0.5;

    fn item(basis: f32, grow: f32, shrink: f32) -> FlexItem<u32> {
        let mut item = FlexItem::new(0);
        item.flex_basis = Some(basis);
        item.flex_grow = grow;
        item.flex_shrink = shrink;
        item
    }

    #[test]
    /// # Panics
    /// Panics if positive free space is not split by grow factors.
    fn grow_splits_by_factor() {
        let items = [item(100.0, 1.0, 1.0), item(100.0, 3.0, 1.0)];
        let sizes = resolve_flexible_lengths(&items, Some(400.0), 0.0);
        assert!((sizes[0] - 150.0).abs() < EPS);
        assert!((sizes[1] - 250.0).abs() < EPS);
    }

    #[test]
    /// # Panics
    /// Panics if shrink is not weighted by the flex base size.
    fn shrink_weighted_by_base_size() {
        let items = [item(100.0, 0.0, 1.0), item(300.0, 0.0, 1.0)];
        let sizes = resolve_flexible_lengths(&items, Some(300.0), 0.0);
        // 100px overflow, weights 100:300 -> shrink 25 and 75.
        assert!((sizes[0] - 75.0).abs() < EPS);
        assert!((sizes[1] - 225.0).abs() < EPS);
    }

    #[test]
    /// # Panics
    /// Panics if a min-clamped item does not freeze and push the rest of the
    /// shrinkage onto its siblings.
    fn min_clamp_refreezes() {
        let mut clamped = item(200.0, 0.0, 1.0);
        clamped.min_main = Some(180.0);
        let items = [clamped, item(200.0, 0.0, 1.0)];
        let sizes = resolve_flexible_lengths(&items, Some(300.0), 0.0);
        assert!((sizes[0] - 180.0).abs() < EPS);
        assert!((sizes[1] - 120.0).abs() < EPS);
    }

    #[test]
    /// # Panics
    /// Panics if zero-factor items do not stay at their hypothetical size.
    fn inflexible_items_hold_size() {
        let items = [item(100.0, 0.0, 0.0), item(100.0, 1.0, 1.0)];
        let grown = resolve_flexible_lengths(&items, Some(400.0), 0.0);
        assert!((grown[0] - 100.0).abs() < EPS);
        assert!((grown[1] - 300.0).abs() < EPS);
        let shrunk = resolve_flexible_lengths(&items, Some(150.0), 0.0);
        assert!((shrunk[0] - 100.0).abs() < EPS);
        assert!((shrunk[1] - 50.0).abs() < EPS);
    }

    #[test]
    /// # Panics
    /// Panics if shrinking collapses items below their automatic minimum.
    fn content_minimum_floors_shrink() {
        let mut first = item(100.0, 0.0, 1.0);
        first.min_content_main = 100.0;
        let mut second = item(100.0, 0.0, 1.0);
        second.min_content_main = 100.0;
        let items = [first, second];
        let sizes = resolve_flexible_lengths(&items, Some(0.0), 0.0);
        assert!((sizes[0] - 100.0).abs() < EPS);
        assert!((sizes[1] - 100.0).abs() < EPS);
    }

    #[test]
    /// # Panics
    /// Panics if an explicit minimum does not override the automatic one.
    fn explicit_minimum_overrides_automatic() {
        let mut narrow = item(100.0, 0.0, 1.0);
        narrow.min_content_main = 100.0;
        narrow.min_main = Some(0.0);
        let items = [narrow, item(100.0, 0.0, 1.0)];
        let sizes = resolve_flexible_lengths(&items, Some(100.0), 0.0);
        assert!((sizes[0] - 50.0).abs() < EPS);
        assert!((sizes[1] - 50.0).abs() < EPS);
    }

    #[test]
    /// # Panics
    /// Panics if an indefinite container flexes items at all.
    fn indefinite_container_keeps_hypothetical() {
        let items = [item(100.0, 1.0, 1.0), item(100.0, 1.0, 1.0)];
        let sizes = resolve_flexible_lengths(&items, None, 0.0);
        assert!((sizes[0] - 100.0).abs() < EPS);
        assert!((sizes[1] - 100.0).abs() < EPS);
    }

    #[test]
    /// # Panics
    /// Panics if grow factors summing below one distribute all free space.
    fn fractional_factor_sum_distributes_partially() {
        let items = [item(100.0, 0.25, 1.0), item(100.0, 0.25, 1.0)];
        let sizes = resolve_flexible_lengths(&items, Some(400.0), 0.0);
        // Half the factor sum: only 100 of the 200 free pixels distribute.
        assert!((sizes[0] - 150.0).abs() < EPS);
        assert!((sizes[1] - 150.0).abs() < EPS);
    }
}
