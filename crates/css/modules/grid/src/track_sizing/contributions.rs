//! Distribution of item content contributions to intrinsic tracks.
//! Spec: <https://www.w3.org/TR/css-grid-2/#algo-content>

use smallvec::SmallVec;
use tracing::trace;

use super::distribution::{grow_bases_beyond, grow_bases_up_to_limits, grow_limits};
use super::{EPSILON, TrackSizingInputs, TrackState};

type Targets = SmallVec<usize, 8>;

/// Distribute every item's min- and max-content contributions to the
/// intrinsic tracks it spans.
///
/// Items are processed in ascending span order so single-track items settle
/// their track before spanning items distribute across it; items crossing
/// flexible tracks go last and feed only those tracks.
pub(super) fn distribute_item_contributions<NodeId>(
    states: &mut [TrackState],
    inputs: &TrackSizingInputs<'_, NodeId>,
) {
    let mut order: Vec<usize> = (0..inputs.items.len().min(inputs.placements.len())).collect();
    let span_of = |index: usize| inputs.axis.track_range(&inputs.placements[index]).len();
    let crosses_flex = |index: usize, states: &[TrackState]| {
        inputs
            .axis
            .track_range(&inputs.placements[index])
            .any(|track| states.get(track).is_some_and(|state| state.flex.is_some()))
    };
    order.sort_by_key(|&index| (span_of(index), crosses_flex(index, states)));

    for item_index in order {
        let item = &inputs.items[item_index];
        let range = inputs.axis.track_range(&inputs.placements[item_index]);
        if range.is_empty() || range.end > states.len() {
            continue;
        }
        let span = range.len();
        let inner_gaps = inputs.gap * (span - 1) as f32;
        let min_contribution = inputs.axis.min_contribution(item);
        let max_contribution = inputs.axis.max_contribution(item);

        if crosses_flex(item_index, states) {
            // Contributions across flexible tracks raise only the flexible
            // tracks' automatic minimums; fr expansion finishes the job.
            let targets: Targets = range
                .clone()
                .filter(|&track| states[track].flex.is_some())
                .collect();
            let current: f32 = range.map(|track| states[track].base).sum::<f32>() + inner_gaps;
            let needed = min_contribution - current;
            if needed > EPSILON {
                trace!(
                    target: "css::grid",
                    "item {item_index} raises flex minimums by {needed:.2}"
                );
                grow_bases_beyond(states, &targets, needed);
            }
            continue;
        }

        // Base sizes absorb the min-content contribution, first up to growth
        // limits, then beyond them if every target saturates.
        let base_targets: Targets = range
            .clone()
            .filter(|&track| states[track].intrinsic_min)
            .collect();
        if !base_targets.is_empty() {
            let current: f32 =
                range.clone().map(|track| states[track].base).sum::<f32>() + inner_gaps;
            let needed = min_contribution - current;
            if needed > EPSILON {
                let leftover = grow_bases_up_to_limits(states, &base_targets, needed);
                if leftover > EPSILON {
                    grow_bases_beyond(states, &base_targets, leftover);
                }
            }
        }

        // Growth limits absorb the max-content contribution.
        let limit_targets: Targets = range
            .clone()
            .filter(|&track| states[track].intrinsic_max)
            .collect();
        if !limit_targets.is_empty() {
            let current: f32 = range
                .map(|track| {
                    let state = &states[track];
                    if state.limit.is_finite() {
                        state.limit
                    } else {
                        state.base
                    }
                })
                .sum::<f32>()
                + inner_gaps;
            let needed = max_contribution - current;
            if needed > EPSILON {
                grow_limits(states, &limit_targets, needed);
            }
        }
    }
}
