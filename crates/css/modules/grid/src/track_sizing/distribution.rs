//! Free-space distribution primitives and the expansion steps.
//! Spec: <https://www.w3.org/TR/css-grid-2/#extra-space>

use log::debug;
use smallvec::SmallVec;

use super::{EPSILON, TrackState};

/// Grow the base sizes of `targets` by an equal share of `space`, never past
/// each track's growth limit. Shares that would overshoot a limit cascade to
/// the tracks that still have room. Returns the space that could not be
/// placed.
pub(super) fn grow_bases_up_to_limits(
    states: &mut [TrackState],
    targets: &[usize],
    space: f32,
) -> f32 {
    let mut remaining = space;
    loop {
        let active: SmallVec<usize, 8> = targets
            .iter()
            .copied()
            .filter(|&track| states[track].limit - states[track].base > EPSILON)
            .collect();
        if active.is_empty() || remaining <= EPSILON {
            break;
        }
        let share = remaining / active.len() as f32;
        let mut consumed = 0.0;
        for &track in &active {
            let state = &mut states[track];
            let grant = share.min(state.limit - state.base);
            state.base += grant;
            consumed += grant;
        }
        remaining -= consumed;
        if consumed <= EPSILON {
            break;
        }
    }
    remaining
}

/// Grow the base sizes of `targets` by an equal share of `space`, ignoring
/// growth limits.
pub(super) fn grow_bases_beyond(states: &mut [TrackState], targets: &[usize], space: f32) {
    if targets.is_empty() || space <= 0.0 {
        return;
    }
    let share = space / targets.len() as f32;
    for &track in targets {
        states[track].base += share;
    }
}

/// Grow the growth limits of `targets` by an equal share of `space`. An
/// infinite limit counts as the base size before growing.
pub(super) fn grow_limits(states: &mut [TrackState], targets: &[usize], space: f32) {
    if targets.is_empty() || space <= 0.0 {
        return;
    }
    let share = space / targets.len() as f32;
    for &track in targets {
        let state = &mut states[track];
        let current = if state.limit.is_finite() {
            state.limit
        } else {
            state.base
        };
        state.limit = current + share;
    }
}

/// Step 3: grow every track's base toward its growth limit using the
/// container's free space.
///
/// Spec: <https://www.w3.org/TR/css-grid-2/#algo-grow-tracks>
pub(super) fn maximize_tracks(states: &mut [TrackState], available: f32) {
    let used: f32 = states.iter().map(|state| state.base).sum();
    let free = available - used;
    if free <= EPSILON {
        return;
    }
    let all: Vec<usize> = (0..states.len()).collect();
    let leftover = grow_bases_up_to_limits(states, &all, free);
    debug!(
        target: "css::grid",
        "[MAXIMIZE] free={free:.2} leftover={leftover:.2}"
    );
}

/// Step 4: expand flexible tracks into the remaining free space.
///
/// Each fr track receives `free_space * factor / sum_of_factors`, but never
/// less than its base size (the content-derived automatic minimum). Tracks
/// whose share falls below that minimum freeze at it and the remaining tracks
/// re-divide the rest, iterating to a fixed point.
///
/// Spec: <https://www.w3.org/TR/css-grid-2/#algo-flex-tracks>
pub(super) fn expand_flexible_tracks(states: &mut [TrackState], available: f32) {
    let flex_tracks: Vec<usize> = (0..states.len())
        .filter(|&track| states[track].flex.is_some())
        .collect();
    if flex_tracks.is_empty() {
        return;
    }
    let rigid: f32 = states
        .iter()
        .filter(|state| state.flex.is_none())
        .map(|state| state.base)
        .sum();
    let leftover = available - rigid;

    let mut frozen = vec![false; states.len()];
    loop {
        let active: Vec<usize> = flex_tracks
            .iter()
            .copied()
            .filter(|&track| !frozen[track])
            .collect();
        if active.is_empty() {
            break;
        }
        let factor_sum: f32 = active
            .iter()
            .map(|&track| states[track].flex.unwrap_or(0.0))
            .sum();
        if factor_sum <= 0.0 {
            break;
        }
        let frozen_size: f32 = flex_tracks
            .iter()
            .filter(|&&track| frozen[track])
            .map(|&track| states[track].base)
            .sum();
        let unit = ((leftover - frozen_size) / factor_sum).max(0.0);

        let mut refroze = false;
        for &track in &active {
            let factor = states[track].flex.unwrap_or(0.0);
            if factor * unit + EPSILON < states[track].base {
                frozen[track] = true;
                refroze = true;
            }
        }
        if refroze {
            continue;
        }
        for &track in &active {
            let factor = states[track].flex.unwrap_or(0.0);
            let state = &mut states[track];
            state.base = factor * unit;
            state.limit = state.base;
        }
        debug!(
            target: "css::grid",
            "[FLEX] unit={unit:.3} over {} active tracks", active.len()
        );
        break;
    }
}

/// Step 5: under `*-content: stretch`, distribute remaining free space
/// equally to tracks whose maximum sizing function is `auto`.
///
/// Spec: <https://www.w3.org/TR/css-grid-2/#algo-stretch>
pub(super) fn stretch_auto_tracks(states: &mut [TrackState], available: f32) {
    let used: f32 = states.iter().map(|state| state.base).sum();
    let free = available - used;
    if free <= EPSILON {
        return;
    }
    let targets: Vec<usize> = (0..states.len())
        .filter(|&track| states[track].stretchable)
        .collect();
    if targets.is_empty() {
        return;
    }
    let share = free / targets.len() as f32;
    for &track in &targets {
        let state = &mut states[track];
        state.base += share;
        state.limit = state.limit.max(state.base);
    }
    debug!(
        target: "css::grid",
        "[STRETCH] {share:.2} to each of {} auto tracks", targets.len()
    );
}
