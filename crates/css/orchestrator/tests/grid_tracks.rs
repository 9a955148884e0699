//! Grid track sizing through the layout-request API.
#![cfg(test)]
#![allow(
    clippy::unwrap_used,
    reason = "tests panic on malformed layout output"
)]

use std::collections::HashMap;

use css_grid::{GridTrackSize, TrackBreadth};
use css_orchestrator::{
    AvailableSpace, AvailableSpace2, ComputedStyle, ContainerStyle, LayoutInput, Measurement,
    NodeKey, Size, layout_container,
};

const EPS: f32 = 0.5;

fn init_logging() {
    let _initialized = env_logger::builder().is_test(true).try_init();
}

fn leaf(width: f32, height: f32) -> impl FnMut(NodeKey, AvailableSpace2) -> Measurement {
    move |_, _| Measurement {
        min_content: Size::new(width, height),
        max_content: Size::new(width, height),
        preferred: Size::new(width, height),
    }
}

fn input(container: ContainerStyle, count: u64) -> LayoutInput {
    let children: Vec<NodeKey> = (1..=count).map(NodeKey).collect();
    let styles: HashMap<NodeKey, ComputedStyle> = children
        .iter()
        .map(|&node| (node, ComputedStyle::default()))
        .collect();
    LayoutInput {
        container,
        children,
        styles,
    }
}

fn track(breadth: TrackBreadth) -> GridTrackSize {
    GridTrackSize::Breadth(breadth)
}

#[test]
/// # Panics
/// Panics if track sizes plus gaps do not sum to the container under
/// stretch alignment.
fn tracks_and_gaps_fill_definite_container() {
    init_logging();
    let mut container = ContainerStyle::grid();
    container.available_width = AvailableSpace::Definite(430.0);
    container.available_height = AvailableSpace::Definite(100.0);
    container.column_gap = 10.0;
    container.template_columns = vec![
        track(TrackBreadth::Length(100.0)),
        track(TrackBreadth::Auto),
        track(TrackBreadth::Flex(1.0)),
    ];
    let request = input(container, 3);
    let output = layout_container(&request, &mut leaf(40.0, 10.0)).unwrap();
    // 100 + auto + 1fr + two 10px gaps == 430 under stretch.
    let first = output.rect_of(NodeKey(1)).unwrap();
    let second = output.rect_of(NodeKey(2)).unwrap();
    let third = output.rect_of(NodeKey(3)).unwrap();
    assert!((first.width - 100.0).abs() < EPS);
    let total = first.width + second.width + third.width + 20.0;
    assert!((total - 430.0).abs() < EPS, "total {total}");
    assert!((output.content_size.width - 430.0).abs() < EPS);
}

#[test]
/// # Panics
/// Panics if minmax does not clamp within bounds or collapse min-over-max.
fn minmax_columns() {
    init_logging();
    let mut container = ContainerStyle::grid();
    container.available_width = AvailableSpace::Definite(500.0);
    container.available_height = AvailableSpace::Definite(100.0);
    container.justify_content = css_align::ContentAlignment::Start;
    container.template_columns = vec![
        GridTrackSize::MinMax(TrackBreadth::Length(50.0), TrackBreadth::Length(150.0)),
        GridTrackSize::MinMax(TrackBreadth::Length(200.0), TrackBreadth::Length(100.0)),
    ];
    let request = input(container, 2);
    let output = layout_container(&request, &mut leaf(10.0, 10.0)).unwrap();
    let first = output.rect_of(NodeKey(1)).unwrap();
    let second = output.rect_of(NodeKey(2)).unwrap();
    // First column grows to its 150 max; second collapses to its 200 min.
    assert!((first.width - 150.0).abs() < EPS);
    assert!((second.width - 200.0).abs() < EPS);
}

#[test]
/// # Panics
/// Panics if fr units do not split free space proportionally.
fn fractional_tracks_split_free_space() {
    init_logging();
    let mut container = ContainerStyle::grid();
    container.available_width = AvailableSpace::Definite(600.0);
    container.available_height = AvailableSpace::Definite(100.0);
    container.template_columns = vec![
        track(TrackBreadth::Length(120.0)),
        track(TrackBreadth::Flex(1.0)),
        track(TrackBreadth::Flex(3.0)),
    ];
    let request = input(container, 3);
    let output = layout_container(&request, &mut leaf(0.0, 0.0)).unwrap();
    assert!((output.rect_of(NodeKey(2)).unwrap().width - 120.0).abs() < EPS);
    assert!((output.rect_of(NodeKey(3)).unwrap().width - 360.0).abs() < EPS);
}

#[test]
/// # Panics
/// Panics if fit-content does not stop at its limit.
fn fit_content_limits_growth() {
    init_logging();
    let mut container = ContainerStyle::grid();
    container.available_width = AvailableSpace::Definite(600.0);
    container.available_height = AvailableSpace::Definite(100.0);
    container.justify_content = css_align::ContentAlignment::Start;
    container.template_columns = vec![GridTrackSize::FitContent(TrackBreadth::Length(150.0))];
    let request = input(container, 1);
    let output = layout_container(&request, &mut leaf(50.0, 10.0)).unwrap();
    // Wrappable content: 50px min-content, 400px max-content. The track
    // tracks max-content up to the 150px limit.
    let mut wide = |_: NodeKey, _: AvailableSpace2| Measurement {
        min_content: Size::new(50.0, 10.0),
        max_content: Size::new(400.0, 10.0),
        preferred: Size::new(400.0, 10.0),
    };
    let wide_output = layout_container(&request, &mut wide).unwrap();
    assert!((output.rect_of(NodeKey(1)).unwrap().width - 50.0).abs() < EPS);
    assert!((wide_output.rect_of(NodeKey(1)).unwrap().width - 150.0).abs() < EPS);
}

#[test]
/// # Panics
/// Panics if identical inputs do not produce bit-identical output.
fn layout_is_deterministic() {
    init_logging();
    let mut container = ContainerStyle::grid();
    container.available_width = AvailableSpace::Definite(517.0);
    container.available_height = AvailableSpace::Definite(311.0);
    container.column_gap = 7.0;
    container.row_gap = 3.0;
    container.template_columns = vec![
        track(TrackBreadth::Flex(1.0)),
        track(TrackBreadth::Percentage(0.33)),
        track(TrackBreadth::Auto),
    ];
    let request = input(container, 7);
    let first = layout_container(&request, &mut leaf(41.0, 17.0)).unwrap();
    let second = layout_container(&request, &mut leaf(41.0, 17.0)).unwrap();
    for (one, two) in first.children().iter().zip(second.children()) {
        assert_eq!(one.rect, two.rect);
        assert_eq!(one.paint_order, two.paint_order);
    }
}

#[test]
/// # Panics
/// Panics if percentage tracks against an indefinite axis do not re-resolve
/// once the content determines the axis.
fn percentage_reresolves_against_content() {
    init_logging();
    let mut container = ContainerStyle::grid();
    container.available_width = AvailableSpace::Indefinite;
    container.available_height = AvailableSpace::Definite(100.0);
    container.template_columns = vec![
        track(TrackBreadth::Length(300.0)),
        track(TrackBreadth::Percentage(0.5)),
    ];
    let request = input(container, 2);
    let output = layout_container(&request, &mut leaf(20.0, 10.0)).unwrap();
    // First pass: 300 + auto(20) = 320; second pass resolves 50% against it.
    let second = output.rect_of(NodeKey(2)).unwrap();
    assert!((second.width - 160.0).abs() < EPS, "width {}", second.width);
}
