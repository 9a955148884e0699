//! Grid placement through the layout-request API.
#![cfg(test)]
#![allow(
    clippy::unwrap_used,
    reason = "tests panic on malformed layout output"
)]

use std::collections::HashMap;

use css_grid::{GridLine, GridTrackSize, TemplateAreas, TrackBreadth};
use css_orchestrator::{
    AvailableSpace, AvailableSpace2, ComputedStyle, ContainerStyle, LayoutInput, Measurement,
    NodeKey, layout_container,
};

const EPS: f32 = 0.5;

fn init_logging() {
    let _initialized = env_logger::builder().is_test(true).try_init();
}

fn no_measure() -> impl FnMut(NodeKey, AvailableSpace2) -> Measurement {
    |_, _| Measurement::default()
}

fn fixed_grid(columns: usize, rows: usize, cell: f32) -> ContainerStyle {
    let mut container = ContainerStyle::grid();
    container.template_columns =
        vec![GridTrackSize::Breadth(TrackBreadth::Length(cell)); columns];
    container.template_rows = vec![GridTrackSize::Breadth(TrackBreadth::Length(cell)); rows];
    container.available_width = AvailableSpace::Definite(cell * columns as f32);
    container.available_height = AvailableSpace::Definite(cell * rows as f32);
    container
}

#[test]
/// # Panics
/// Panics if named-line placement does not land the item on the named track.
fn named_lines_place_items() {
    init_logging();
    let mut container = fixed_grid(3, 1, 100.0);
    container.column_names = [("content-start", 2_usize), ("content-end", 3_usize)]
        .into_iter()
        .collect();
    let node = NodeKey(1);
    let mut style = ComputedStyle::default();
    style.grid_column_start = GridLine::Named("content-start".into());
    style.grid_column_end = GridLine::Named("content-end".into());
    let request = LayoutInput {
        container,
        children: vec![node],
        styles: HashMap::from([(node, style)]),
    };
    let output = layout_container(&request, &mut no_measure()).unwrap();
    let rect = output.rect_of(node).unwrap();
    assert!((rect.x - 100.0).abs() < EPS);
    assert!((rect.width - 100.0).abs() < EPS);
}

#[test]
/// # Panics
/// Panics if dense packing does not backfill the hole sparse flow leaves.
fn dense_backfills_holes() {
    init_logging();
    let mut container = fixed_grid(3, 2, 100.0);
    container.auto_flow = css_grid::GridAutoFlow::RowDense;

    // A pinned item occupying columns 2-3 of row 1, a 2-wide auto item that
    // must wrap, and a 1-wide item that fits the hole at (1,1).
    let mut pinned = ComputedStyle::default();
    pinned.grid_column_start = GridLine::Index(2);
    pinned.grid_column_end = GridLine::Index(4);
    pinned.grid_row_start = GridLine::Index(1);
    let mut wide = ComputedStyle::default();
    wide.grid_column_end = GridLine::Span(2);
    let narrow = ComputedStyle::default();

    let request = LayoutInput {
        container,
        children: vec![NodeKey(1), NodeKey(2), NodeKey(3)],
        styles: HashMap::from([
            (NodeKey(1), pinned),
            (NodeKey(2), wide),
            (NodeKey(3), narrow),
        ]),
    };
    let output = layout_container(&request, &mut no_measure()).unwrap();
    let wide_rect = output.rect_of(NodeKey(2)).unwrap();
    let narrow_rect = output.rect_of(NodeKey(3)).unwrap();
    assert!((wide_rect.y - 100.0).abs() < EPS, "wide wraps to row 2");
    assert!((narrow_rect.x).abs() < EPS, "narrow backfills (1,1)");
    assert!((narrow_rect.y).abs() < EPS);
}

#[test]
/// # Panics
/// Panics if negative line numbers do not count from the explicit end.
fn negative_lines_from_explicit_end() {
    init_logging();
    let container = fixed_grid(4, 1, 50.0);
    let node = NodeKey(1);
    let mut style = ComputedStyle::default();
    style.grid_column_start = GridLine::Index(-2);
    style.grid_column_end = GridLine::Index(-1);
    let request = LayoutInput {
        container,
        children: vec![node],
        styles: HashMap::from([(node, style)]),
    };
    let output = layout_container(&request, &mut no_measure()).unwrap();
    let rect = output.rect_of(node).unwrap();
    // Lines 1..=5; -2 is line 4, the last 50px column.
    assert!((rect.x - 150.0).abs() < EPS);
    assert!((rect.width - 50.0).abs() < EPS);
}

#[test]
/// # Panics
/// Panics if null template cells get auto-occupied or an undefined area name
/// fails to lay out.
fn template_areas_and_null_cells() {
    init_logging();
    let mut container = fixed_grid(2, 2, 100.0);
    container.areas = Some(TemplateAreas::from_rows(vec![
        vec![Some("main".into()), None],
        vec![Some("main".into()), Some("aside".into())],
    ]));

    let mut main = ComputedStyle::default();
    main.grid_area = Some("main".into());
    // Undefined name: falls back to auto-placement, which must skip the
    // null cell at (1,2) and the occupied main column.
    let mut missing = ComputedStyle::default();
    missing.grid_area = Some("footer".into());

    let request = LayoutInput {
        container,
        children: vec![NodeKey(1), NodeKey(2)],
        styles: HashMap::from([(NodeKey(1), main), (NodeKey(2), missing)]),
    };
    let output = layout_container(&request, &mut no_measure()).unwrap();
    let main_rect = output.rect_of(NodeKey(1)).unwrap();
    assert!((main_rect.height - 200.0).abs() < EPS, "main spans both rows");
    let missing_rect = output.rect_of(NodeKey(2)).unwrap();
    assert!((missing_rect.x - 100.0).abs() < EPS);
    assert!((missing_rect.y - 100.0).abs() < EPS, "skips the null cell");
}

#[test]
/// # Panics
/// Panics if implicit tracks are not created for overflowing items.
fn implicit_rows_grow_the_grid() {
    init_logging();
    let mut container = fixed_grid(2, 1, 100.0);
    container.available_height = AvailableSpace::Indefinite;
    container.auto_rows = vec![GridTrackSize::Breadth(TrackBreadth::Length(40.0))];
    let children: Vec<NodeKey> = (1..=4).map(NodeKey).collect();
    let styles = children
        .iter()
        .map(|&node| (node, ComputedStyle::default()))
        .collect();
    let request = LayoutInput {
        container,
        children,
        styles,
    };
    let output = layout_container(&request, &mut no_measure()).unwrap();
    let third = output.rect_of(NodeKey(3)).unwrap();
    assert!((third.y - 100.0).abs() < EPS);
    assert!((third.height - 40.0).abs() < EPS, "implicit 40px row");
    assert!((output.content_size.height - 140.0).abs() < EPS);
}
