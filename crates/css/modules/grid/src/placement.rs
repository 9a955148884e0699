//! Grid item placement algorithm.
//! Spec: <https://www.w3.org/TR/css-grid-2/#placement>
//!
//! Resolves every item to a definite grid area: explicit line numbers first
//! (negative numbers count from the end of the explicit grid), then named
//! lines and template areas, then auto-placement with either the sparse
//! forward-only cursor or dense rescan-from-start packing.

use std::collections::{HashMap, HashSet};

use log::debug;
use tracing::trace;

use crate::types::{GridAutoFlow, GridItem, GridLine};

/// A definite grid area in 1-indexed, end-exclusive line coordinates.
///
/// `row_start: 1, row_end: 2` occupies the first row track.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GridArea {
    pub row_start: usize,
    pub row_end: usize,
    pub column_start: usize,
    pub column_end: usize,
}

impl GridArea {
    pub const fn new(
        row_start: usize,
        row_end: usize,
        column_start: usize,
        column_end: usize,
    ) -> Self {
        Self {
            row_start,
            row_end,
            column_start,
            column_end,
        }
    }

    /// Number of row tracks spanned.
    pub const fn row_span(&self) -> usize {
        self.row_end.saturating_sub(self.row_start)
    }

    /// Number of column tracks spanned.
    pub const fn column_span(&self) -> usize {
        self.column_end.saturating_sub(self.column_start)
    }

    /// Whether two areas cover at least one common cell.
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.row_start < other.row_end
            && other.row_start < self.row_end
            && self.column_start < other.column_end
            && other.column_start < self.column_end
    }
}

/// Named grid lines in one axis, each name mapping to one or more 1-indexed
/// line numbers.
///
/// Spec: <https://www.w3.org/TR/css-grid-2/#named-lines>
#[derive(Clone, Debug, Default)]
pub struct NamedLines {
    names: HashMap<String, Vec<usize>>,
}

impl NamedLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, line: usize) {
        let lines = self.names.entry(name.into()).or_default();
        lines.push(line);
        lines.sort_unstable();
    }

    /// The lowest line number carrying `name`.
    pub fn first_line(&self, name: &str) -> Option<usize> {
        self.names.get(name).and_then(|lines| lines.first().copied())
    }
}

impl<Name: Into<String>> FromIterator<(Name, usize)> for NamedLines {
    fn from_iter<Iter: IntoIterator<Item = (Name, usize)>>(entries: Iter) -> Self {
        let mut named = Self::new();
        for (name, line) in entries {
            named.insert(name, line);
        }
        named
    }
}

/// The `grid-template-areas` cell matrix. `None` cells are the `.` null
/// token: they shape no area and are never occupied by auto-placement.
///
/// Spec: <https://www.w3.org/TR/css-grid-2/#grid-template-areas-property>
#[derive(Clone, Debug, Default)]
pub struct TemplateAreas {
    rows: usize,
    columns: usize,
    cells: Vec<Option<String>>,
}

impl TemplateAreas {
    /// Build from row-major cell strings. Ragged rows are padded with null
    /// cells to the widest row.
    pub fn from_rows(rows: Vec<Vec<Option<String>>>) -> Self {
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut cells = Vec::with_capacity(rows.len() * columns);
        let row_count = rows.len();
        for mut row in rows {
            row.resize(columns, None);
            cells.extend(row);
        }
        Self {
            rows: row_count,
            columns,
            cells,
        }
    }

    pub const fn row_count(&self) -> usize {
        self.rows
    }

    pub const fn column_count(&self) -> usize {
        self.columns
    }

    /// The rectangular area named `name`, if any cell carries it.
    ///
    /// Area cells are validated to be rectangular upstream; this computes the
    /// bounding box of all matching cells.
    pub fn area(&self, name: &str) -> Option<GridArea> {
        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for (index, cell) in self.cells.iter().enumerate() {
            if cell.as_deref() != Some(name) {
                continue;
            }
            let row = index / self.columns;
            let column = index % self.columns;
            bounds = Some(match bounds {
                None => (row, row, column, column),
                Some((top, bottom, left, right)) => (
                    top.min(row),
                    bottom.max(row),
                    left.min(column),
                    right.max(column),
                ),
            });
        }
        bounds.map(|(top, bottom, left, right)| GridArea {
            row_start: top + 1,
            row_end: bottom + 2,
            column_start: left + 1,
            column_end: right + 2,
        })
    }

    /// Whether the cell at 1-indexed track coordinates is the `.` null token.
    /// Cells outside the template are not null.
    pub fn is_null(&self, row: usize, column: usize) -> bool {
        if row == 0 || column == 0 || row > self.rows || column > self.columns {
            return false;
        }
        self.cells[(row - 1) * self.columns + (column - 1)].is_none()
    }
}

/// Container-level inputs to placement.
#[derive(Clone, Debug, Default)]
pub struct PlacementInputs {
    /// Number of explicit row tracks from `grid-template-rows`.
    pub explicit_rows: usize,
    /// Number of explicit column tracks from `grid-template-columns`.
    pub explicit_columns: usize,
    pub row_names: NamedLines,
    pub column_names: NamedLines,
    pub areas: Option<TemplateAreas>,
    pub auto_flow: GridAutoFlow,
}

/// Resolved placement: one definite area per item (same order as the input
/// items) plus the final implicit grid dimensions.
#[derive(Clone, Debug)]
pub struct PlacementResult {
    pub areas: Vec<GridArea>,
    pub row_count: usize,
    pub column_count: usize,
}

/// One axis of an item's placement after line resolution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum AxisPlacement {
    Definite { start: usize, end: usize },
    Auto { span: usize },
}

impl AxisPlacement {
    const fn span(self) -> usize {
        match self {
            Self::Definite { start, end } => end.saturating_sub(start),
            Self::Auto { span } => span,
        }
    }
}

/// One side of a placement after name/negative-number resolution.
#[derive(Copy, Clone, Debug)]
enum LineSide {
    Auto,
    At(usize),
    Span(usize),
}

fn resolve_side(line: &GridLine, explicit_tracks: usize, names: &NamedLines) -> LineSide {
    match line {
        GridLine::Auto => LineSide::Auto,
        // Line 0 does not exist; treated as auto.
        GridLine::Index(0) => LineSide::Auto,
        GridLine::Index(index) if *index > 0 => LineSide::At(*index as usize),
        GridLine::Index(index) => {
            // Negative lines count from the end of the explicit grid:
            // -1 is the last explicit line. Lines before the explicit grid
            // clamp to line 1.
            let from_end = explicit_tracks as i64 + 2 + i64::from(*index);
            LineSide::At(from_end.max(1) as usize)
        }
        GridLine::Span(span) => LineSide::Span((*span).max(1)),
        GridLine::Named(name) => match names.first_line(name) {
            Some(line) => LineSide::At(line),
            // Unmatched names resolve to the end edge of the explicit grid.
            None => LineSide::At(explicit_tracks + 1),
        },
    }
}

/// Resolve one axis of an item's placement.
///
/// Spec: <https://www.w3.org/TR/css-grid-2/#line-placement>
fn resolve_axis(
    start: &GridLine,
    end: &GridLine,
    explicit_tracks: usize,
    names: &NamedLines,
) -> AxisPlacement {
    let start_side = resolve_side(start, explicit_tracks, names);
    let end_side = resolve_side(end, explicit_tracks, names);
    match (start_side, end_side) {
        (LineSide::At(from), LineSide::At(to)) => {
            // Equal lines collapse to a single-track span; swapped lines
            // exchange roles.
            let (low, high) = if from <= to { (from, to) } else { (to, from) };
            AxisPlacement::Definite {
                start: low,
                end: high.max(low + 1),
            }
        }
        (LineSide::At(from), LineSide::Span(span)) => AxisPlacement::Definite {
            start: from,
            end: from + span,
        },
        (LineSide::Span(span), LineSide::At(to)) => {
            let start = to.saturating_sub(span).max(1);
            AxisPlacement::Definite {
                start,
                end: to.max(start + 1),
            }
        }
        (LineSide::At(from), LineSide::Auto) => AxisPlacement::Definite {
            start: from,
            end: from + 1,
        },
        (LineSide::Auto, LineSide::At(to)) => {
            let start = to.saturating_sub(1).max(1);
            AxisPlacement::Definite {
                start,
                end: to.max(start + 1),
            }
        }
        (LineSide::Span(span), LineSide::Auto | LineSide::Span(_))
        | (LineSide::Auto, LineSide::Span(span)) => AxisPlacement::Auto { span },
        (LineSide::Auto, LineSide::Auto) => AxisPlacement::Auto { span: 1 },
    }
}

/// Occupancy grid keyed by 1-indexed (row, column) track cells.
struct Occupancy<'areas> {
    cells: HashSet<(usize, usize)>,
    template: Option<&'areas TemplateAreas>,
}

impl Occupancy<'_> {
    fn mark(&mut self, area: &GridArea) {
        for row in area.row_start..area.row_end {
            for column in area.column_start..area.column_end {
                self.cells.insert((row, column));
            }
        }
    }

    /// Whether `area` is free for auto-placement: no occupied cells and no
    /// `.` null template cells.
    fn fits(&self, area: &GridArea) -> bool {
        for row in area.row_start..area.row_end {
            for column in area.column_start..area.column_end {
                if self.cells.contains(&(row, column)) {
                    return false;
                }
                if self.template.is_some_and(|template| template.is_null(row, column)) {
                    return false;
                }
            }
        }
        true
    }
}

/// Compose a grid area from flow-axis coordinates. In row flow the major
/// (growing) axis is rows and the minor (wrapping) axis is columns; column
/// flow swaps them.
const fn flow_area(
    is_row_flow: bool,
    major_start: usize,
    major_span: usize,
    minor_start: usize,
    minor_span: usize,
) -> GridArea {
    if is_row_flow {
        GridArea {
            row_start: major_start,
            row_end: major_start + major_span,
            column_start: minor_start,
            column_end: minor_start + minor_span,
        }
    } else {
        GridArea {
            row_start: minor_start,
            row_end: minor_start + minor_span,
            column_start: major_start,
            column_end: major_start + major_span,
        }
    }
}

/// Resolve every item to a definite grid area.
///
/// Spec: <https://www.w3.org/TR/css-grid-2/#auto-placement-algo>
///
/// Placement runs in four passes in document order:
/// 1. items definite in both axes,
/// 2. items definite in the flow's major axis (scanned along the minor axis),
/// 3. the minor-axis extent of the implicit grid is locked in,
/// 4. remaining items via the placement cursor (sparse) or rescans (dense).
pub fn place_grid_items<NodeId>(
    items: &[GridItem<NodeId>],
    inputs: &PlacementInputs,
) -> PlacementResult {
    let is_row_flow = inputs.auto_flow.is_row();
    let dense = inputs.auto_flow.is_dense();

    // Per-axis resolution, consulting the template areas for `grid-area`
    // names. An undefined area name falls back to auto-placement.
    let resolved: Vec<(AxisPlacement, AxisPlacement)> = items
        .iter()
        .map(|item| {
            if let Some(name) = &item.area_name
                && let Some(area) = inputs.areas.as_ref().and_then(|areas| areas.area(name))
            {
                return (
                    AxisPlacement::Definite {
                        start: area.row_start,
                        end: area.row_end,
                    },
                    AxisPlacement::Definite {
                        start: area.column_start,
                        end: area.column_end,
                    },
                );
            }
            (
                resolve_axis(
                    &item.row_start,
                    &item.row_end,
                    inputs.explicit_rows,
                    &inputs.row_names,
                ),
                resolve_axis(
                    &item.column_start,
                    &item.column_end,
                    inputs.explicit_columns,
                    &inputs.column_names,
                ),
            )
        })
        .collect();

    let mut occupancy = Occupancy {
        cells: HashSet::new(),
        template: inputs.areas.as_ref(),
    };
    let mut placed: Vec<Option<GridArea>> = vec![None; items.len()];

    // Pass 1: fully definite items. Overlap is allowed for explicit
    // placement; the cells are still marked so auto items avoid them.
    for (index, (rows, columns)) in resolved.iter().enumerate() {
        if let (
            AxisPlacement::Definite {
                start: row_start,
                end: row_end,
            },
            AxisPlacement::Definite {
                start: column_start,
                end: column_end,
            },
        ) = (rows, columns)
        {
            let area = GridArea::new(*row_start, *row_end, *column_start, *column_end);
            trace!(target: "css::grid", "item {index} explicitly placed at {area:?}");
            occupancy.mark(&area);
            placed[index] = Some(area);
        }
    }

    let explicit_minor = if is_row_flow {
        inputs.explicit_columns
    } else {
        inputs.explicit_rows
    };
    let major_of = |rows: AxisPlacement, columns: AxisPlacement| {
        if is_row_flow { rows } else { columns }
    };
    let minor_of = |rows: AxisPlacement, columns: AxisPlacement| {
        if is_row_flow { columns } else { rows }
    };

    // Pass 2: items locked to a major-axis position, scanned along the
    // minor axis. Sparse flow carries one cursor per starting line.
    let mut line_cursors: HashMap<usize, usize> = HashMap::new();
    for (index, (rows, columns)) in resolved.iter().enumerate() {
        if placed[index].is_some() {
            continue;
        }
        let AxisPlacement::Definite {
            start: major_start,
            end: major_end,
        } = major_of(*rows, *columns)
        else {
            continue;
        };
        let minor_span = minor_of(*rows, *columns).span();
        let mut minor = if dense {
            1
        } else {
            line_cursors.get(&major_start).copied().unwrap_or(1)
        };
        // Implicit minor tracks are created freely past any blocked cells,
        // so this scan always terminates.
        let area = loop {
            let candidate = flow_area(
                is_row_flow,
                major_start,
                major_end - major_start,
                minor,
                minor_span,
            );
            if occupancy.fits(&candidate) {
                break candidate;
            }
            minor += 1;
        };
        trace!(target: "css::grid", "item {index} locked to major line {major_start}, placed at {area:?}");
        occupancy.mark(&area);
        placed[index] = Some(area);
        if !dense {
            line_cursors.insert(major_start, minor + minor_span);
        }
    }

    // Pass 3: the minor axis of the implicit grid is now fixed; auto
    // placement wraps at this many tracks.
    let minor_extent = {
        let mut extent = explicit_minor;
        for area in placed.iter().flatten() {
            let end = if is_row_flow { area.column_end } else { area.row_end };
            extent = extent.max(end.saturating_sub(1));
        }
        extent.max(1)
    };

    // Pass 4: remaining items via the auto-placement cursor.
    let mut cursor_major = 1_usize;
    let mut cursor_minor = 1_usize;
    for (index, (rows, columns)) in resolved.iter().enumerate() {
        if placed[index].is_some() {
            continue;
        }
        let major_span = major_of(*rows, *columns).span();
        let minor_placement = minor_of(*rows, *columns);
        let area = match minor_placement {
            AxisPlacement::Definite {
                start: minor_start,
                end: minor_end,
            } => {
                // Definite minor position: move the cursor to that line
                // (advancing the major axis when it would move backwards)
                // and scan down the major axis.
                let mut major = if dense {
                    1
                } else {
                    if minor_start < cursor_minor {
                        cursor_major += 1;
                    }
                    cursor_major
                };
                let area = loop {
                    let candidate = flow_area(
                        is_row_flow,
                        major,
                        major_span,
                        minor_start,
                        minor_end - minor_start,
                    );
                    if occupancy.fits(&candidate) {
                        break candidate;
                    }
                    major += 1;
                };
                if !dense {
                    cursor_major = major;
                    cursor_minor = minor_end;
                }
                area
            }
            AxisPlacement::Auto { span: minor_span } => {
                // Spans wider than the implicit grid overflow it rather than
                // wrapping forever.
                let wrap_at = minor_extent.max(minor_span);
                let (mut major, mut minor) = if dense {
                    (1, 1)
                } else {
                    (cursor_major, cursor_minor)
                };
                let area = loop {
                    if minor + minor_span - 1 > wrap_at {
                        major += 1;
                        minor = 1;
                        continue;
                    }
                    let candidate =
                        flow_area(is_row_flow, major, major_span, minor, minor_span);
                    if occupancy.fits(&candidate) {
                        break candidate;
                    }
                    minor += 1;
                };
                if !dense {
                    cursor_major = if is_row_flow { area.row_start } else { area.column_start };
                    cursor_minor = if is_row_flow { area.column_end } else { area.row_end };
                }
                area
            }
        };
        trace!(target: "css::grid", "item {index} auto-placed at {area:?}");
        occupancy.mark(&area);
        placed[index] = Some(area);
    }

    let mut row_count = inputs.explicit_rows;
    let mut column_count = inputs.explicit_columns;
    let areas: Vec<GridArea> = placed
        .into_iter()
        .map(|area| {
            // Every item was placed by one of the passes above.
            let area = area.unwrap_or(GridArea::new(1, 2, 1, 2));
            row_count = row_count.max(area.row_end.saturating_sub(1));
            column_count = column_count.max(area.column_end.saturating_sub(1));
            area
        })
        .collect();
    debug!(
        target: "css::grid",
        "[PLACEMENT] {} items -> {row_count} rows x {column_count} columns ({:?})",
        areas.len(),
        inputs.auto_flow
    );
    PlacementResult {
        areas,
        row_count,
        column_count,
    }
}
