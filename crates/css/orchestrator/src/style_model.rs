//! Computed-style snapshots consumed by the layout kernel.
//!
//! The cascade happens upstream; these structs carry only the used values
//! layout needs. Percentages arrive unresolved (as 0.0..=1.0 fractions in the
//! `*_percent` fields) because their basis depends on the containing block,
//! which only layout knows.

use css_align::{ContentAlignment, ItemAlignment};
use css_core::AvailableSpace;
use css_flexbox::{FlexDirection, FlexWrap};
use css_grid::{GridAutoFlow, GridLine, GridTrackSize, NamedLines, TemplateAreas};
use css_sizing::AspectRatio;

/// The formatting context a container establishes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FormattingContext {
    Grid,
    Flex,
}

/// The `position` property subset the kernel handles.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
}

impl Position {
    pub const fn is_positioned(self) -> bool {
        !matches!(self, Self::Static)
    }

    pub const fn is_out_of_flow(self) -> bool {
        matches!(self, Self::Absolute)
    }
}

/// Per-child computed style snapshot.
#[derive(Clone, Debug)]
pub struct ComputedStyle {
    pub position: Position,
    /// `None` is `z-index: auto`.
    pub z_index: Option<i32>,
    /// Whether the external style resolver determined this box starts a new
    /// stacking context.
    pub establishes_context: bool,

    pub width: Option<f32>,
    pub width_percent: Option<f32>,
    pub height: Option<f32>,
    pub height_percent: Option<f32>,
    pub min_width: Option<f32>,
    pub max_width: Option<f32>,
    pub min_height: Option<f32>,
    pub max_height: Option<f32>,
    pub aspect_ratio: Option<AspectRatio>,

    // Inset properties; used by relative and absolute positioning.
    pub left: Option<f32>,
    pub left_percent: Option<f32>,
    pub right: Option<f32>,
    pub right_percent: Option<f32>,
    pub top: Option<f32>,
    pub top_percent: Option<f32>,
    pub bottom: Option<f32>,
    pub bottom_percent: Option<f32>,

    /// Margins; `None` is `auto`.
    pub margin_left: Option<f32>,
    pub margin_right: Option<f32>,
    pub margin_top: Option<f32>,
    pub margin_bottom: Option<f32>,

    // Grid item placement
    pub grid_row_start: GridLine,
    pub grid_row_end: GridLine,
    pub grid_column_start: GridLine,
    pub grid_column_end: GridLine,
    pub grid_area: Option<String>,
    pub justify_self: Option<ItemAlignment>,
    pub align_self: Option<ItemAlignment>,

    // Flex item properties
    pub order: i32,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: Option<f32>,
    pub flex_basis_percent: Option<f32>,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            position: Position::Static,
            z_index: None,
            establishes_context: false,
            width: None,
            width_percent: None,
            height: None,
            height_percent: None,
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
            aspect_ratio: None,
            left: None,
            left_percent: None,
            right: None,
            right_percent: None,
            top: None,
            top_percent: None,
            bottom: None,
            bottom_percent: None,
            // Initial margins are 0, not auto.
            margin_left: Some(0.0),
            margin_right: Some(0.0),
            margin_top: Some(0.0),
            margin_bottom: Some(0.0),
            grid_row_start: GridLine::Auto,
            grid_row_end: GridLine::Auto,
            grid_column_start: GridLine::Auto,
            grid_column_end: GridLine::Auto,
            grid_area: None,
            justify_self: None,
            align_self: None,
            order: 0,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: None,
            flex_basis_percent: None,
        }
    }
}

/// Container-level style for one layout request.
#[derive(Clone, Debug)]
pub struct ContainerStyle {
    pub context: FormattingContext,
    /// The container's content-box extent per axis.
    pub available_width: AvailableSpace,
    pub available_height: AvailableSpace,
    pub row_gap: f32,
    pub column_gap: f32,
    pub justify_content: ContentAlignment,
    pub align_content: ContentAlignment,
    pub justify_items: ItemAlignment,
    pub align_items: ItemAlignment,

    // Grid container properties
    pub template_rows: Vec<GridTrackSize>,
    pub template_columns: Vec<GridTrackSize>,
    pub auto_rows: Vec<GridTrackSize>,
    pub auto_columns: Vec<GridTrackSize>,
    pub auto_flow: GridAutoFlow,
    pub row_names: NamedLines,
    pub column_names: NamedLines,
    pub areas: Option<TemplateAreas>,

    // Flex container properties
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
}

impl ContainerStyle {
    /// A grid container with initial values (`normal` content alignment
    /// behaves as `stretch` for grid tracks).
    pub fn grid() -> Self {
        Self {
            context: FormattingContext::Grid,
            available_width: AvailableSpace::Indefinite,
            available_height: AvailableSpace::Indefinite,
            row_gap: 0.0,
            column_gap: 0.0,
            justify_content: ContentAlignment::Stretch,
            align_content: ContentAlignment::Stretch,
            justify_items: ItemAlignment::Stretch,
            align_items: ItemAlignment::Stretch,
            template_rows: Vec::new(),
            template_columns: Vec::new(),
            auto_rows: Vec::new(),
            auto_columns: Vec::new(),
            auto_flow: GridAutoFlow::Row,
            row_names: NamedLines::new(),
            column_names: NamedLines::new(),
            areas: None,
            direction: FlexDirection::Row,
            wrap: FlexWrap::NoWrap,
        }
    }

    /// A flex container with initial values (`justify-content: normal`
    /// behaves as `flex-start`).
    pub fn flex() -> Self {
        Self {
            context: FormattingContext::Flex,
            justify_content: ContentAlignment::Start,
            align_content: ContentAlignment::Stretch,
            ..Self::grid()
        }
    }
}
