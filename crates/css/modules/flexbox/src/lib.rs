//! CSS Flexible Box Layout Module Level 1
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>
//!
//! One-dimensional layout along a main axis: line building, flexible length
//! resolution (grow/shrink with the freeze loop), cross sizing, and main/cross
//! alignment including auto margins.

mod types;
pub use types::{FlexDirection, FlexItem, FlexWrap};

// Line building (wrapping)
mod lines;
pub use lines::break_into_lines;

// Flexible length resolution
mod resolve;
pub use resolve::resolve_flexible_lengths;

// Cross sizing and per-line alignment
mod cross;

// Container layout
mod layout;
pub use layout::{FlexContainerInputs, FlexLayoutResult, FlexPlacedItem, layout_flex};
