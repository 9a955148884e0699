//! Core types shared by the box-layout modules.
//!
//! This crate holds the geometry primitives, the subpixel quantization model,
//! node handles, and the measurement contract through which the text/leaf
//! subsystem reports intrinsic sizes. It deliberately contains no layout
//! algorithms; those live in the per-module crates.

mod geometry;
mod measure;

pub use geometry::{Edges, Point, Rect, Size, quantize_layout, quantize_layout_floor};
pub use measure::{AvailableSpace, AvailableSpace2, Measure, Measurement};

/// Opaque handle identifying a box in the styled tree.
///
/// The kernel never dereferences these; they flow from the caller's tree into
/// the per-child geometry results unchanged.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeKey(pub u64);

impl NodeKey {
    /// Conventional root handle.
    pub const ROOT: Self = Self(0);
}
