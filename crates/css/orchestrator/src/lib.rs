//! Layout-request orchestration for the Grid/Flexbox box-layout kernel.
//!
//! One request lays out one container: ordered children with computed styles
//! plus a [`Measure`] callback for leaf content. The output is a border-box
//! rect and a paint-order index per child, plus the container's resolved
//! content-box size. Layout is synchronous and re-entrant: measuring a nested
//! container is expected to recurse into `layout_container` for it.
//!
//! Author-level style input never fails; [`layout_container`] errors only on
//! API misuse (a child without a style entry).

mod style_model;
pub use style_model::{ComputedStyle, ContainerStyle, FormattingContext, Position};

mod flex_request;
mod grid_request;
mod out_of_flow;

// Re-exported so embedders can build requests from one crate.
pub use css_core::{
    AvailableSpace, AvailableSpace2, Measure, Measurement, NodeKey, Point, Rect, Size,
};

use std::collections::HashMap;

use anyhow::{Context as _, Result};
use css_position::relative_offset;
use css_stacking::{StackingLevel, establishes_context, paint_order};
use log::debug;

/// One layout request: a container and its children in document order.
#[derive(Clone, Debug)]
pub struct LayoutInput {
    pub container: ContainerStyle,
    pub children: Vec<NodeKey>,
    pub styles: HashMap<NodeKey, ComputedStyle>,
}

/// Geometry and paint position of one child.
#[derive(Copy, Clone, Debug)]
pub struct ChildLayout {
    pub node: NodeKey,
    /// Border-box rect in container content-box coordinates.
    pub rect: Rect,
    /// Back-to-front paint position among the container's children.
    pub paint_order: usize,
    /// Whether this child starts a new stacking context. Embedders painting
    /// nested containers paint such a subtree atomically at this child's
    /// position instead of interleaving its descendants with the siblings.
    pub establishes_context: bool,
}

/// The result of laying out one container.
#[derive(Clone, Debug)]
pub struct LayoutOutput {
    children: Vec<ChildLayout>,
    /// The container's resolved content-box size.
    pub content_size: Size,
}

impl LayoutOutput {
    /// Children in document order.
    pub fn children(&self) -> &[ChildLayout] {
        &self.children
    }

    /// The rect of `node`, mirroring a `getBoundingClientRect()` read.
    pub fn rect_of(&self, node: NodeKey) -> Option<Rect> {
        self.children
            .iter()
            .find(|child| child.node == node)
            .map(|child| child.rect)
    }

    /// Children sorted back-to-front for painting.
    pub fn paint_sequence(&self) -> Vec<NodeKey> {
        let mut sequence: Vec<&ChildLayout> = self.children.iter().collect();
        sequence.sort_by_key(|child| child.paint_order);
        sequence.into_iter().map(|child| child.node).collect()
    }
}

/// Resolve a length: a pixel value wins, otherwise a percentage against the
/// basis; an indefinite basis leaves percentages unresolved (`auto`).
pub(crate) fn resolve_size(
    px: Option<f32>,
    percent: Option<f32>,
    basis: Option<f32>,
) -> Option<f32> {
    px.or_else(|| percent.zip(basis).map(|(fraction, basis)| fraction * basis))
}

/// Lay out one container.
///
/// # Errors
/// Returns an error when a child has no entry in `styles`; author-level
/// style values themselves never fail (contradictions normalize).
pub fn layout_container(input: &LayoutInput, measure: &mut dyn Measure) -> Result<LayoutOutput> {
    let styled: Vec<(NodeKey, &ComputedStyle)> = input
        .children
        .iter()
        .map(|&node| {
            input
                .styles
                .get(&node)
                .map(|style| (node, style))
                .with_context(|| format!("no computed style for child {node:?}"))
        })
        .collect::<Result<_>>()?;

    let in_flow: Vec<(NodeKey, &ComputedStyle)> = styled
        .iter()
        .copied()
        .filter(|&(_, style)| !style.position.is_out_of_flow())
        .collect();

    let (in_flow_rects, content, grid_result) = match input.container.context {
        FormattingContext::Grid => {
            let outcome = grid_request::run_grid(&input.container, &in_flow, measure);
            (outcome.rects, outcome.content, Some(outcome.result))
        }
        FormattingContext::Flex => {
            let outcome = flex_request::run_flex(&input.container, &in_flow, measure);
            (outcome.rects, outcome.content, None)
        }
    };
    debug_assert_eq!(in_flow_rects.len(), in_flow.len());

    // The container's content box: a definite requested extent wins, an
    // indefinite axis sizes to content.
    let content_box = Size::new(
        input
            .container
            .available_width
            .definite()
            .unwrap_or(content.width),
        input
            .container
            .available_height
            .definite()
            .unwrap_or(content.height),
    );

    let rect_by_node: HashMap<NodeKey, Rect> = in_flow
        .iter()
        .map(|&(node, _)| node)
        .zip(in_flow_rects)
        .collect();

    let mut children = Vec::with_capacity(styled.len());
    for &(node, style) in &styled {
        let rect = if style.position.is_out_of_flow() {
            out_of_flow::resolve(
                node,
                style,
                content_box,
                grid_result.as_ref(),
                &input.container,
                measure,
            )
        } else {
            let mut rect = rect_by_node.get(&node).copied().unwrap_or_default();
            if style.position == Position::Relative {
                // Relative positioning shifts after layout; siblings keep
                // their places.
                let offset = relative_offset(
                    resolve_size(style.left, style.left_percent, Some(content_box.width)),
                    resolve_size(style.right, style.right_percent, Some(content_box.width)),
                    resolve_size(style.top, style.top_percent, Some(content_box.height)),
                    resolve_size(style.bottom, style.bottom_percent, Some(content_box.height)),
                );
                rect.x += offset.x;
                rect.y += offset.y;
            }
            rect
        };
        let positioned = style.position.is_positioned();
        children.push(ChildLayout {
            node,
            rect,
            paint_order: 0,
            establishes_context: style.establishes_context
                || establishes_context(positioned, style.z_index),
        });
    }

    let levels: Vec<StackingLevel> = styled
        .iter()
        .map(|&(_, style)| StackingLevel::from_style(style.position.is_positioned(), style.z_index))
        .collect();
    for (rank, &doc_index) in paint_order(&levels).iter().enumerate() {
        children[doc_index].paint_order = rank;
    }

    debug!(
        target: "css::orchestrator",
        "[REQUEST] {:?} container, {} children -> content {content_box:?}",
        input.container.context,
        children.len()
    );
    Ok(LayoutOutput {
        children,
        content_size: content_box,
    })
}
