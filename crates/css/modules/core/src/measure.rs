//! Measurement contract between layout and the text/leaf subsystem.
//!
//! Intrinsic sizing of leaf content (text runs, replaced elements) is out of
//! scope for the kernel; it is consumed through the [`Measure`] callback.
//! Measuring an item that is itself a container is expected to recurse into a
//! full layout of that container, so implementations must be re-entrant.

use crate::NodeKey;

/// Available space along one axis while measuring or laying out.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum AvailableSpace {
    /// A definite extent in CSS pixels.
    Definite(f32),
    /// No constraint along this axis (e.g. height of an auto-sized block).
    #[default]
    Indefinite,
}

impl AvailableSpace {
    /// The definite extent, if any.
    pub const fn definite(self) -> Option<f32> {
        match self {
            Self::Definite(px) => Some(px),
            Self::Indefinite => None,
        }
    }

    /// Whether this axis has a definite extent.
    pub const fn is_definite(self) -> bool {
        matches!(self, Self::Definite(_))
    }
}

/// Available space in both axes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AvailableSpace2 {
    pub width: AvailableSpace,
    pub height: AvailableSpace,
}

impl AvailableSpace2 {
    /// Both axes indefinite (pure intrinsic measurement).
    pub const fn indefinite() -> Self {
        Self {
            width: AvailableSpace::Indefinite,
            height: AvailableSpace::Indefinite,
        }
    }

    /// Definite width, indefinite height.
    pub const fn definite_width(width: f32) -> Self {
        Self {
            width: AvailableSpace::Definite(width),
            height: AvailableSpace::Indefinite,
        }
    }
}

/// Intrinsic size report for one item.
///
/// All values are content-box sizes in CSS pixels. `preferred` is the size
/// the item would take given the passed available space (for a nested
/// container this is the result of laying it out under that constraint).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Measurement {
    /// Min-content width and height.
    pub min_content: crate::Size,
    /// Max-content width and height.
    pub max_content: crate::Size,
    /// Preferred size under the given available space.
    pub preferred: crate::Size,
}

/// Measurement callback supplied by the embedding engine.
///
/// The kernel never caches results across passes; every layout pass re-asks.
pub trait Measure {
    /// Measure `node` under `available` space.
    fn measure(&mut self, node: NodeKey, available: AvailableSpace2) -> Measurement;
}

impl<Callback> Measure for Callback
where
    Callback: FnMut(NodeKey, AvailableSpace2) -> Measurement,
{
    fn measure(&mut self, node: NodeKey, available: AvailableSpace2) -> Measurement {
        self(node, available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if closures are not usable as measurement callbacks.
    fn closures_implement_measure() {
        let mut calls = 0usize;
        let mut callback = |_node: NodeKey, _avail: AvailableSpace2| {
            calls += 1;
            Measurement::default()
        };
        let report = callback.measure(NodeKey(7), AvailableSpace2::indefinite());
        assert_eq!(report.preferred, crate::Size::zero());
        assert_eq!(calls, 1);
    }

    #[test]
    /// # Panics
    /// Panics if definite extraction misbehaves.
    fn available_space_definite() {
        assert_eq!(AvailableSpace::Definite(120.0).definite(), Some(120.0));
        assert_eq!(AvailableSpace::Indefinite.definite(), None);
        assert_eq!(AvailableSpace::default(), AvailableSpace::Indefinite);
    }
}
