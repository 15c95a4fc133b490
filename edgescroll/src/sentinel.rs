//! Zero-size markers at the content boundaries.
//!
//! A sentinel flush with the viewport boundary can sit exactly on the edge of
//! the intersection test and never cross it, so both markers are pulled
//! inward by [`SENTINEL_INSET`].

use crate::edge::Edge;
use crate::region::ScrollRegion;

/// Distance between a sentinel and the true content edge.
pub const SENTINEL_INSET: f32 = 1.0;

/// A zero-width marker anchored at one edge of the scroll content.
///
/// Sentinels take no layout space and are never hit-test targets; they move
/// with the content because they are its first and last children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSentinel {
    edge: Edge,
}

impl EdgeSentinel {
    pub fn new(edge: Edge) -> Self {
        Self { edge }
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Position in content coordinates.
    pub fn position(&self, region: &ScrollRegion) -> f32 {
        let extent = region.scroll_width();
        let x = match self.edge {
            Edge::Left => SENTINEL_INSET,
            Edge::Right => extent - SENTINEL_INSET,
        };
        x.clamp(0.0, extent)
    }

    /// Horizontal bounds, `(start, end)`. Always zero width.
    pub fn bounds(&self, region: &ScrollRegion) -> (f32, f32) {
        let x = self.position(region);
        (x, x)
    }
}

/// The left and right sentinel of one scroll region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentinels {
    pub left: EdgeSentinel,
    pub right: EdgeSentinel,
}

impl Sentinels {
    pub fn place() -> Self {
        Self {
            left: EdgeSentinel::new(Edge::Left),
            right: EdgeSentinel::new(Edge::Right),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = EdgeSentinel> {
        [self.left, self.right].into_iter()
    }
}

impl Default for Sentinels {
    fn default() -> Self {
        Self::place()
    }
}
