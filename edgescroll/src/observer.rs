//! Viewport-intersection watcher for edge sentinels.
//!
//! The observer does not follow scroll deltas. Each time the host lays out a
//! frame it compares the current visibility of every observed sentinel with
//! what it last reported, and hands back only the sentinels whose state
//! crossed the threshold. Jumps, programmatic scrolls and resizes all look
//! the same to it.

use log::{debug, trace};

use crate::edge::Edge;
use crate::region::ScrollRegion;
use crate::sentinel::EdgeSentinel;

/// Intersection ratio at which a sentinel counts as visible.
pub const FULL_VISIBILITY: f32 = 1.0;

/// One sentinel whose visibility changed since the previous report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEntry {
    pub target: Edge,
    pub is_intersecting: bool,
    pub intersection_ratio: f32,
}

#[derive(Debug, Clone, Copy)]
struct Observation {
    sentinel: EdgeSentinel,
    /// `None` until the first report, which always includes this target.
    last: Option<bool>,
}

/// Reports threshold crossings of sentinels inside a [`ScrollRegion`].
#[derive(Debug)]
pub struct VisibilityObserver {
    threshold: f32,
    targets: Vec<Observation>,
    connected: bool,
}

impl VisibilityObserver {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            targets: Vec::with_capacity(2),
            connected: true,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Start watching a sentinel. Observing the same edge twice is a no-op.
    pub fn observe(&mut self, sentinel: EdgeSentinel) {
        if !self.connected {
            debug!("observe({}) on a disconnected observer", sentinel.edge());
            return;
        }
        if self.is_observing(sentinel.edge()) {
            return;
        }
        trace!("observing {} sentinel", sentinel.edge());
        self.targets.push(Observation {
            sentinel,
            last: None,
        });
    }

    pub fn unobserve(&mut self, edge: Edge) {
        self.targets.retain(|o| o.sentinel.edge() != edge);
    }

    pub fn is_observing(&self, edge: Edge) -> bool {
        self.targets.iter().any(|o| o.sentinel.edge() == edge)
    }

    pub fn observed_count(&self) -> usize {
        self.targets.len()
    }

    /// Stop all observation. Later calls to `take_records` return nothing.
    pub fn disconnect(&mut self) {
        if self.connected {
            debug!("visibility observer disconnected");
        }
        self.targets.clear();
        self.connected = false;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Evaluate all targets against the current layout.
    ///
    /// Returns one entry per target whose intersecting state differs from
    /// the last report. The first call after `observe` reports every target.
    pub fn take_records(&mut self, region: &ScrollRegion) -> Vec<VisibilityEntry> {
        let mut entries = Vec::new();
        if !self.connected {
            return entries;
        }

        for observation in &mut self.targets {
            let (start, end) = observation.sentinel.bounds(region);
            let ratio = intersection_ratio(start, end, region);
            let intersecting = ratio >= self.threshold;

            if observation.last == Some(intersecting) {
                continue;
            }
            observation.last = Some(intersecting);
            entries.push(VisibilityEntry {
                target: observation.sentinel.edge(),
                is_intersecting: intersecting,
                intersection_ratio: ratio,
            });
        }

        if !entries.is_empty() {
            trace!("visibility batch: {:?}", entries);
        }
        entries
    }
}

/// Fraction of the span `start..end` inside the visible part of `region`.
///
/// A zero-width span counts as fully visible when it lies within the
/// viewport, boundaries included, and as invisible otherwise.
pub fn intersection_ratio(start: f32, end: f32, region: &ScrollRegion) -> f32 {
    let (view_start, view_end) = region.visible_range();
    let width = end - start;

    if width <= 0.0 {
        return if start >= view_start && start <= view_end {
            1.0
        } else {
            0.0
        };
    }

    let overlap = end.min(view_end) - start.max(view_start);
    (overlap / width).clamp(0.0, 1.0)
}
