use std::time::Instant;

use log::debug;

use crate::affordance::Gradient;
use crate::edge::{Edge, EdgeChange, EdgeState, EdgeStatus};
use crate::observer::VisibilityEntry;
use crate::transitions::TransitionConfig;

/// Owns the edge state and keeps the gradients in line with it.
#[derive(Debug, Clone)]
pub struct AffordanceSynchronizer {
    state: EdgeState,
    left: Gradient,
    right: Gradient,
}

impl AffordanceSynchronizer {
    pub fn new(transition: TransitionConfig, render_gradients: bool) -> Self {
        Self {
            state: EdgeState::new(),
            left: Gradient::new(Edge::Left, render_gradients, transition),
            right: Gradient::new(Edge::Right, render_gradients, transition),
        }
    }

    pub fn state(&self) -> EdgeState {
        self.state
    }

    pub fn gradient(&self, edge: Edge) -> &Gradient {
        match edge {
            Edge::Left => &self.left,
            Edge::Right => &self.right,
        }
    }

    fn gradient_mut(&mut self, edge: Edge) -> &mut Gradient {
        match edge {
            Edge::Left => &mut self.left,
            Edge::Right => &mut self.right,
        }
    }

    /// Apply one observer batch. Entries are matched by target, not position.
    ///
    /// Returns the edges whose flag actually flipped.
    pub fn apply(&mut self, entries: &[VisibilityEntry], now: Instant) -> Vec<EdgeChange> {
        let mut changes = Vec::new();

        for entry in entries {
            let status = EdgeStatus::from_intersecting(entry.is_intersecting);
            let changed = self.state.set(entry.target, status);
            self.gradient_mut(entry.target)
                .set_active(!status.is_at_edge(), now);

            if changed {
                debug!("{} edge: {:?}", entry.target, status);
                changes.push(EdgeChange {
                    edge: entry.target,
                    at_edge: status.is_at_edge(),
                });
            }
        }

        changes
    }

    pub fn is_fading(&self, now: Instant) -> bool {
        self.left.is_fading(now) || self.right.is_fading(now)
    }

    pub(crate) fn settle(&mut self, now: Instant) {
        self.left.settle(now);
        self.right.settle(now);
    }
}
