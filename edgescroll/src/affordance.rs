use std::time::Instant;

use crate::edge::Edge;
use crate::transitions::{TransitionConfig, Tween};

/// Fading overlay that signals more content beyond an edge.
#[derive(Debug, Clone)]
pub struct Gradient {
    edge: Edge,
    rendered: bool,
    active: bool,
    fade: Option<Tween>,
    transition: TransitionConfig,
}

impl Gradient {
    pub fn new(edge: Edge, rendered: bool, transition: TransitionConfig) -> Self {
        Self {
            edge,
            rendered,
            active: false,
            fade: None,
            transition,
        }
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// False when gradients are suppressed; such a gradient paints nothing.
    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    /// Whether the gradient is (or is fading toward being) visible.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns true if the target state changed. Repeating the current state
    /// leaves any running fade untouched.
    pub fn set_active(&mut self, active: bool, now: Instant) -> bool {
        if active == self.active {
            return false;
        }
        let from = self.opacity_at(now);
        let to = if active { 1.0 } else { 0.0 };
        self.fade = Some(Tween::new(from, to, self.transition).starting_at(now));
        self.active = active;
        true
    }

    /// Opacity at `now`, in `0.0..=1.0`.
    pub fn opacity_at(&self, now: Instant) -> f32 {
        if !self.rendered {
            return 0.0;
        }
        match self.fade {
            Some(fade) => fade.value_at(now),
            None if self.active => 1.0,
            None => 0.0,
        }
    }

    pub fn is_fading(&self, now: Instant) -> bool {
        self.rendered && self.fade.is_some_and(|f| !f.is_finished(now))
    }

    /// Drop a finished fade so it no longer has to be sampled.
    pub(crate) fn settle(&mut self, now: Instant) {
        if self.fade.is_some_and(|f| f.is_finished(now)) {
            self.fade = None;
        }
    }
}

/// Click target that scrolls half a viewport toward its edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButton {
    edge: Edge,
    visible: bool,
    armed: bool,
}

impl NavButton {
    pub fn new(edge: Edge, visible: bool) -> Self {
        Self {
            edge,
            visible,
            armed: false,
        }
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Visibility follows configuration only, never edge state.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether a click handler is attached.
    pub fn is_interactive(&self) -> bool {
        self.armed
    }

    pub(crate) fn arm(&mut self) {
        self.armed = true;
    }

    pub(crate) fn disarm(&mut self) {
        self.armed = false;
    }

    /// Signed scroll distance for one click in a viewport of `client_width`.
    pub fn scroll_delta(&self, client_width: f32) -> f32 {
        self.edge.direction() * client_width / 2.0
    }
}
