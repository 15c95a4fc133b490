//! The scroll container with edge detection.

use std::fmt;
use std::time::Instant;

use log::{debug, trace};

use crate::affordance::{Gradient, NavButton};
use crate::config::ScrollableConfig;
use crate::edge::{Edge, EdgeChange, EdgeState};
use crate::event::EventResult;
use crate::observer::{VisibilityObserver, FULL_VISIBILITY};
use crate::region::{ScrollBehavior, ScrollRegion};
use crate::sentinel::Sentinels;
use crate::synchronizer::AffordanceSynchronizer;

/// Callback invoked when an edge flag flips.
pub type EdgeListener = Box<dyn FnMut(EdgeChange)>;

/// A horizontally scrollable container that tracks whether each edge of its
/// content has been reached and drives the gradient overlays and navigation
/// buttons from that state.
///
/// The host owns the controller on its UI thread and calls [`frame`] once
/// per layout/paint cycle. Scrolls and resizes only mark the layout dirty;
/// edge state is recomputed inside `frame`, so several boundary crossings
/// between two frames arrive as one batch.
///
/// # Example
///
/// ```
/// use std::time::Instant;
/// use edgescroll::{Edge, ScrollEdgeController, ScrollableConfig};
///
/// let mut scrollable = ScrollEdgeController::new(ScrollableConfig::default());
/// scrollable.mount(1000.0, 400.0);
/// scrollable.frame(Instant::now());
///
/// assert!(scrollable.at_left_edge());
/// assert!(!scrollable.at_right_edge());
/// assert!(scrollable.gradient(Edge::Right).is_active());
/// ```
///
/// [`frame`]: ScrollEdgeController::frame
pub struct ScrollEdgeController {
    config: ScrollableConfig,
    region: Option<ScrollRegion>,
    sentinels: Sentinels,
    observer: Option<VisibilityObserver>,
    synchronizer: AffordanceSynchronizer,
    left_button: NavButton,
    right_button: NavButton,
    listeners: Vec<EdgeListener>,
}

impl ScrollEdgeController {
    pub fn new(config: ScrollableConfig) -> Self {
        let synchronizer =
            AffordanceSynchronizer::new(config.style.transition(), !config.hide_gradients);
        let buttons_visible = !config.hide_buttons;

        Self {
            region: None,
            sentinels: Sentinels::place(),
            observer: None,
            synchronizer,
            left_button: NavButton::new(Edge::Left, buttons_visible),
            right_button: NavButton::new(Edge::Right, buttons_visible),
            listeners: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &ScrollableConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// First render: create the scroll region and, unless gradients are
    /// hidden, start observing the sentinels and attach the button handlers.
    pub fn mount(&mut self, content_width: f32, client_width: f32) {
        if self.region.is_some() {
            debug!("mount called on an already mounted scrollable");
            return;
        }
        self.region = Some(ScrollRegion::new(content_width, client_width));

        if self.config.hide_gradients {
            debug!("scrollable mounted without edge detection");
            return;
        }

        let mut observer = VisibilityObserver::new(FULL_VISIBILITY);
        for sentinel in self.sentinels.iter() {
            observer.observe(sentinel);
        }
        self.observer = Some(observer);

        if !self.config.hide_buttons {
            self.left_button.arm();
            self.right_button.arm();
        }

        debug!(
            "scrollable mounted: content={content_width} client={client_width} buttons={}",
            !self.config.hide_buttons
        );
    }

    pub fn is_mounted(&self) -> bool {
        self.region.is_some()
    }

    /// Release the observer, button handlers and listeners.
    ///
    /// Safe to call more than once, and before or without `mount`. Also runs
    /// on drop.
    pub fn teardown(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
        self.left_button.disarm();
        self.right_button.disarm();
        self.listeners.clear();

        if self.region.take().is_some() {
            debug!("scrollable torn down");
        }
    }

    /// Register a listener for edge flag changes.
    pub fn subscribe(&mut self, listener: impl FnMut(EdgeChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // -------------------------------------------------------------------------
    // Frame
    // -------------------------------------------------------------------------

    /// Run one layout/paint cycle.
    ///
    /// Advances smooth scrolling, then, if the layout changed since the last
    /// frame, delivers the observer's batch to the synchronizer and notifies
    /// listeners. Returns true while something is still animating.
    pub fn frame(&mut self, now: Instant) -> bool {
        let Some(region) = self.region.as_mut() else {
            return false;
        };

        region.tick(now);

        if region.take_layout_dirty() {
            if let Some(observer) = self.observer.as_mut() {
                let entries = observer.take_records(region);
                if !entries.is_empty() {
                    let changes = self.synchronizer.apply(&entries, now);
                    for listener in &mut self.listeners {
                        for change in &changes {
                            listener(*change);
                        }
                    }
                }
            }
        }

        self.synchronizer.settle(now);
        region.is_animating() || self.synchronizer.is_fading(now)
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Navigation button click. Starts a smooth scroll of half the viewport
    /// toward `edge`; the edge state follows on a later frame.
    pub fn click(&mut self, edge: Edge) -> EventResult {
        let button = *self.button(edge);
        if !button.is_interactive() {
            trace!("{edge} button is not interactive");
            return EventResult::Ignored;
        }
        let Some(region) = self.region.as_mut() else {
            return EventResult::Ignored;
        };

        let delta = button.scroll_delta(region.client_width());
        debug!("{edge} button: scroll by {delta}");
        region.scroll_by(delta, ScrollBehavior::Smooth);
        EventResult::Consumed
    }

    /// Native scroll input (wheel, trackpad, keys).
    pub fn scroll_by(&mut self, dx: f32) -> EventResult {
        let Some(region) = self.region.as_mut() else {
            return EventResult::Ignored;
        };
        if region.scroll_by(dx, ScrollBehavior::Instant) {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    /// Programmatic scroll to an absolute offset.
    pub fn scroll_to(&mut self, x: f32, behavior: ScrollBehavior) {
        if let Some(region) = self.region.as_mut() {
            region.scroll_to(x, behavior);
        }
    }

    /// Content was inserted, removed or resized.
    pub fn set_content_width(&mut self, width: f32) {
        if let Some(region) = self.region.as_mut() {
            region.set_content_width(width);
        }
    }

    /// The viewport was resized.
    pub fn set_client_width(&mut self, width: f32) {
        if let Some(region) = self.region.as_mut() {
            region.set_client_width(width);
        }
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    pub fn region(&self) -> Option<&ScrollRegion> {
        self.region.as_ref()
    }

    pub fn sentinels(&self) -> &Sentinels {
        &self.sentinels
    }

    /// Whether a visibility observer is currently installed.
    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    pub fn edge_state(&self) -> EdgeState {
        self.synchronizer.state()
    }

    pub fn at_left_edge(&self) -> bool {
        self.edge_state().at_left_edge()
    }

    pub fn at_right_edge(&self) -> bool {
        self.edge_state().at_right_edge()
    }

    pub fn gradient(&self, edge: Edge) -> &Gradient {
        self.synchronizer.gradient(edge)
    }

    pub fn button(&self, edge: Edge) -> &NavButton {
        match edge {
            Edge::Left => &self.left_button,
            Edge::Right => &self.right_button,
        }
    }
}

impl fmt::Debug for ScrollEdgeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollEdgeController")
            .field("config", &self.config)
            .field("region", &self.region)
            .field("observer", &self.observer)
            .field("state", &self.synchronizer.state())
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Drop for ScrollEdgeController {
    fn drop(&mut self) {
        self.teardown();
    }
}
