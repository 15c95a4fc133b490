use std::time::{Duration, Instant};

use log::trace;

use crate::transitions::{Easing, TransitionConfig, Tween};

/// Animation used for `ScrollBehavior::Smooth`.
pub const SMOOTH_SCROLL: TransitionConfig =
    TransitionConfig::new(Duration::from_millis(200), Easing::EaseInOut);

/// How a programmatic scroll reaches its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump to the target on the spot.
    #[default]
    Instant,
    /// Animate toward the target over the following frames.
    Smooth,
}

/// The horizontally scrollable viewport.
///
/// Offsets are always clamped to `0..=max_scroll()`. Every change to the
/// geometry or the offset marks the layout dirty so the next frame
/// re-evaluates sentinel visibility.
#[derive(Debug, Clone)]
pub struct ScrollRegion {
    content_width: f32,
    client_width: f32,
    offset: f32,
    animation: Option<Tween>,
    smooth: TransitionConfig,
    layout_dirty: bool,
}

impl ScrollRegion {
    pub fn new(content_width: f32, client_width: f32) -> Self {
        Self {
            content_width: sanitize(content_width),
            client_width: sanitize(client_width),
            offset: 0.0,
            animation: None,
            smooth: SMOOTH_SCROLL,
            // The first frame after creation always lays out.
            layout_dirty: true,
        }
    }

    /// Override the animation used for smooth scrolls.
    pub fn with_smooth_scroll(mut self, config: TransitionConfig) -> Self {
        self.smooth = config;
        self
    }

    // -------------------------------------------------------------------------
    // Geometry
    // -------------------------------------------------------------------------

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    pub fn client_width(&self) -> f32 {
        self.client_width
    }

    pub fn scroll_offset(&self) -> f32 {
        self.offset
    }

    /// Width of the scrollable area; never smaller than the viewport.
    pub fn scroll_width(&self) -> f32 {
        self.content_width.max(self.client_width)
    }

    pub fn max_scroll(&self) -> f32 {
        self.scroll_width() - self.client_width
    }

    pub fn overflows(&self) -> bool {
        self.content_width > self.client_width
    }

    /// Visible span of content coordinates, `(start, end)`.
    pub fn visible_range(&self) -> (f32, f32) {
        (self.offset, self.offset + self.client_width)
    }

    /// Content was inserted, removed or resized.
    pub fn set_content_width(&mut self, width: f32) {
        let width = sanitize(width);
        if width == self.content_width {
            return;
        }
        self.content_width = width;
        self.reclamp();
        self.layout_dirty = true;
    }

    /// The viewport was resized.
    pub fn set_client_width(&mut self, width: f32) {
        let width = sanitize(width);
        if width == self.client_width {
            return;
        }
        self.client_width = width;
        self.reclamp();
        self.layout_dirty = true;
    }

    fn reclamp(&mut self) {
        self.offset = self.clamp(self.offset);
        if let Some(animation) = self.animation {
            let target = self.clamp(animation.target());
            if target != animation.target() {
                self.animation = Some(Tween::new(self.offset, target, self.smooth));
            }
        }
    }

    fn clamp(&self, x: f32) -> f32 {
        x.clamp(0.0, self.max_scroll())
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    /// Scroll to an absolute offset. Returns true if a scroll was started.
    pub fn scroll_to(&mut self, x: f32, behavior: ScrollBehavior) -> bool {
        if x.is_nan() {
            return false;
        }
        let target = self.clamp(x);

        // A new request always supersedes one still in flight.
        self.animation = None;

        if target == self.offset {
            return false;
        }

        match behavior {
            ScrollBehavior::Instant => {
                self.offset = target;
                self.layout_dirty = true;
            }
            ScrollBehavior::Smooth => {
                trace!("smooth scroll {} -> {}", self.offset, target);
                self.animation = Some(Tween::new(self.offset, target, self.smooth));
            }
        }
        true
    }

    /// Scroll relative to the current offset. Returns true if a scroll was started.
    pub fn scroll_by(&mut self, dx: f32, behavior: ScrollBehavior) -> bool {
        self.scroll_to(self.offset + dx, behavior)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Where the offset will settle once any smooth scroll completes.
    pub fn target_offset(&self) -> f32 {
        self.animation.map_or(self.offset, |a| a.target())
    }

    /// Advance smooth scrolling. Returns true if the offset moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(mut animation) = self.animation else {
            return false;
        };
        animation.start(now);

        let next = if animation.is_finished(now) {
            self.animation = None;
            animation.target()
        } else {
            self.animation = Some(animation);
            animation.value_at(now)
        };

        let next = self.clamp(next);
        if next == self.offset {
            return false;
        }
        self.offset = next;
        self.layout_dirty = true;
        true
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_layout_dirty(&self) -> bool {
        self.layout_dirty
    }

    /// Read and clear the dirty flag.
    pub fn take_layout_dirty(&mut self) -> bool {
        std::mem::take(&mut self.layout_dirty)
    }
}

/// Widths are finite and non-negative; anything else counts as zero.
fn sanitize(width: f32) -> f32 {
    if width.is_finite() {
        width.max(0.0)
    } else {
        0.0
    }
}
