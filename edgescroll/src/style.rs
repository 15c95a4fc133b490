//! Styling surface consumed by whatever paints the widget.
//!
//! None of this affects edge detection; it is carried so a renderer can draw
//! the overlays the same way for every host.

use std::time::Duration;

use palette::{Srgb, Srgba, WithAlpha};

use crate::edge::Edge;
use crate::transitions::{Easing, TransitionConfig};

/// sRGB colour with alpha, 8 bits per channel.
pub type Color = Srgba<u8>;

pub const WHITE: Color = Srgba::new(255, 255, 255, 255);
pub const BLACK: Color = Srgba::new(0, 0, 0, 255);
pub const TRANSPARENT: Color = Srgba::new(0, 0, 0, 0);

/// Visual parameters of the scrollable container.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollableStyle {
    /// Colour the gradients fade into.
    pub background: Color,
    /// Width of each gradient overlay.
    pub gradient_width: f32,
    /// Size of the navigation button icons.
    pub icon_size: f32,
    /// Duration of the overlay fade.
    pub transition_speed: Duration,
    /// Icon and text colour.
    pub color: Color,
}

impl Default for ScrollableStyle {
    fn default() -> Self {
        Self {
            background: WHITE,
            gradient_width: 20.0,
            icon_size: 24.0,
            transition_speed: Duration::from_millis(100),
            color: BLACK,
        }
    }
}

impl ScrollableStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn gradient_width(mut self, width: f32) -> Self {
        self.gradient_width = width.max(0.0);
        self
    }

    pub fn icon_size(mut self, size: f32) -> Self {
        self.icon_size = size.max(0.0);
        self
    }

    pub fn transition_speed(mut self, speed: Duration) -> Self {
        self.transition_speed = speed;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Fade used for the gradient overlays.
    pub fn transition(&self) -> TransitionConfig {
        TransitionConfig::new(self.transition_speed, Easing::EaseOut)
    }

    /// Gradient of the overlay at `edge`, running from the content toward the edge.
    pub fn gradient_stops(&self, edge: Edge) -> GradientSpec {
        let angle = match edge {
            Edge::Left => 270.0,
            Edge::Right => 90.0,
        };
        let stop = |position: f32, amount: f32| GradientStop {
            position,
            color: color_mix(self.background, amount, TRANSPARENT),
        };
        GradientSpec {
            angle,
            stops: [stop(0.0, 0.0), stop(0.5, 0.8), stop(1.0, 1.0)],
        }
    }
}

/// A linear gradient in CSS terms: angle in degrees and ordered stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSpec {
    pub angle: f32,
    pub stops: [GradientStop; 3],
}

impl GradientSpec {
    /// Colour at `t` (0.0 at the content side, 1.0 at the edge).
    pub fn sample(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let pair = self
            .stops
            .windows(2)
            .find(|w| t <= w[1].position)
            .unwrap_or(&self.stops[1..]);
        let (a, b) = (pair[0], pair[1]);
        let span = b.position - a.position;
        if span <= 0.0 {
            return b.color;
        }
        color_mix(b.color, (t - a.position) / span, a.color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub position: f32,
    pub color: Color,
}

/// Mix `amount` of `first` with the rest of `second`, premultiplied in sRGB.
pub fn color_mix(first: Color, amount: f32, second: Color) -> Color {
    let p = amount.clamp(0.0, 1.0);
    let a: Srgba<f32> = first.into_format();
    let b: Srgba<f32> = second.into_format();

    let wa = a.alpha * p;
    let wb = b.alpha * (1.0 - p);
    let alpha = wa + wb;

    let rgb: Srgb<f32> = if alpha <= f32::EPSILON {
        a.color
    } else {
        Srgb::new(
            (a.red * wa + b.red * wb) / alpha,
            (a.green * wa + b.green * wb) / alpha,
            (a.blue * wa + b.blue * wb) / alpha,
        )
    };
    rgb.with_alpha(alpha).into_format()
}
