use std::time::{Duration, Instant};

/// Configuration for a single animated value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionConfig {
    pub duration: Duration,
    pub easing: Easing,
}

impl TransitionConfig {
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// A transition that completes on the first frame.
    pub const fn instant() -> Self {
        Self::new(Duration::ZERO, Easing::Linear)
    }
}

/// Easing function for transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map linear progress in `0.0..=1.0` onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let inv = 1.0 - t;
        match self {
            Self::Linear => t,
            Self::EaseIn => t.powi(2),
            Self::EaseOut => 1.0 - inv.powi(2),
            // Quadratic in, then the mirrored quadratic out.
            Self::EaseInOut if t < 0.5 => 2.0 * t.powi(2),
            Self::EaseInOut => 1.0 - 2.0 * inv.powi(2),
        }
    }
}

/// An in-flight interpolation between two values.
///
/// The clock starts on the first frame that observes the tween, so a tween
/// created from an input handler begins moving at the next paint rather than
/// at the moment of the click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Option<Instant>,
    config: TransitionConfig,
}

impl Tween {
    pub fn new(from: f32, to: f32, config: TransitionConfig) -> Self {
        Self {
            from,
            to,
            start: None,
            config,
        }
    }

    /// Pin the start of the tween to `now`.
    pub fn starting_at(mut self, now: Instant) -> Self {
        self.start = Some(now);
        self
    }

    /// Start the clock if it is not running yet.
    pub fn start(&mut self, now: Instant) {
        if self.start.is_none() {
            self.start = Some(now);
        }
    }

    pub fn is_started(&self) -> bool {
        self.start.is_some()
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Linear progress in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.config.duration.is_zero() {
            return 1.0;
        }
        let Some(start) = self.start else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(start);
        (elapsed.as_secs_f32() / self.config.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated value at `now`.
    pub fn value_at(&self, now: Instant) -> f32 {
        let eased = self.config.easing.apply(self.progress(now));
        lerp(self.from, self.to, eased)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
