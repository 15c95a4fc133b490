use std::time::{Duration, Instant};

use edgescroll::{Easing, Edge, Gradient, TransitionConfig, Tween};

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_ease_out() {
    // EaseOut: 1 - (1-t)^2 (quadratic, fast start)
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
}

#[test]
fn test_easing_ease_in_out_is_symmetric() {
    assert_eq!(Easing::EaseInOut.apply(0.25), 0.125);
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    assert_eq!(Easing::EaseInOut.apply(0.75), 0.875);
}

#[test]
fn test_easing_clamps_progress() {
    assert_eq!(Easing::EaseIn.apply(-1.0), 0.0);
    assert_eq!(Easing::EaseOut.apply(2.0), 1.0);
}

#[test]
fn test_easing_boundaries() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
    }
}

#[test]
fn test_easing_monotonic() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ] {
        let mut prev = 0.0;
        for i in 1..=10 {
            let t = i as f32 / 10.0;
            let val = easing.apply(t);
            assert!(val >= prev, "{:?} not monotonic at t={}", easing, t);
            prev = val;
        }
    }
}

// =============================================================================
// Tween Tests
// =============================================================================

#[test]
fn test_tween_holds_until_started() {
    let config = TransitionConfig::new(Duration::from_millis(100), Easing::Linear);
    let tween = Tween::new(10.0, 20.0, config);
    let now = Instant::now();

    assert!(!tween.is_started());
    assert_eq!(tween.progress(now), 0.0);
    assert_eq!(tween.value_at(now), 10.0);
}

#[test]
fn test_tween_interpolates() {
    let config = TransitionConfig::new(Duration::from_millis(100), Easing::Linear);
    let t0 = Instant::now();
    let tween = Tween::new(0.0, 10.0, config).starting_at(t0);

    assert!((tween.value_at(t0 + Duration::from_millis(30)) - 3.0).abs() < 0.01);
    assert!(!tween.is_finished(t0 + Duration::from_millis(99)));
    assert_eq!(tween.value_at(t0 + Duration::from_secs(5)), 10.0);
    assert!(tween.is_finished(t0 + Duration::from_millis(100)));
}

#[test]
fn test_tween_zero_duration_is_immediate() {
    let tween = Tween::new(0.0, 1.0, TransitionConfig::instant());
    let now = Instant::now();

    assert_eq!(tween.value_at(now), 1.0);
    assert!(tween.is_finished(now));
}

#[test]
fn test_tween_start_is_sticky() {
    let config = TransitionConfig::new(Duration::from_millis(100), Easing::Linear);
    let t0 = Instant::now();
    let mut tween = Tween::new(0.0, 1.0, config);

    tween.start(t0);
    tween.start(t0 + Duration::from_millis(80));

    assert!(tween.is_finished(t0 + Duration::from_millis(100)));
}

// =============================================================================
// Gradient Fade Tests
// =============================================================================

#[test]
fn test_gradient_reverses_from_current_opacity() {
    let config = TransitionConfig::new(Duration::from_millis(100), Easing::Linear);
    let t0 = Instant::now();
    let mut gradient = Gradient::new(Edge::Left, true, config);

    gradient.set_active(true, t0);
    let halfway = t0 + Duration::from_millis(50);
    let peak = gradient.opacity_at(halfway);
    gradient.set_active(false, halfway);

    assert!((gradient.opacity_at(halfway) - peak).abs() < 1e-6);
    assert_eq!(gradient.opacity_at(halfway + Duration::from_millis(100)), 0.0);
}

#[test]
fn test_unrendered_gradient_is_always_transparent() {
    let t0 = Instant::now();
    let mut gradient = Gradient::new(Edge::Right, false, TransitionConfig::instant());

    assert!(gradient.set_active(true, t0));
    assert!(gradient.is_active());
    assert_eq!(gradient.opacity_at(t0), 0.0);
    assert!(!gradient.is_fading(t0));
}
