use edgescroll::observer::intersection_ratio;
use edgescroll::{
    Edge, EdgeSentinel, ScrollBehavior, ScrollRegion, Sentinels, VisibilityObserver,
    FULL_VISIBILITY, SENTINEL_INSET,
};

fn observing_both() -> VisibilityObserver {
    let mut observer = VisibilityObserver::new(FULL_VISIBILITY);
    for sentinel in Sentinels::place().iter() {
        observer.observe(sentinel);
    }
    observer
}

// ============================================================================
// Sentinel Placement
// ============================================================================

#[test]
fn test_sentinels_are_inset_from_content_edges() {
    let region = ScrollRegion::new(1000.0, 400.0);
    let sentinels = Sentinels::place();

    assert_eq!(sentinels.left.position(&region), SENTINEL_INSET);
    assert_eq!(sentinels.right.position(&region), 1000.0 - SENTINEL_INSET);
}

#[test]
fn test_sentinels_are_zero_width() {
    let region = ScrollRegion::new(1000.0, 400.0);
    for sentinel in Sentinels::place().iter() {
        let (start, end) = sentinel.bounds(&region);
        assert_eq!(start, end);
    }
}

#[test]
fn test_sentinels_span_viewport_when_content_is_narrow() {
    let region = ScrollRegion::new(300.0, 400.0);
    let right = EdgeSentinel::new(Edge::Right);

    assert_eq!(right.position(&region), 400.0 - SENTINEL_INSET);
}

#[test]
fn test_sentinels_clamped_in_empty_region() {
    let region = ScrollRegion::new(0.0, 0.0);
    let sentinels = Sentinels::place();

    assert_eq!(sentinels.left.position(&region), 0.0);
    assert_eq!(sentinels.right.position(&region), 0.0);
}

#[test]
fn test_sentinels_move_with_content() {
    let mut region = ScrollRegion::new(1000.0, 400.0);
    let left = EdgeSentinel::new(Edge::Left);
    let before = left.position(&region);

    region.scroll_to(250.0, ScrollBehavior::Instant);

    // Content coordinates are fixed; only the viewport moves over them.
    assert_eq!(left.position(&region), before);
    let (view_start, _) = region.visible_range();
    assert!(left.position(&region) < view_start);
}

// ============================================================================
// Intersection Ratio
// ============================================================================

#[test]
fn test_zero_width_ratio_inside_and_outside() {
    let region = ScrollRegion::new(1000.0, 400.0);

    assert_eq!(intersection_ratio(1.0, 1.0, &region), 1.0);
    assert_eq!(intersection_ratio(999.0, 999.0, &region), 0.0);
}

#[test]
fn test_zero_width_ratio_on_boundary_counts_as_visible() {
    let region = ScrollRegion::new(1000.0, 400.0);

    assert_eq!(intersection_ratio(0.0, 0.0, &region), 1.0);
    assert_eq!(intersection_ratio(400.0, 400.0, &region), 1.0);
    assert_eq!(intersection_ratio(400.5, 400.5, &region), 0.0);
}

#[test]
fn test_partial_ratio_for_wide_span() {
    let region = ScrollRegion::new(1000.0, 400.0);

    assert_eq!(intersection_ratio(300.0, 500.0, &region), 0.5);
    assert_eq!(intersection_ratio(100.0, 200.0, &region), 1.0);
    assert_eq!(intersection_ratio(500.0, 600.0, &region), 0.0);
}

// ============================================================================
// Reports
// ============================================================================

#[test]
fn test_first_report_includes_every_target() {
    let region = ScrollRegion::new(1000.0, 400.0);
    let mut observer = observing_both();

    let entries = observer.take_records(&region);

    assert_eq!(entries.len(), 2);
    let left = entries.iter().find(|e| e.target == Edge::Left).unwrap();
    let right = entries.iter().find(|e| e.target == Edge::Right).unwrap();
    assert!(left.is_intersecting);
    assert_eq!(left.intersection_ratio, 1.0);
    assert!(!right.is_intersecting);
    assert_eq!(right.intersection_ratio, 0.0);
}

#[test]
fn test_unchanged_layout_reports_nothing() {
    let region = ScrollRegion::new(1000.0, 400.0);
    let mut observer = observing_both();

    observer.take_records(&region);
    assert!(observer.take_records(&region).is_empty());
}

#[test]
fn test_only_changed_targets_are_reported() {
    let mut region = ScrollRegion::new(1000.0, 400.0);
    let mut observer = observing_both();
    observer.take_records(&region);

    region.scroll_to(300.0, ScrollBehavior::Instant);
    let entries = observer.take_records(&region);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].target, Edge::Left);
    assert!(!entries[0].is_intersecting);
}

#[test]
fn test_jump_across_whole_content_reports_both() {
    let mut region = ScrollRegion::new(1000.0, 400.0);
    let mut observer = observing_both();
    observer.take_records(&region);

    region.scroll_to(600.0, ScrollBehavior::Instant);
    let entries = observer.take_records(&region);

    assert_eq!(entries.len(), 2);
    assert!(entries
        .iter()
        .all(|e| e.is_intersecting == (e.target == Edge::Right)));
}

#[test]
fn test_no_overflow_keeps_both_visible() {
    let mut region = ScrollRegion::new(250.0, 400.0);
    let mut observer = observing_both();

    let entries = observer.take_records(&region);
    assert!(entries.iter().all(|e| e.is_intersecting));

    region.set_client_width(260.0);
    assert!(observer.take_records(&region).is_empty());
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_observe_same_edge_twice() {
    let mut observer = VisibilityObserver::new(FULL_VISIBILITY);
    observer.observe(EdgeSentinel::new(Edge::Left));
    observer.observe(EdgeSentinel::new(Edge::Left));

    assert_eq!(observer.observed_count(), 1);
}

#[test]
fn test_unobserve_stops_reports_for_edge() {
    let region = ScrollRegion::new(1000.0, 400.0);
    let mut observer = observing_both();
    observer.unobserve(Edge::Right);

    let entries = observer.take_records(&region);

    assert!(!observer.is_observing(Edge::Right));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].target, Edge::Left);
}

#[test]
fn test_disconnect_silences_observer() {
    let region = ScrollRegion::new(1000.0, 400.0);
    let mut observer = observing_both();

    observer.disconnect();
    observer.observe(EdgeSentinel::new(Edge::Left));

    assert!(!observer.is_connected());
    assert_eq!(observer.observed_count(), 0);
    assert!(observer.take_records(&region).is_empty());
}

#[test]
fn test_threshold_is_clamped() {
    assert_eq!(VisibilityObserver::new(3.0).threshold(), 1.0);
    assert_eq!(VisibilityObserver::new(-1.0).threshold(), 0.0);
}
