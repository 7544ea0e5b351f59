use super::*;

#[test]
fn apply_leaves_pivot_untouched() {
    let mut rect = TargetRect::with_pivot(Point::new(0.2, 0.8));
    let placement = RectPlacement {
        anchor_min: RectPlacement::STRETCH_MIN,
        anchor_max: RectPlacement::STRETCH_MAX,
        size_delta: Vec2::new(-10.0, -20.0),
        anchored_position: Vec2::new(3.0, 4.0),
    };
    rect.apply(&placement);
    assert_eq!(rect.pivot, Point::new(0.2, 0.8));
    assert_eq!(rect.placement(), placement);
}

#[test]
fn driven_properties_combine() {
    let anchors = DrivenProperties::ANCHOR_MIN_X
        | DrivenProperties::ANCHOR_MIN_Y
        | DrivenProperties::ANCHOR_MAX_X
        | DrivenProperties::ANCHOR_MAX_Y;
    assert!(DrivenProperties::STRETCH_PADDING.contains(anchors));
    assert!(!anchors.contains(DrivenProperties::SIZE_DELTA_X));
    assert!(DrivenProperties::NONE.is_empty());
    assert!(DrivenProperties::default().is_empty());
}

#[test]
fn in_memory_host_tracks_locks_and_rebuilds() {
    let mut host = InMemoryHost::new(TargetRect::default(), Size::new(100.0, 50.0));
    assert_eq!(host.container_size(), Some(Size::new(100.0, 50.0)));
    host.lock(DrivenProperties::SIZE_DELTA_X);
    host.lock(DrivenProperties::SIZE_DELTA_Y);
    assert!(host.driven.contains(DrivenProperties::SIZE_DELTA_X | DrivenProperties::SIZE_DELTA_Y));
    host.release();
    assert!(host.driven.is_empty());
    assert!(!host.rebuild_requested);
    host.mark_for_rebuild();
    assert!(host.rebuild_requested);
}
