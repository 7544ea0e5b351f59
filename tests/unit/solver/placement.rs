use super::*;

#[test]
fn zero_insets_give_full_bleed() {
    for pivot in [Point::new(0.0, 0.0), Point::new(0.5, 0.5), Point::new(1.0, 1.0)] {
        assert_eq!(place(&InsetVector::ZERO, pivot), RectPlacement::FULL_BLEED);
    }
}

#[test]
fn size_delta_is_negative_inset_sum() {
    let p = place(&InsetVector::new(10.0, 20.0, 30.0, 40.0), Point::new(0.0, 0.0));
    assert_eq!(p.size_delta, Vec2::new(-50.0, -50.0));
    assert_eq!(p.anchored_position, Vec2::new(10.0, 20.0));
}

#[test]
fn centered_pivot_offsets_by_half_size_delta() {
    let p = place(&InsetVector::new(40.0, 0.0, 30.0, 40.0), Point::new(0.5, 0.5));
    assert_eq!(p.size_delta, Vec2::new(-80.0, -30.0));
    assert_eq!(p.anchored_position, Vec2::new(0.0, -15.0));
}

#[test]
fn pivot_shift_moves_position_by_size_delta() {
    let insets = InsetVector::new(12.0, 7.0, 3.0, 5.0);
    let low = place(&insets, Point::new(0.0, 0.0));
    let high = place(&insets, Point::new(1.0, 1.0));
    assert_eq!(low.size_delta, high.size_delta);
    assert_eq!(high.anchored_position - low.anchored_position, low.size_delta);
}

#[test]
fn anchors_are_always_full_stretch() {
    let p = place(&InsetVector::new(1.0, 2.0, 3.0, 4.0), Point::new(0.3, 0.9));
    assert_eq!(p.anchor_min, Point::new(0.0, 0.0));
    assert_eq!(p.anchor_max, Point::new(1.0, 1.0));
}

#[test]
fn nan_pivot_is_treated_as_origin() {
    let p = pivot_adjusted_position(
        Vec2::new(5.0, 6.0),
        Vec2::new(-10.0, -10.0),
        Point::new(f64::NAN, 1.0),
    );
    assert_eq!(p, Vec2::new(5.0, -4.0));
}
