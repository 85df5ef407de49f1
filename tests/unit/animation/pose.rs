use super::*;

#[test]
fn rest_is_default() {
    assert_eq!(Pose::default(), Pose::REST);
    assert_eq!(Pose::REST.opacity, 1.0);
    assert_eq!(Pose::REST.scale, 1.0);
    assert_eq!(Pose::REST.offset, Vec2::ZERO);
}

#[test]
fn lerp_is_component_wise() {
    let a = Pose::faded_up(30.0).with_scale(0.5);
    let b = Pose::REST;
    let mid = Pose::lerp(&a, &b, 0.5);
    assert_eq!(mid.opacity, 0.5);
    assert_eq!(mid.offset, Vec2::new(0.0, 15.0));
    assert_eq!(mid.scale, 0.75);
}

#[test]
fn presets_match_their_axes() {
    assert_eq!(Pose::faded_x(-30.0).offset, Vec2::new(-30.0, 0.0));
    assert_eq!(Pose::popped(0.8).scale, 0.8);
    assert_eq!(Pose::popped(0.8).opacity, 0.0);
    let drop = Pose::dropped(-100.0);
    assert_eq!(drop.opacity, 1.0);
    assert_eq!(drop.offset.y, -100.0);
}

#[test]
fn affine_identity_and_translation() {
    assert_eq!(Pose::REST.to_affine(Point::new(50.0, 50.0)), Affine::IDENTITY);

    let p = Pose::REST.with_offset(Vec2::new(10.0, -2.5));
    assert_eq!(
        p.to_affine(Point::ORIGIN),
        Affine::translate(Vec2::new(10.0, -2.5))
    );
}

#[test]
fn affine_scales_about_anchor() {
    let p = Pose::REST.with_scale(2.0);
    let anchor = Point::new(10.0, 10.0);
    let moved = p.to_affine(anchor) * anchor;
    assert!((moved - anchor).hypot() < 1e-12);
    let corner = p.to_affine(anchor) * Point::new(20.0, 10.0);
    assert!((corner.x - 30.0).abs() < 1e-12);
}
