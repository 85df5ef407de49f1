use super::*;

const SCREEN: Size = Size::new(1280.0, 800.0);

#[test]
fn center_pointer_gives_zero_offsets() {
    let mut p = Parallax::hero();
    assert!(p.pointer_moved(Point::new(640.0, 400.0), SCREEN, true));
    assert_eq!(p.offsets(), &[Vec2::ZERO, Vec2::ZERO]);
}

#[test]
fn layers_move_with_and_against_pointer() {
    let mut p = Parallax::hero();
    p.pointer_moved(Point::new(640.0 + 400.0, 400.0), SCREEN, true);
    assert_eq!(p.offsets()[0], Vec2::new(10.0, 0.0));
    assert_eq!(p.offsets()[1], Vec2::new(-8.0, 0.0));
}

#[test]
fn extreme_pointer_is_not_clamped() {
    let mut p = Parallax::hero();
    p.pointer_moved(Point::new(640.0 + 40_000.0, 400.0 - 4_000.0), SCREEN, true);
    assert_eq!(p.offsets()[0], Vec2::new(1000.0, -100.0));
    assert_eq!(p.offsets()[1], Vec2::new(-800.0, 80.0));
}

#[test]
fn unmounted_layers_ignore_pointer() {
    let mut p = Parallax::hero();
    p.pointer_moved(Point::new(680.0, 400.0), SCREEN, true);
    assert!(!p.pointer_moved(Point::new(0.0, 0.0), SCREEN, false));
    assert_eq!(p.offsets()[0], Vec2::new(1.0, 0.0));
}

#[test]
fn new_rejects_zero_divisor() {
    assert!(Parallax::new([40.0, 0.0]).is_err());
    assert!(Parallax::new([f64::NAN]).is_err());
    let p = Parallax::new([20.0]).unwrap();
    assert_eq!(p.divisors(), &[20.0]);
    assert_eq!(p.offsets(), &[Vec2::ZERO]);
}
