use super::*;
use crate::animation::pose::Pose;

#[test]
fn new_rejects_non_positive_duration() {
    assert!(Tween::new(0.0, 1.0, 0.0, Ease::Linear).is_err());
    assert!(Tween::new(0.0, 1.0, -1.0, Ease::Linear).is_err());
    assert!(Tween::new(0.0, 1.0, f64::NAN, Ease::Linear).is_err());
    assert!(Tween::new(0.0, 1.0, 0.6, Ease::Linear).is_ok());
}

#[test]
fn sample_holds_endpoints_outside_window() {
    let tw = Tween::new(0.0, 10.0, 0.5, Ease::EaseOut).unwrap();
    assert_eq!(tw.sample(-1.0), 0.0);
    assert_eq!(tw.sample(0.0), 0.0);
    assert_eq!(tw.sample(0.5), 10.0);
    assert_eq!(tw.sample(9.0), 10.0);
}

#[test]
fn sample_is_function_of_normalized_time() {
    let ease = Ease::EaseInOut;
    let tw = Tween::new(2.0, 6.0, 0.8, ease).unwrap();
    let v = tw.sample(0.2);
    let expected = 2.0 + 4.0 * ease.apply(0.25);
    assert!((v - expected).abs() < 1e-12);
    // Idempotent.
    assert_eq!(tw.sample(0.2), v);
}

#[test]
fn progress_is_linear_and_clamped() {
    let tw = Tween::new(0.0, 1.0, 2.0, Ease::InCubic).unwrap();
    assert_eq!(tw.progress(-0.5), 0.0);
    assert_eq!(tw.progress(1.0), 0.5);
    assert_eq!(tw.progress(3.0), 1.0);
    assert!(!tw.is_finished(1.999));
    assert!(tw.is_finished(2.0));
}

#[test]
fn pose_tween_reaches_rest() {
    let tw = Tween::new(Pose::faded_up(20.0), Pose::REST, 0.6, Ease::EaseOut).unwrap();
    assert_eq!(tw.sample(0.6), Pose::REST);
    let mid = tw.sample(0.3);
    assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
    assert!(mid.offset.y > 0.0 && mid.offset.y < 20.0);
}
