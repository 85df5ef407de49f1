use super::*;
use crate::animation::pose::Pose;

fn pulse() -> LoopAnimator<f64> {
    LoopAnimator::new(LoopSpec::new(vec![1.0, 1.05, 1.0], 5.0)).unwrap()
}

#[test]
fn validate_rejects_degenerate_loops() {
    assert!(LoopAnimator::new(LoopSpec::new(vec![1.0], 5.0)).is_err());
    assert!(LoopAnimator::new(LoopSpec::new(vec![1.0, 2.0], 0.0)).is_err());
    assert!(LoopAnimator::new(LoopSpec::new(vec![1.0, 2.0], 1.0).with_delay(-1.0)).is_err());
}

#[test]
fn keys_land_on_even_fractions_of_period() {
    let a = pulse();
    assert_eq!(a.sample(0.0), 1.0);
    assert!((a.sample(2.5) - 1.05).abs() < 1e-12);
    assert!((a.sample(5.0) - 1.0).abs() < 1e-12);
}

#[test]
fn repeats_every_period() {
    let a = pulse();
    for t in [0.4, 1.7, 3.3] {
        let v0 = a.sample(t);
        let v1 = a.sample(t + 5.0);
        let v2 = a.sample(t + 50.0);
        assert!((v0 - v1).abs() < 1e-9);
        assert!((v0 - v2).abs() < 1e-9);
    }
    assert_eq!(a.cycle(4.9), 0);
    assert_eq!(a.cycle(12.0), 2);
}

#[test]
fn stays_within_key_bounds() {
    let a = pulse();
    for i in 0..200 {
        let v = a.sample(i as f64 * 0.037);
        assert!((1.0 - 1e-12..=1.05 + 1e-12).contains(&v));
    }
}

#[test]
fn delay_holds_first_key() {
    let a = LoopAnimator::new(LoopSpec::new(vec![0.2, 0.1, 0.2], 7.0).with_delay(0.5)).unwrap();
    assert_eq!(a.sample(0.0), 0.2);
    assert_eq!(a.sample(0.5), 0.2);
    assert_eq!(a.cycle(0.3), 0);
    assert!(a.sample(2.0) < 0.2);
}

#[test]
fn pose_loops_move_offset() {
    let dot = LoopAnimator::new(LoopSpec::new(
        vec![
            Pose::REST,
            Pose::REST.with_offset(crate::foundation::core::Vec2::new(0.0, 15.0)),
            Pose::REST,
        ],
        1.5,
    ))
    .unwrap();
    assert!((dot.sample(0.75).offset.y - 15.0).abs() < 1e-9);
    assert_eq!(dot.sample(0.0).offset.y, 0.0);
}
