use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(60, 0).is_err());
}

#[test]
fn frame_time_follows_rate() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.frame_time(FrameIndex(0)), 0.0);
    assert!((fps.frame_time(FrameIndex(15)) - 0.5).abs() < 1e-12);
}

#[test]
fn frames_covering_rounds_up() {
    let fps = Fps::new(60, 1).unwrap();
    assert_eq!(fps.frames_covering(1.0), 60);
    assert_eq!(fps.frames_covering(1.01), 61);
    assert_eq!(fps.frames_covering(-3.0), 0);
}

#[test]
fn time_checks_reject_bad_values() {
    assert!(ensure_positive("duration", 0.5).is_ok());
    assert!(ensure_positive("duration", 0.0).is_err());
    assert!(ensure_positive("duration", f64::NAN).is_err());
    assert!(ensure_non_negative("delay", 0.0).is_ok());
    assert!(ensure_non_negative("delay", -0.1).is_err());
    assert!(ensure_non_negative("delay", f64::INFINITY).is_err());
}
