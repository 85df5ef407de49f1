use super::*;

fn card(delay: f64) -> RevealAnimator {
    RevealAnimator::new(RevealSpec::new(Pose::faded_up(30.0), 0.6).with_delay(delay)).unwrap()
}

#[test]
fn new_validates_spec() {
    assert!(RevealAnimator::new(RevealSpec::new(Pose::faded(), 0.0)).is_err());
    assert!(RevealAnimator::new(RevealSpec::new(Pose::faded(), 0.5).with_delay(-0.1)).is_err());
    let bad_ease = RevealSpec::new(Pose::faded(), 0.5).with_ease(Ease::CubicBezier {
        x1: -1.0,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    });
    assert!(RevealAnimator::new(bad_ease).is_err());
}

#[test]
fn states_progress_idle_hidden_visible() {
    let mut a = card(0.0);
    assert_eq!(a.state(), AnimationState::Idle);
    assert!(a.mount());
    assert_eq!(a.state(), AnimationState::Hidden);
    assert!(a.trigger(1.0));
    assert_eq!(a.sample(1.0).state, AnimationState::Visible);
}

#[test]
fn trigger_before_mount_is_ignored() {
    let mut a = card(0.0);
    assert!(!a.trigger(0.0));
    assert_eq!(a.state(), AnimationState::Idle);
    assert_eq!(a.effective_start(), None);
}

#[test]
fn mount_and_trigger_are_one_shot() {
    let mut a = card(0.25);
    assert!(a.mount());
    assert!(!a.mount());
    assert!(a.trigger(1.0));
    assert!(!a.trigger(5.0));
    assert_eq!(a.effective_start(), Some(1.25));
}

#[test]
fn stagger_delay_keeps_hidden_until_start() {
    let mut a = card(0.25);
    a.mount();
    a.trigger(2.0);
    let f = a.sample(2.1);
    assert_eq!(f.state, AnimationState::Hidden);
    assert_eq!(f.pose, Pose::faded_up(30.0));
    assert_eq!(f.effective_start, Some(2.25));
    assert_eq!(a.sample(2.25).state, AnimationState::Visible);
}

#[test]
fn visible_never_reverts() {
    let mut a = card(0.0);
    a.mount();
    a.trigger(0.0);
    a.sample(0.1);
    // A late, out-of-order sample must not walk the state backwards.
    let f = a.sample(-5.0);
    assert_eq!(f.state, AnimationState::Visible);
    assert_eq!(f.pose, Pose::faded_up(30.0));
    assert_eq!(a.sample(10.0).state, AnimationState::Visible);
}

#[test]
fn pose_endpoints_and_interior() {
    let mut a = card(0.0);
    a.mount();
    a.trigger(1.0);
    assert_eq!(a.pose_at(0.5), Pose::faded_up(30.0));
    assert_eq!(a.pose_at(1.0), Pose::faded_up(30.0));
    assert_eq!(a.pose_at(1.6), Pose::REST);
    assert_eq!(a.pose_at(99.0), Pose::REST);

    let mid = a.pose_at(1.3);
    let te = Ease::EaseOut.apply(0.5);
    assert!((mid.opacity - te).abs() < 1e-9);
    assert!((mid.offset.y - 30.0 * (1.0 - te)).abs() < 1e-9);
    assert_eq!(a.pose_at(1.3), mid);
}

#[test]
fn settles_after_duration() {
    let mut a = card(0.25);
    a.mount();
    a.trigger(0.0);
    a.advance(0.25);
    assert!(!a.is_settled(0.8));
    assert!(a.is_settled(0.9));
    assert_eq!(a.sample(0.9).progress, 1.0);
}

#[test]
fn untriggered_animator_rests_at_from_pose() {
    let mut a = card(0.0);
    a.mount();
    let f = a.sample(100.0);
    assert_eq!(f.state, AnimationState::Hidden);
    assert_eq!(f.pose, Pose::faded_up(30.0));
    assert_eq!(f.progress, 0.0);
}

#[test]
fn queries_between_frames_see_an_elapsed_delay() {
    let mut a = card(0.4);
    a.mount();
    a.trigger(1.0);
    assert_eq!(a.state_at(1.2), AnimationState::Hidden);
    assert_eq!(a.state_at(1.4), AnimationState::Visible);
    assert_eq!(a.state(), AnimationState::Hidden);
    assert!(a.is_settled(2.0));
    assert!(!a.is_settled(1.2));

    a.advance(1.5);
    assert_eq!(a.state(), AnimationState::Visible);
    assert_eq!(a.state_at(0.0), AnimationState::Visible);
}
