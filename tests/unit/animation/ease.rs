use super::*;

fn all_curves() -> [Ease; 11] {
    [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::EaseIn,
        Ease::EaseOut,
        Ease::EaseInOut,
        Ease::EXPO_OUT,
    ]
}

#[test]
fn endpoints_are_stable() {
    for ease in all_curves() {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn inputs_are_clamped() {
    for ease in all_curves() {
        assert_eq!(ease.apply(-2.0), 0.0);
        assert_eq!(ease.apply(7.5), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in all_curves() {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn ease_in_out_is_symmetric() {
    let mid = Ease::EaseInOut.apply(0.5);
    assert!((mid - 0.5).abs() < 1e-6);
    let a = Ease::EaseInOut.apply(0.2);
    let b = Ease::EaseInOut.apply(0.8);
    assert!((a + b - 1.0).abs() < 1e-6);
}

#[test]
fn ease_out_front_loads_progress() {
    assert!(Ease::EaseOut.apply(0.5) > 0.5);
    assert!(Ease::EaseIn.apply(0.5) < 0.5);
    assert!(Ease::EXPO_OUT.apply(0.3) > 0.8);
}

#[test]
fn linear_bezier_is_identity() {
    let ease = Ease::CubicBezier {
        x1: 0.25,
        y1: 0.25,
        x2: 0.75,
        y2: 0.75,
    };
    for x in [0.1, 0.33, 0.9] {
        assert_eq!(ease.apply(x), x);
    }
}

#[test]
fn bezier_solver_inverts_x() {
    // For ease-in-out the solved parameter must reproduce x.
    for x in [0.05, 0.3, 0.5, 0.72, 0.99] {
        let t = solve_curve_t(0.42, 0.58, x);
        assert!((bezier_coord(0.42, 0.58, t) - x).abs() < 1e-7);
    }
}

#[test]
fn validate_rejects_out_of_range_x() {
    assert!(Ease::EXPO_OUT.validate().is_ok());
    let bad = Ease::CubicBezier {
        x1: 1.2,
        y1: 0.0,
        x2: 0.5,
        y2: 1.0,
    };
    assert!(bad.validate().is_err());
    let nan = Ease::CubicBezier {
        x1: f64::NAN,
        y1: 0.0,
        x2: 0.5,
        y2: 1.0,
    };
    assert!(nan.validate().is_err());
}

#[test]
fn serde_uses_variant_names() {
    let s = serde_json::to_string(&Ease::EaseOut).unwrap();
    assert_eq!(s, "\"EaseOut\"");
    let back: Ease = serde_json::from_str(&serde_json::to_string(&Ease::EXPO_OUT).unwrap()).unwrap();
    assert_eq!(back, Ease::EXPO_OUT);
}
