use crate::foundation::error::{MotionError, MotionResult};

/// Easing curve mapping normalized progress in `[0, 1]` to eased progress.
///
/// Every curve maps `0 -> 0` and `1 -> 1`; inputs outside `[0, 1]` are clamped.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    /// `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// CSS-style cubic bezier with fixed endpoints `(0, 0)` and `(1, 1)`.
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Ease {
    /// Fast start, long settle. Used by the navbar and the mobile menu panel.
    pub const EXPO_OUT: Ease = Ease::CubicBezier {
        x1: 0.16,
        y1: 1.0,
        x2: 0.3,
        y2: 1.0,
    };

    pub fn validate(self) -> MotionResult<()> {
        if let Self::CubicBezier { x1, y1, x2, y2 } = self {
            if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
                return Err(MotionError::animation(
                    "cubic bezier control points must be finite",
                ));
            }
            if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                return Err(MotionError::animation(
                    "cubic bezier x control points must lie in [0, 1]",
                ));
            }
        }
        Ok(())
    }

    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_MIN_SLOPE: f64 = 1e-6;
const SUBDIVISION_ITERATIONS: usize = 48;
const X_EPSILON: f64 = 1e-9;

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    if x1 == y1 && x2 == y2 {
        return x;
    }
    let t = solve_curve_t(x1, x2, x);
    bezier_coord(y1, y2, t)
}

// One coordinate of the curve with endpoints fixed at 0 and 1.
fn bezier_coord(p1: f64, p2: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

fn bezier_slope(p1: f64, p2: f64, t: f64) -> f64 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

// x(t) is monotonic for x control points in [0, 1], so bisection always converges.
fn solve_curve_t(x1: f64, x2: f64, x: f64) -> f64 {
    let mut t = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = bezier_coord(x1, x2, t) - x;
        if err.abs() < X_EPSILON {
            return t;
        }
        let slope = bezier_slope(x1, x2, t);
        if slope.abs() < NEWTON_MIN_SLOPE {
            break;
        }
        t -= err / slope;
        if !(0.0..=1.0).contains(&t) {
            break;
        }
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    t = x;
    for _ in 0..SUBDIVISION_ITERATIONS {
        let err = bezier_coord(x1, x2, t) - x;
        if err.abs() < X_EPSILON {
            break;
        }
        if err > 0.0 {
            hi = t;
        } else {
            lo = t;
        }
        t = (lo + hi) * 0.5;
    }
    t
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
