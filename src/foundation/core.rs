use crate::foundation::error::{MotionError, MotionResult};

pub use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Index of a rendering frame sampled by the per-frame clock.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Rate of the per-frame tick source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> MotionResult<Self> {
        if den == 0 {
            return Err(MotionError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(MotionError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Page-clock time at which `frame` is sampled.
    pub fn frame_time(self, frame: FrameIndex) -> f64 {
        (frame.0 as f64) * self.frame_duration_secs()
    }

    /// Number of frames needed to cover `secs`, rounded up.
    pub fn frames_covering(self, secs: f64) -> u64 {
        (secs * self.as_f64()).ceil().max(0.0) as u64
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

pub(crate) fn ensure_positive(label: &str, v: f64) -> MotionResult<()> {
    if !v.is_finite() || v <= 0.0 {
        return Err(MotionError::animation(format!(
            "{label} must be finite and > 0 (got {v})"
        )));
    }
    Ok(())
}

pub(crate) fn ensure_non_negative(label: &str, v: f64) -> MotionResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(MotionError::animation(format!(
            "{label} must be finite and >= 0 (got {v})"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
