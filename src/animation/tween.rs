use crate::{
    animation::{ease::Ease, pose::Lerp},
    foundation::core::ensure_positive,
    foundation::error::MotionResult,
};

/// Fixed-duration interpolation between two values.
///
/// Sampling is a pure function of elapsed time: before the start it yields
/// `from`, at or after `duration` it yields `to` exactly, and in between
/// `lerp(from, to, ease(elapsed / duration))`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub duration: f64, // seconds, > 0
    pub ease: Ease,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    pub fn new(from: T, to: T, duration: f64, ease: Ease) -> MotionResult<Self> {
        let tween = Self {
            from,
            to,
            duration,
            ease,
        };
        tween.validate()?;
        Ok(tween)
    }

    pub fn validate(&self) -> MotionResult<()> {
        ensure_positive("tween duration", self.duration)?;
        self.ease.validate()
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, elapsed: f64) -> f64 {
        if elapsed <= 0.0 {
            0.0
        } else if elapsed >= self.duration {
            1.0
        } else {
            elapsed / self.duration
        }
    }

    pub fn sample(&self, elapsed: f64) -> T {
        if elapsed <= 0.0 {
            return self.from.clone();
        }
        if elapsed >= self.duration {
            return self.to.clone();
        }
        let te = self.ease.apply(elapsed / self.duration);
        T::lerp(&self.from, &self.to, te)
    }

    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed >= self.duration
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
