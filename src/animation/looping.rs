use crate::{
    animation::{ease::Ease, pose::Lerp},
    foundation::core::{ensure_non_negative, ensure_positive},
    foundation::error::{MotionError, MotionResult},
};

/// Endless keyframe cycle for ambient decorations.
///
/// `keys` are spread evenly over one `period`; each segment is eased
/// independently. Before `delay` elapses the first key is held.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LoopSpec<T> {
    pub keys: Vec<T>, // at least two
    pub period: f64,  // seconds, > 0
    #[serde(default)]
    pub delay: f64,
    #[serde(default = "default_loop_ease")]
    pub ease: Ease,
}

fn default_loop_ease() -> Ease {
    Ease::EaseInOut
}

impl<T> LoopSpec<T> {
    pub fn new(keys: Vec<T>, period: f64) -> Self {
        Self {
            keys,
            period,
            delay: 0.0,
            ease: default_loop_ease(),
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn validate(&self) -> MotionResult<()> {
        if self.keys.len() < 2 {
            return Err(MotionError::animation("loop needs at least two keys"));
        }
        ensure_positive("loop period", self.period)?;
        ensure_non_negative("loop delay", self.delay)?;
        self.ease.validate()
    }
}

/// Single-state (`looping`) animator; runs until dropped.
#[derive(Clone, Debug)]
pub struct LoopAnimator<T> {
    spec: LoopSpec<T>,
}

impl<T> LoopAnimator<T>
where
    T: Lerp + Clone,
{
    pub fn new(spec: LoopSpec<T>) -> MotionResult<Self> {
        spec.validate()?;
        Ok(Self { spec })
    }

    pub fn spec(&self) -> &LoopSpec<T> {
        &self.spec
    }

    /// Completed cycles at `now` (0 during the first cycle and the delay).
    pub fn cycle(&self, now: f64) -> u64 {
        let local = now - self.spec.delay;
        if local <= 0.0 {
            return 0;
        }
        (local / self.spec.period).floor() as u64
    }

    pub fn sample(&self, now: f64) -> T {
        let keys = &self.spec.keys;
        let local = now - self.spec.delay;
        if local <= 0.0 {
            return keys[0].clone();
        }

        let phase = local.rem_euclid(self.spec.period) / self.spec.period;
        let segments = keys.len() - 1;
        let x = phase * segments as f64;
        let idx = (x.floor() as usize).min(segments - 1);
        let t = x - idx as f64;
        T::lerp(&keys[idx], &keys[idx + 1], self.spec.ease.apply(t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/looping.rs"]
mod tests;
