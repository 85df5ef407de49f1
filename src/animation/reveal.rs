use crate::{
    animation::{ease::Ease, pose::Pose, tween::Tween},
    foundation::core::{ensure_non_negative, ensure_positive},
    foundation::error::MotionResult,
};

/// Externally visible reveal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationState {
    /// Not mounted yet.
    Idle,
    /// Mounted; either untriggered or waiting out its stagger delay.
    Hidden,
    /// Transition running or complete.
    Visible,
}

/// One-shot reveal transition: `from -> to` over `duration` after `delay`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealSpec {
    pub from: Pose,
    #[serde(default)]
    pub to: Pose,
    pub duration: f64,
    #[serde(default)]
    pub delay: f64,
    #[serde(default = "default_reveal_ease")]
    pub ease: Ease,
}

fn default_reveal_ease() -> Ease {
    Ease::EaseOut
}

impl RevealSpec {
    /// Reveal from `from` to [`Pose::REST`] with no delay and ease-out.
    pub fn new(from: Pose, duration: f64) -> Self {
        Self {
            from,
            to: Pose::REST,
            duration,
            delay: 0.0,
            ease: default_reveal_ease(),
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

    pub fn with_to(mut self, to: Pose) -> Self {
        self.to = to;
        self
    }

    pub fn validate(&self) -> MotionResult<()> {
        ensure_positive("reveal duration", self.duration)?;
        ensure_non_negative("reveal delay", self.delay)?;
        self.ease.validate()
    }

    pub fn tween(&self) -> Tween<Pose> {
        Tween {
            from: self.from,
            to: self.to,
            duration: self.duration,
            ease: self.ease,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Phase {
    Idle,
    Hidden,
    Armed { starts_at: f64 },
    Visible { starts_at: f64 },
}

/// What the rendering layer reads from a reveal animator on a given frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RevealFrame {
    pub state: AnimationState,
    pub pose: Pose,
    /// Linear transition progress in `[0, 1]`.
    pub progress: f64,
    /// Trigger time plus stagger delay, once triggered.
    pub effective_start: Option<f64>,
}

/// Monotonic `idle -> hidden -> visible` state machine driving a reveal tween.
#[derive(Clone, Debug)]
pub struct RevealAnimator {
    spec: RevealSpec,
    tween: Tween<Pose>,
    phase: Phase,
}

impl RevealAnimator {
    pub fn new(spec: RevealSpec) -> MotionResult<Self> {
        spec.validate()?;
        Ok(Self {
            tween: spec.tween(),
            spec,
            phase: Phase::Idle,
        })
    }

    pub fn spec(&self) -> &RevealSpec {
        &self.spec
    }

    /// `idle -> hidden`. Returns `false` if already mounted.
    pub fn mount(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Hidden;
        true
    }

    /// Latches the visibility signal received at `now`.
    ///
    /// Only the first trigger after mount counts; the transition starts at
    /// `now + delay`. Returns whether this call armed the animator.
    pub fn trigger(&mut self, now: f64) -> bool {
        match self.phase {
            Phase::Hidden => {
                let starts_at = now + self.spec.delay;
                tracing::debug!(now, starts_at, "reveal armed");
                self.phase = Phase::Armed { starts_at };
                true
            }
            Phase::Idle | Phase::Armed { .. } | Phase::Visible { .. } => false,
        }
    }

    /// Promotes an armed animator to `visible` once its start time is reached.
    pub fn advance(&mut self, now: f64) {
        if let Phase::Armed { starts_at } = self.phase
            && now >= starts_at
        {
            self.phase = Phase::Visible { starts_at };
        }
    }

    /// State as of the last [`advance`](Self::advance) or
    /// [`sample`](Self::sample). Use [`state_at`](Self::state_at) between frames.
    pub fn state(&self) -> AnimationState {
        match self.phase {
            Phase::Idle => AnimationState::Idle,
            Phase::Hidden | Phase::Armed { .. } => AnimationState::Hidden,
            Phase::Visible { .. } => AnimationState::Visible,
        }
    }

    /// State at `now`, counting a stagger delay that has elapsed since the
    /// last sample.
    pub fn state_at(&self, now: f64) -> AnimationState {
        match self.phase {
            Phase::Armed { starts_at } if now >= starts_at => AnimationState::Visible,
            _ => self.state(),
        }
    }

    pub fn is_triggered(&self) -> bool {
        matches!(self.phase, Phase::Armed { .. } | Phase::Visible { .. })
    }

    pub fn effective_start(&self) -> Option<f64> {
        match self.phase {
            Phase::Armed { starts_at } | Phase::Visible { starts_at } => Some(starts_at),
            Phase::Idle | Phase::Hidden => None,
        }
    }

    /// Pose at `now` without touching the state machine.
    pub fn pose_at(&self, now: f64) -> Pose {
        match self.effective_start() {
            Some(start) => self.tween.sample(now - start),
            None => self.spec.from,
        }
    }

    pub fn progress_at(&self, now: f64) -> f64 {
        self.effective_start()
            .map_or(0.0, |start| self.tween.progress(now - start))
    }

    /// True once the transition has run to completion by `now`.
    pub fn is_settled(&self, now: f64) -> bool {
        self.effective_start()
            .is_some_and(|start| now >= start && self.tween.is_finished(now - start))
    }

    /// Advances to `now` and reports the frame the renderer should draw.
    pub fn sample(&mut self, now: f64) -> RevealFrame {
        self.advance(now);
        let frame = RevealFrame {
            state: self.state(),
            pose: self.pose_at(now),
            progress: self.progress_at(now),
            effective_start: self.effective_start(),
        };
        tracing::trace!(now, state = ?frame.state, progress = frame.progress, "reveal sampled");
        frame
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/reveal.rs"]
mod tests;
