use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::core::{Fps, FrameIndex},
    foundation::error::{MotionError, MotionResult},
    page::{layout::PageLayout, model::Page},
    runtime::{
        engine::{PageEvent, PageRuntime},
        snapshot::FrameSnapshot,
    },
    viewport::observer::Viewport,
};

/// A scripted session: initial viewport, layout overrides and timed events.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub fps: Fps,
    /// Seconds of simulated time; frames cover `[0, duration]`.
    pub duration: f64,
    #[serde(default)]
    pub layout: PageLayout,
    #[serde(default)]
    pub events: Vec<TimedEvent>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimedEvent {
    pub at: f64,
    #[serde(flatten)]
    pub event: PageEvent,
}

impl Scenario {
    pub fn from_json(s: &str) -> MotionResult<Self> {
        let scenario: Scenario =
            serde_json::from_str(s).map_err(|e| MotionError::serde(e.to_string()))?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: impl AsRef<Path>) -> MotionResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read scenario '{}'", path.display()))?;
        Self::from_json(&s)
    }

    pub fn validate(&self) -> MotionResult<()> {
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(MotionError::validation("scenario duration must be >= 0"));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        if let Some(bad) = self.events.iter().find(|e| !e.at.is_finite() || e.at < 0.0) {
            return Err(MotionError::validation(format!(
                "event time must be >= 0 (got {})",
                bad.at
            )));
        }
        self.layout.validate()
    }

    pub fn frame_count(&self) -> u64 {
        self.fps.frames_covering(self.duration) + 1
    }

    /// Mounts `page` at t = 0 and samples one snapshot per frame.
    ///
    /// Events fire in time order (ties keep file order) on the first frame
    /// whose time reaches them.
    #[tracing::instrument(skip(self, page))]
    pub fn run(&self, page: Page) -> MotionResult<Vec<FrameSnapshot>> {
        self.validate()?;
        let mut events: Vec<&TimedEvent> = self.events.iter().collect();
        events.sort_by(|a, b| a.at.total_cmp(&b.at));

        let mut rt = PageRuntime::new(page, self.layout.clone(), self.viewport)?;
        rt.mount(0.0);

        let mut pending = events.into_iter().peekable();
        let mut out = Vec::new();
        for f in 0..self.frame_count() {
            let now = self.fps.frame_time(FrameIndex(f));
            while let Some(ev) = pending.next_if(|e| e.at <= now) {
                tracing::debug!(at = ev.at, now, event = ?ev.event, "event");
                rt.apply(&ev.event, now)?;
            }
            out.push(rt.frame(now));
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/scenario.rs"]
mod tests;
