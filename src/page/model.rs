use std::collections::BTreeSet;

use crate::{
    animation::{looping::LoopSpec, pose::Pose, reveal::RevealSpec},
    foundation::core::ensure_non_negative,
    foundation::error::{MotionError, MotionResult},
    page::layout::Region,
    viewport::{observer::ObserveOptions, parallax::Parallax},
};

/// Page sections in document order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Navbar,
    Hero,
    Features,
    Demo,
    Specs,
    Cta,
    Footer,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        Self::Navbar,
        Self::Hero,
        Self::Features,
        Self::Demo,
        Self::Specs,
        Self::Cta,
        Self::Footer,
    ];

    /// In-page anchor, for sections that have one.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            Self::Features => Some("#features"),
            Self::Demo => Some("#demo"),
            Self::Specs => Some("#specs"),
            _ => None,
        }
    }
}

/// What starts an element's reveal.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trigger {
    /// Fires as soon as the page mounts.
    Mount,
    /// Fires when the named observer first reports its region in view.
    InView { observer: String },
}

/// A watched region, positioned relative to its section's top-left corner.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ObserverSpec {
    pub key: String,
    pub section: SectionId,
    pub region: Region,
    #[serde(default)]
    pub options: ObserveOptions,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementSpec {
    pub key: String,
    pub section: SectionId,
    pub trigger: Trigger,
    pub reveal: RevealSpec,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DecorationSpec {
    pub key: String,
    pub section: SectionId,
    pub cycle: LoopSpec<Pose>,
}

/// Every animated piece of the page and what drives it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Page {
    pub observers: Vec<ObserverSpec>,
    pub elements: Vec<ElementSpec>,
    #[serde(default)]
    pub decorations: Vec<DecorationSpec>,
    #[serde(default)]
    pub parallax_divisors: Vec<f64>,
    pub navbar_threshold: f64,
}

impl Page {
    pub fn validate(&self) -> MotionResult<()> {
        let mut observer_keys = BTreeSet::new();
        for obs in &self.observers {
            if !observer_keys.insert(obs.key.as_str()) {
                return Err(MotionError::validation(format!(
                    "duplicate observer key '{}'",
                    obs.key
                )));
            }
            obs.region.validate().map_err(|e| {
                MotionError::validation(format!("observer '{}': {e}", obs.key))
            })?;
        }

        let mut element_keys = BTreeSet::new();
        for el in &self.elements {
            if !element_keys.insert(el.key.as_str()) {
                return Err(MotionError::validation(format!(
                    "duplicate element key '{}'",
                    el.key
                )));
            }
            if let Trigger::InView { observer } = &el.trigger
                && !observer_keys.contains(observer.as_str())
            {
                return Err(MotionError::validation(format!(
                    "element '{}' references missing observer '{observer}'",
                    el.key
                )));
            }
            el.reveal.validate()?;
        }

        for deco in &self.decorations {
            if !element_keys.insert(deco.key.as_str()) {
                return Err(MotionError::validation(format!(
                    "duplicate element key '{}'",
                    deco.key
                )));
            }
            deco.cycle.validate()?;
        }

        Parallax::new(self.parallax_divisors.iter().copied())?;
        ensure_non_negative("navbar threshold", self.navbar_threshold)?;
        Ok(())
    }

    pub fn element(&self, key: &str) -> Option<&ElementSpec> {
        self.elements.iter().find(|e| e.key == key)
    }

    pub fn observer_index(&self, key: &str) -> Option<usize> {
        self.observers.iter().position(|o| o.key == key)
    }

    pub fn to_json_pretty(&self) -> MotionResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| MotionError::serde(e.to_string()))
    }

    pub fn from_json(s: &str) -> MotionResult<Self> {
        let page: Page = serde_json::from_str(s).map_err(|e| MotionError::serde(e.to_string()))?;
        page.validate()?;
        Ok(page)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/model.rs"]
mod tests;
