use std::collections::BTreeSet;

use crate::{
    animation::{looping::LoopSpec, pose::Pose, reveal::RevealSpec},
    foundation::error::{MotionError, MotionResult},
    interaction::navbar::SCROLL_THRESHOLD_PX,
    page::{
        composer::{SectionComposer, Staggered},
        layout::Region,
        model::{DecorationSpec, ElementSpec, ObserverSpec, Page, SectionId, Trigger},
    },
    viewport::observer::ObserveOptions,
};

/// Builder for [`Page`](crate::Page).
pub struct PageBuilder {
    observers: Vec<ObserverSpec>,
    elements: Vec<ElementSpec>,
    decorations: Vec<DecorationSpec>,
    parallax_divisors: Vec<f64>,
    navbar_threshold: f64,
    keys: BTreeSet<String>,
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PageBuilder {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            elements: Vec::new(),
            decorations: Vec::new(),
            parallax_divisors: Vec::new(),
            navbar_threshold: SCROLL_THRESHOLD_PX,
            keys: BTreeSet::new(),
        }
    }

    pub fn navbar_threshold(mut self, px: f64) -> Self {
        self.navbar_threshold = px;
        self
    }

    pub fn parallax(mut self, divisors: impl IntoIterator<Item = f64>) -> Self {
        self.parallax_divisors = divisors.into_iter().collect();
        self
    }

    /// Watch `region` (section-relative) under a unique observer key.
    pub fn observer(
        mut self,
        key: impl Into<String>,
        section: SectionId,
        region: impl Into<Region>,
        options: ObserveOptions,
    ) -> MotionResult<Self> {
        let key = key.into();
        if self.observers.iter().any(|o| o.key == key) {
            return Err(MotionError::validation(format!(
                "duplicate observer key '{key}'"
            )));
        }
        self.observers.push(ObserverSpec {
            key,
            section,
            region: region.into(),
            options,
        });
        Ok(self)
    }

    /// Element revealed as soon as the page mounts.
    pub fn on_mount(
        self,
        key: impl Into<String>,
        section: SectionId,
        reveal: RevealSpec,
    ) -> MotionResult<Self> {
        self.element(key, section, Trigger::Mount, reveal)
    }

    /// Element revealed when `observer` first reports its region in view.
    pub fn in_view(
        self,
        key: impl Into<String>,
        section: SectionId,
        observer: impl Into<String>,
        reveal: RevealSpec,
    ) -> MotionResult<Self> {
        let trigger = Trigger::InView {
            observer: observer.into(),
        };
        self.element(key, section, trigger, reveal)
    }

    pub fn element(
        mut self,
        key: impl Into<String>,
        section: SectionId,
        trigger: Trigger,
        reveal: RevealSpec,
    ) -> MotionResult<Self> {
        let key = self.claim(key.into())?;
        self.elements.push(ElementSpec {
            key,
            section,
            trigger,
            reveal,
        });
        Ok(self)
    }

    pub fn decoration(
        mut self,
        key: impl Into<String>,
        section: SectionId,
        cycle: LoopSpec<Pose>,
    ) -> MotionResult<Self> {
        let key = self.claim(key.into())?;
        self.decorations.push(DecorationSpec { key, section, cycle });
        Ok(self)
    }

    /// One observer and one staggered element per item, both keyed
    /// `{prefix}.{position}`.
    pub fn cards<I: Staggered>(
        mut self,
        prefix: &str,
        section: SectionId,
        items: &[I],
        composer: &SectionComposer,
        options: ObserveOptions,
        region_for: impl Fn(&I) -> Region,
    ) -> MotionResult<Self> {
        for item in items {
            let key = format!("{prefix}.{}", item.position());
            self = self
                .observer(key.clone(), section, region_for(item), options)?
                .in_view(key.clone(), section, key, composer.spec_for(item))?;
        }
        Ok(self)
    }

    /// Staggered elements sharing one existing observer, keyed `{prefix}.{position}`.
    pub fn group<I: Staggered>(
        mut self,
        prefix: &str,
        section: SectionId,
        observer: &str,
        items: &[I],
        composer: &SectionComposer,
    ) -> MotionResult<Self> {
        for item in items {
            self = self.in_view(
                format!("{prefix}.{}", item.position()),
                section,
                observer,
                composer.spec_for(item),
            )?;
        }
        Ok(self)
    }

    /// Build and validate the final [`Page`](crate::Page).
    pub fn build(self) -> MotionResult<Page> {
        let page = Page {
            observers: self.observers,
            elements: self.elements,
            decorations: self.decorations,
            parallax_divisors: self.parallax_divisors,
            navbar_threshold: self.navbar_threshold,
        };
        page.validate()?;
        Ok(page)
    }

    fn claim(&mut self, key: String) -> MotionResult<String> {
        if !self.keys.insert(key.clone()) {
            return Err(MotionError::validation(format!(
                "duplicate element key '{key}'"
            )));
        }
        Ok(key)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/dsl.rs"]
mod tests;
