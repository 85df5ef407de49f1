use crate::{
    animation::{
        ops::{delay, stagger_delay},
        reveal::{RevealAnimator, RevealSpec},
    },
    foundation::core::ensure_non_negative,
    foundation::error::MotionResult,
    page::content::{FeatureCard, SpecCard},
};

/// Content record with a declared stagger position.
pub trait Staggered {
    fn position(&self) -> usize;
}

impl Staggered for FeatureCard {
    fn position(&self) -> usize {
        self.position
    }
}

impl Staggered for SpecCard {
    fn position(&self) -> usize {
        self.position
    }
}

impl Staggered for usize {
    fn position(&self) -> usize {
        *self
    }
}

/// Fans content records out into individually delayed reveals.
///
/// Item `i` waits `template.delay + base + position(i) * step` seconds after
/// its trigger. Output order is input order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionComposer {
    template: RevealSpec,
    step: f64,
    base: f64,
}

impl SectionComposer {
    pub fn new(template: RevealSpec, step: f64) -> MotionResult<Self> {
        ensure_non_negative("stagger step", step)?;
        template.validate()?;
        Ok(Self {
            template,
            step,
            base: 0.0,
        })
    }

    pub fn with_base(mut self, base: f64) -> MotionResult<Self> {
        ensure_non_negative("stagger base", base)?;
        self.base = base;
        Ok(self)
    }

    pub fn template(&self) -> &RevealSpec {
        &self.template
    }

    pub fn delay_for(&self, position: usize) -> f64 {
        self.template.delay + stagger_delay(position, self.step, self.base)
    }

    pub fn spec_for<I: Staggered>(&self, item: &I) -> RevealSpec {
        delay(
            self.template,
            stagger_delay(item.position(), self.step, self.base),
        )
    }

    pub fn specs<I: Staggered>(&self, items: &[I]) -> Vec<RevealSpec> {
        items.iter().map(|item| self.spec_for(item)).collect()
    }

    pub fn compose<I: Staggered>(&self, items: &[I]) -> MotionResult<Vec<RevealAnimator>> {
        items
            .iter()
            .map(|item| RevealAnimator::new(self.spec_for(item)))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/composer.rs"]
mod tests;
