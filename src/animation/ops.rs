use crate::animation::reveal::RevealSpec;

/// Stagger offset for the item at `position`: `base + position * step`.
pub fn stagger_delay(position: usize, step: f64, base: f64) -> f64 {
    base + (position as f64) * step
}

/// Offsets for `count` siblings in declared order.
pub fn stagger_delays(count: usize, step: f64, base: f64) -> Vec<f64> {
    (0..count).map(|i| stagger_delay(i, step, base)).collect()
}

/// Pushes a reveal's start back by `by` seconds.
pub fn delay(spec: RevealSpec, by: f64) -> RevealSpec {
    let total = spec.delay + by;
    spec.with_delay(total)
}

/// Applies sibling stagger to reveals in their given order.
pub fn stagger(specs: Vec<RevealSpec>, step: f64, base: f64) -> Vec<RevealSpec> {
    specs
        .into_iter()
        .enumerate()
        .map(|(i, spec)| delay(spec, stagger_delay(i, step, base)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;
