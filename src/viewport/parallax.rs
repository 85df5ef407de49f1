use crate::{
    foundation::core::{Point, Size, Vec2},
    foundation::error::{MotionError, MotionResult},
};

/// Hero background orbs: the first drifts with the pointer, the second against it.
pub const HERO_DIVISORS: [f64; 2] = [40.0, -50.0];

/// Pointer-driven translation of decorative layers.
///
/// Each layer moves by `(pointer - viewport_center) / divisor`. Offsets are
/// unclamped: pointers far from center give proportionally
/// large offsets.
#[derive(Clone, Debug, PartialEq)]
pub struct Parallax {
    divisors: Vec<f64>,
    offsets: Vec<Vec2>,
}

impl Parallax {
    pub fn new(divisors: impl IntoIterator<Item = f64>) -> MotionResult<Self> {
        let divisors: Vec<f64> = divisors.into_iter().collect();
        if let Some(bad) = divisors.iter().find(|d| !d.is_finite() || **d == 0.0) {
            return Err(MotionError::validation(format!(
                "parallax divisor must be finite and non-zero (got {bad})"
            )));
        }
        let offsets = vec![Vec2::ZERO; divisors.len()];
        Ok(Self { divisors, offsets })
    }

    pub fn hero() -> Self {
        Self {
            divisors: HERO_DIVISORS.to_vec(),
            offsets: vec![Vec2::ZERO; HERO_DIVISORS.len()],
        }
    }

    pub fn divisors(&self) -> &[f64] {
        &self.divisors
    }

    /// Offset of a layer with `divisor` for a pointer at `pointer` (client coordinates).
    pub fn offset_for(divisor: f64, pointer: Point, viewport: Size) -> Vec2 {
        let center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
        (pointer - center) / divisor
    }

    /// Recomputes every layer's offset.
    ///
    /// When the layers are not mounted the event is dropped and the previous
    /// offsets stay. Returns whether offsets were updated.
    pub fn pointer_moved(&mut self, pointer: Point, viewport: Size, mounted: bool) -> bool {
        if !mounted {
            tracing::trace!("parallax layers unmounted; ignoring pointer");
            return false;
        }
        for (offset, divisor) in self.offsets.iter_mut().zip(&self.divisors) {
            *offset = Self::offset_for(*divisor, pointer, viewport);
        }
        true
    }

    pub fn offsets(&self) -> &[Vec2] {
        &self.offsets
    }
}

impl Default for Parallax {
    fn default() -> Self {
        Self::hero()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewport/parallax.rs"]
mod tests;
