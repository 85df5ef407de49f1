use crate::foundation::core::{Affine, Point, Vec2};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// Visual values an animated element exposes to the rendering layer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Translation from the element's laid-out position, in CSS pixels.
    pub offset: Vec2,
    /// Uniform scale around the element center.
    pub scale: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

impl Lerp for Pose {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t),
            offset: <Vec2 as Lerp>::lerp(&a.offset, &b.offset, t),
            scale: <f64 as Lerp>::lerp(&a.scale, &b.scale, t),
        }
    }
}

impl Pose {
    /// Fully shown at the laid-out position.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        offset: Vec2::ZERO,
        scale: 1.0,
    };

    /// Transparent, otherwise at rest.
    pub fn faded() -> Self {
        Self {
            opacity: 0.0,
            ..Self::REST
        }
    }

    /// Transparent and pushed down by `dy`.
    pub fn faded_up(dy: f64) -> Self {
        Self {
            opacity: 0.0,
            offset: Vec2::new(0.0, dy),
            scale: 1.0,
        }
    }

    /// Transparent and pushed sideways by `dx` (negative enters from the left).
    pub fn faded_x(dx: f64) -> Self {
        Self {
            opacity: 0.0,
            offset: Vec2::new(dx, 0.0),
            scale: 1.0,
        }
    }

    /// Transparent and shrunk to `scale`.
    pub fn popped(scale: f64) -> Self {
        Self {
            opacity: 0.0,
            offset: Vec2::ZERO,
            scale,
        }
    }

    /// Opaque but displaced vertically by `dy`.
    pub fn dropped(dy: f64) -> Self {
        Self {
            offset: Vec2::new(0.0, dy),
            ..Self::REST
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Affine for an element whose scale pivot is `anchor`.
    pub fn to_affine(self, anchor: Point) -> Affine {
        let t_translate = Affine::translate(self.offset);
        let t_anchor = Affine::translate(anchor.to_vec2());
        let t_unanchor = Affine::translate(-anchor.to_vec2());
        let t_scale = Affine::scale(self.scale);

        // T(offset) * T(anchor) * S(scale) * T(-anchor)
        t_translate * t_anchor * t_scale * t_unanchor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/pose.rs"]
mod tests;
