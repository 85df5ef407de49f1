use crate::{
    foundation::core::{Point, Rect, Size},
    viewport::margin::RootMargin,
};

/// Visible window onto the document.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub size: Size,
    #[serde(default)]
    pub scroll_y: f64,
}

impl Viewport {
    pub fn new(size: Size) -> Self {
        Self { size, scroll_y: 0.0 }
    }

    /// Visible area in document coordinates.
    pub fn visible_rect(&self) -> Rect {
        Rect::new(
            0.0,
            self.scroll_y,
            self.size.width,
            self.scroll_y + self.size.height,
        )
    }

    /// Center of the window in client coordinates.
    pub fn center(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Size::new(1280.0, 800.0))
    }
}

/// Intersection test used by observers.
///
/// Edge-adjacent rectangles count as intersecting. An inverted root (a margin
/// that shrank the viewport past zero) intersects nothing.
pub fn intersects(region: Rect, root: Rect) -> bool {
    if root.x1 < root.x0 || root.y1 < root.y0 {
        return false;
    }
    region.x0 <= root.x1 && root.x0 <= region.x1 && region.y0 <= root.y1 && root.y0 <= region.y1
}

/// Set-once boolean.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct VisibilityLatch {
    has_entered_once: bool,
}

impl VisibilityLatch {
    /// Returns `true` only on the call that flips the latch.
    pub fn set(&mut self) -> bool {
        let fresh = !self.has_entered_once;
        self.has_entered_once = true;
        fresh
    }

    pub fn get(&self) -> bool {
        self.has_entered_once
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ObserveOptions {
    #[serde(default)]
    pub margin: RootMargin,
    #[serde(default = "default_once")]
    pub once: bool,
}

fn default_once() -> bool {
    true
}

impl ObserveOptions {
    /// Fire-once observer with the given margin.
    pub fn once(margin: RootMargin) -> Self {
        Self { margin, once: true }
    }

    /// Observer whose signal follows the region in and out of view.
    pub fn continuous(margin: RootMargin) -> Self {
        Self {
            margin,
            once: false,
        }
    }
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self::once(RootMargin::ZERO)
    }
}

/// Reports whether a region has entered the margin-adjusted viewport.
///
/// With `once` the signal is a [`VisibilityLatch`]; later exits are ignored.
/// Otherwise it tracks the latest intersection result.
#[derive(Clone, Debug, Default)]
pub struct VisibilityObserver {
    options: ObserveOptions,
    latch: VisibilityLatch,
    in_view: bool,
}

impl VisibilityObserver {
    pub fn new(options: ObserveOptions) -> Self {
        Self {
            options,
            latch: VisibilityLatch::default(),
            in_view: false,
        }
    }

    pub fn options(&self) -> &ObserveOptions {
        &self.options
    }

    pub fn signal(&self) -> bool {
        if self.options.once {
            self.latch.get()
        } else {
            self.in_view
        }
    }

    /// Re-evaluates against the current viewport.
    ///
    /// `region` is `None` when the target is unmounted; that is a no-op.
    /// Returns `true` when the signal rose on this call.
    pub fn observe(&mut self, region: Option<Rect>, viewport: &Viewport) -> bool {
        let Some(region) = region else {
            tracing::trace!("observer target unmounted; ignoring");
            return false;
        };
        if self.options.once && self.latch.get() {
            return false;
        }

        let root = self.options.margin.apply(viewport.visible_rect());
        let hit = intersects(region, root);
        if self.options.once {
            if hit && self.latch.set() {
                tracing::debug!(?region, scroll_y = viewport.scroll_y, "region entered view");
                return true;
            }
            return false;
        }

        let rose = hit && !self.in_view;
        self.in_view = hit;
        rose
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewport/observer.rs"]
mod tests;
