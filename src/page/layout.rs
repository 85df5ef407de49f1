use std::collections::{BTreeMap, BTreeSet};

use crate::{
    foundation::core::{Rect, Vec2, ensure_non_negative, ensure_positive},
    foundation::error::{MotionError, MotionResult},
    page::model::{Page, SectionId},
    viewport::observer::Viewport,
};

/// Minimum viewport width at which a grid switches to `columns`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Breakpoint {
    pub min_width: f64,
    pub columns: usize,
}

impl Breakpoint {
    pub const fn new(min_width: f64, columns: usize) -> Self {
        Self { min_width, columns }
    }
}

/// One cell of a responsive card grid, section-relative.
///
/// The grid is centered in the viewport, capped at `max_width` and inset by
/// `gutter` on both sides. Column count follows the widest matching
/// breakpoint; below every breakpoint the grid is a single column.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridCell {
    /// 0-based position in reading order.
    pub index: usize,
    /// Top edge of the first row.
    pub top: f64,
    pub height: f64,
    pub gap: f64,
    pub gutter: f64,
    pub max_width: f64,
    pub breakpoints: Vec<Breakpoint>,
}

impl GridCell {
    pub fn columns_at(&self, width: f64) -> usize {
        self.breakpoints
            .iter()
            .filter(|b| width >= b.min_width)
            .max_by(|a, b| a.min_width.total_cmp(&b.min_width))
            .map_or(1, |b| b.columns.max(1))
    }

    /// Cell rect for a viewport `width` wide. The x extent never leaves
    /// `0..width`.
    pub fn rect_at(&self, width: f64) -> Rect {
        let columns = self.columns_at(width);
        let outer = width.min(self.max_width);
        let inner = (outer - 2.0 * self.gutter).max(0.0);
        let cell_w = ((inner - (columns - 1) as f64 * self.gap) / columns as f64).max(0.0);
        let (row, col) = (self.index / columns, self.index % columns);

        let left = (width - outer) / 2.0 + self.gutter;
        let x0 = (left + col as f64 * (cell_w + self.gap)).clamp(0.0, width);
        let x1 = (x0 + cell_w).min(width);
        let y0 = self.top + row as f64 * (self.height + self.gap);
        Rect::new(x0, y0, x1, y0 + self.height)
    }

    pub fn validate(&self) -> MotionResult<()> {
        ensure_positive("grid cell height", self.height)?;
        ensure_non_negative("grid gap", self.gap)?;
        ensure_non_negative("grid gutter", self.gutter)?;
        ensure_positive("grid max width", self.max_width)?;
        if self.breakpoints.iter().any(|b| b.columns == 0) {
            return Err(MotionError::validation("grid breakpoints need at least one column"));
        }
        Ok(())
    }
}

/// Where an observer's target sits inside its section.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Region {
    /// A fixed section-relative rect.
    Fixed { rect: Rect },
    /// The whole section at its laid-out height, full viewport width.
    Section,
    /// A responsive grid cell.
    Grid(GridCell),
}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        Self::Fixed { rect }
    }
}

impl From<GridCell> for Region {
    fn from(cell: GridCell) -> Self {
        Self::Grid(cell)
    }
}

impl Region {
    pub fn validate(&self) -> MotionResult<()> {
        match self {
            Self::Fixed { rect } if rect.width() < 0.0 || rect.height() < 0.0 => {
                Err(MotionError::validation("inverted rect"))
            }
            Self::Fixed { .. } | Self::Section => Ok(()),
            Self::Grid(cell) => cell.validate(),
        }
    }
}

/// Vertical stack of sections in document order.
///
/// The navbar is fixed and takes no flow height. The hero fills the viewport
/// unless an explicit height is set.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageLayout {
    #[serde(default = "default_heights")]
    pub heights: BTreeMap<SectionId, f64>,
    /// Observer keys whose target is currently absent from the document.
    #[serde(default)]
    pub unmounted: BTreeSet<String>,
}

fn default_heights() -> BTreeMap<SectionId, f64> {
    BTreeMap::from([
        (SectionId::Features, 1200.0),
        (SectionId::Demo, 900.0),
        (SectionId::Specs, 1000.0),
        (SectionId::Cta, 700.0),
        (SectionId::Footer, 500.0),
    ])
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            heights: default_heights(),
            unmounted: BTreeSet::new(),
        }
    }
}

impl PageLayout {
    pub fn validate(&self) -> MotionResult<()> {
        if let Some(h) = self.heights.get(&SectionId::Navbar)
            && *h != 0.0
        {
            return Err(MotionError::layout("navbar is fixed and has no flow height"));
        }
        for (section, h) in &self.heights {
            if *section != SectionId::Navbar {
                ensure_positive("section height", *h)
                    .map_err(|_| MotionError::layout(format!("{section:?} height must be > 0")))?;
            }
        }
        Ok(())
    }

    pub fn with_height(mut self, section: SectionId, height: f64) -> MotionResult<Self> {
        self.heights.insert(section, height);
        self.validate()?;
        Ok(self)
    }

    pub fn height_of(&self, section: SectionId, viewport: &Viewport) -> f64 {
        match section {
            SectionId::Navbar => 0.0,
            SectionId::Hero => self
                .heights
                .get(&section)
                .copied()
                .unwrap_or(viewport.size.height),
            _ => self.heights.get(&section).copied().unwrap_or(0.0),
        }
    }

    /// Document-space y of the section's top edge.
    pub fn section_top(&self, section: SectionId, viewport: &Viewport) -> f64 {
        if section == SectionId::Navbar {
            return viewport.scroll_y;
        }
        SectionId::ALL
            .iter()
            .take_while(|s| **s != section)
            .map(|s| self.height_of(*s, viewport))
            .sum()
    }

    pub fn document_height(&self, viewport: &Viewport) -> f64 {
        SectionId::ALL
            .iter()
            .map(|s| self.height_of(*s, viewport))
            .sum()
    }

    pub fn is_mounted(&self, key: &str) -> bool {
        !self.unmounted.contains(key)
    }

    /// Returns whether the key was mounted before.
    pub fn unmount(&mut self, key: impl Into<String>) -> bool {
        self.unmounted.insert(key.into())
    }

    /// Returns whether the key was unmounted before.
    pub fn mount(&mut self, key: &str) -> bool {
        self.unmounted.remove(key)
    }

    /// Section-relative rect of `region` for the current viewport.
    pub fn place(&self, section: SectionId, region: &Region, viewport: &Viewport) -> Rect {
        let width = viewport.size.width;
        match region {
            Region::Fixed { rect } => *rect,
            Region::Section => Rect::new(0.0, 0.0, width, self.height_of(section, viewport)),
            Region::Grid(cell) => cell.rect_at(width),
        }
    }

    /// Document-space region of every observer in `page`, in observer order.
    ///
    /// Unmounted targets resolve to `None`.
    pub fn resolve(&self, page: &Page, viewport: &Viewport) -> Vec<Option<Rect>> {
        page.observers
            .iter()
            .map(|obs| {
                if !self.is_mounted(&obs.key) {
                    return None;
                }
                let top = self.section_top(obs.section, viewport);
                Some(self.place(obs.section, &obs.region, viewport) + Vec2::new(0.0, top))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/layout.rs"]
mod tests;
