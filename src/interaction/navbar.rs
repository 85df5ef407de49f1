use crate::{
    animation::{ease::Ease, tween::Tween},
    foundation::core::ensure_non_negative,
    foundation::error::MotionResult,
};

/// Scroll distance past which the navbar turns compact.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Target of every "Try Zara" call to action.
pub const TRY_ZARA_URL: &str = "https://zenzara-ai.netlify.app/";

const MENU_SLIDE_SECS: f64 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavItem {
    Features,
    Specs,
    Roadmap,
    Faq,
}

impl NavItem {
    pub const ALL: [NavItem; 4] = [Self::Features, Self::Specs, Self::Roadmap, Self::Faq];

    pub fn label(self) -> &'static str {
        match self {
            Self::Features => "Features",
            Self::Specs => "Specs",
            Self::Roadmap => "Roadmap",
            Self::Faq => "FAQ",
        }
    }

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Features => "#features",
            Self::Specs => "#specs",
            Self::Roadmap => "#roadmap",
            Self::Faq => "#faq",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavbarMode {
    #[default]
    Expanded,
    Compact,
}

/// Reversible compact/expanded toggle driven by scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavbarState {
    threshold: f64,
    mode: NavbarMode,
}

impl NavbarState {
    pub fn new(threshold: f64) -> MotionResult<Self> {
        ensure_non_negative("navbar scroll threshold", threshold)?;
        Ok(Self {
            threshold,
            mode: NavbarMode::Expanded,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Compact iff `scroll_y > threshold`. Returns whether the mode changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let next = if scroll_y > self.threshold {
            NavbarMode::Compact
        } else {
            NavbarMode::Expanded
        };
        let changed = next != self.mode;
        if changed {
            tracing::debug!(scroll_y, ?next, "navbar mode changed");
        }
        self.mode = next;
        changed
    }

    pub fn mode(&self) -> NavbarMode {
        self.mode
    }

    pub fn is_compact(&self) -> bool {
        self.mode == NavbarMode::Compact
    }
}

impl Default for NavbarState {
    fn default() -> Self {
        Self {
            threshold: SCROLL_THRESHOLD_PX,
            mode: NavbarMode::Expanded,
        }
    }
}

/// Mobile menu open/closed flag plus its slide-in panel.
///
/// The panel offset is a fraction of its width: `1.0` fully off-screen to the
/// right, `0.0` in place. Toggling mid-slide continues from the current offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MobileMenu {
    open: bool,
    slide: Option<(f64, Tween<f64>)>,
}

impl Default for MobileMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl MobileMenu {
    pub fn new() -> Self {
        Self {
            open: false,
            slide: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns whether the state changed.
    pub fn open(&mut self, now: f64) -> bool {
        self.set_open(true, now)
    }

    pub fn close(&mut self, now: f64) -> bool {
        self.set_open(false, now)
    }

    /// Closes the menu and yields the anchor to navigate to.
    pub fn select(&mut self, item: NavItem, now: f64) -> &'static str {
        self.close(now);
        item.anchor()
    }

    pub fn panel_offset(&self, now: f64) -> f64 {
        match &self.slide {
            Some((started, tween)) => tween.sample(now - started),
            None => {
                if self.open {
                    0.0
                } else {
                    1.0
                }
            }
        }
    }

    /// The panel stays mounted while open and while its exit slide runs.
    pub fn is_present(&self, now: f64) -> bool {
        if self.open {
            return true;
        }
        match &self.slide {
            Some((started, tween)) => !tween.is_finished(now - started),
            None => false,
        }
    }

    fn set_open(&mut self, open: bool, now: f64) -> bool {
        if self.open == open {
            return false;
        }
        let from = self.panel_offset(now);
        let to = if open { 0.0 } else { 1.0 };
        self.slide = Some((
            now,
            Tween {
                from,
                to,
                duration: MENU_SLIDE_SECS,
                ease: Ease::EXPO_OUT,
            },
        ));
        self.open = open;
        tracing::debug!(open, now, "mobile menu toggled");
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/navbar.rs"]
mod tests;
