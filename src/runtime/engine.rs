use crate::{
    animation::{looping::LoopAnimator, pose::Pose, reveal::RevealAnimator},
    foundation::core::{FrameIndex, Point, Rect, Size},
    foundation::error::{MotionError, MotionResult},
    interaction::navbar::{MobileMenu, NavItem, NavbarState},
    page::{
        layout::PageLayout,
        model::{Page, SectionId, Trigger},
    },
    runtime::snapshot::{DecorationFrame, ElementFrame, FrameSnapshot},
    viewport::{
        observer::{Viewport, VisibilityObserver},
        parallax::Parallax,
    },
};

/// Layout key of the hero's parallax layers.
pub const PARALLAX_TARGET: &str = "hero.orbs";

/// Input the page reacts to.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    Scroll { y: f64 },
    Resize { width: f64, height: f64 },
    Pointer { x: f64, y: f64 },
    OpenMenu,
    CloseMenu,
    SelectNav { item: NavItem },
    /// Removes a target (observer key or [`PARALLAX_TARGET`]) from the document.
    Unmount { target: String },
    Mount { target: String },
}

/// Drives every observer and animator of a [`Page`] from discrete events.
///
/// Time is supplied by the caller in seconds; nothing here reads a clock.
pub struct PageRuntime {
    page: Page,
    layout: PageLayout,
    viewport: Viewport,
    regions: Vec<Option<Rect>>,
    observers: Vec<VisibilityObserver>,
    // element indices triggered by each observer
    watchers: Vec<Vec<usize>>,
    animators: Vec<RevealAnimator>,
    loops: Vec<LoopAnimator<Pose>>,
    navbar: NavbarState,
    menu: MobileMenu,
    parallax: Parallax,
    mounted_at: Option<f64>,
    frame: FrameIndex,
}

impl PageRuntime {
    pub fn new(page: Page, layout: PageLayout, viewport: Viewport) -> MotionResult<Self> {
        page.validate()?;
        layout.validate()?;
        if viewport.size.width <= 0.0 || viewport.size.height <= 0.0 {
            return Err(MotionError::layout("viewport size must be > 0"));
        }

        let observers = page
            .observers
            .iter()
            .map(|o| VisibilityObserver::new(o.options))
            .collect();
        let mut watchers = vec![Vec::new(); page.observers.len()];
        for (i, el) in page.elements.iter().enumerate() {
            if let Trigger::InView { observer } = &el.trigger
                && let Some(obs) = page.observer_index(observer)
            {
                watchers[obs].push(i);
            }
        }
        let animators = page
            .elements
            .iter()
            .map(|e| RevealAnimator::new(e.reveal))
            .collect::<MotionResult<Vec<_>>>()?;
        let loops = page
            .decorations
            .iter()
            .map(|d| LoopAnimator::new(d.cycle.clone()))
            .collect::<MotionResult<Vec<_>>>()?;
        let navbar = NavbarState::new(page.navbar_threshold)?;
        let parallax = Parallax::new(page.parallax_divisors.iter().copied())?;
        let regions = layout.resolve(&page, &viewport);

        Ok(Self {
            page,
            layout,
            viewport,
            regions,
            observers,
            watchers,
            animators,
            loops,
            navbar,
            menu: MobileMenu::new(),
            parallax,
            mounted_at: None,
            frame: FrameIndex(0),
        })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn navbar(&self) -> &NavbarState {
        &self.navbar
    }

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted_at.is_some()
    }

    pub fn animator(&self, key: &str) -> Option<&RevealAnimator> {
        let i = self.page.elements.iter().position(|e| e.key == key)?;
        self.animators.get(i)
    }

    /// Mounts every element, fires mount triggers and runs the initial
    /// intersection pass. Later calls are no-ops.
    #[tracing::instrument(skip(self))]
    pub fn mount(&mut self, now: f64) {
        if self.mounted_at.is_some() {
            return;
        }
        self.mounted_at = Some(now);
        for (anim, el) in self.animators.iter_mut().zip(&self.page.elements) {
            anim.mount();
            if el.trigger == Trigger::Mount {
                anim.trigger(now);
            }
        }
        tracing::debug!(elements = self.animators.len(), "page mounted");
        self.observe_all(now);
    }

    #[tracing::instrument(skip(self))]
    pub fn scroll(&mut self, y: f64, now: f64) {
        self.viewport.scroll_y = y;
        if self.navbar.on_scroll(y) {
            tracing::debug!(mode = ?self.navbar.mode(), "navbar toggled");
        }
        self.refresh(now);
    }

    #[tracing::instrument(skip(self))]
    pub fn resize(&mut self, size: Size, now: f64) -> MotionResult<()> {
        if size.width <= 0.0 || size.height <= 0.0 {
            return Err(MotionError::layout("viewport size must be > 0"));
        }
        self.viewport.size = size;
        self.refresh(now);
        Ok(())
    }

    /// Pointer position in client coordinates. Dropped while the parallax
    /// layers are absent.
    #[tracing::instrument(skip(self))]
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let mounted = self.is_mounted() && self.layout.is_mounted(PARALLAX_TARGET);
        self.parallax
            .pointer_moved(pointer, self.viewport.size, mounted)
    }

    #[tracing::instrument(skip(self))]
    pub fn open_menu(&mut self, now: f64) -> bool {
        self.menu.open(now)
    }

    #[tracing::instrument(skip(self))]
    pub fn close_menu(&mut self, now: f64) -> bool {
        self.menu.close(now)
    }

    /// Closes the menu and jumps to the item's section when it exists on the page.
    #[tracing::instrument(skip(self))]
    pub fn select_nav(&mut self, item: NavItem, now: f64) -> &'static str {
        let anchor = self.menu.select(item, now);
        if let Some(section) = SectionId::ALL
            .into_iter()
            .find(|s| s.anchor() == Some(anchor))
        {
            let top = self.layout.section_top(section, &self.viewport);
            self.scroll(top, now);
        }
        anchor
    }

    /// Removes a target from the document. Its observer stops reporting.
    pub fn unmount(&mut self, target: &str, now: f64) {
        if self.layout.unmount(target) {
            tracing::debug!(key = target, "target unmounted");
            self.refresh(now);
        }
    }

    pub fn remount(&mut self, target: &str, now: f64) {
        if self.layout.mount(target) {
            tracing::debug!(key = target, "target mounted");
            self.refresh(now);
        }
    }

    pub fn apply(&mut self, event: &PageEvent, now: f64) -> MotionResult<()> {
        match event {
            PageEvent::Scroll { y } => self.scroll(*y, now),
            PageEvent::Resize { width, height } => self.resize(Size::new(*width, *height), now)?,
            PageEvent::Pointer { x, y } => {
                self.pointer_move(Point::new(*x, *y));
            }
            PageEvent::OpenMenu => {
                self.open_menu(now);
            }
            PageEvent::CloseMenu => {
                self.close_menu(now);
            }
            PageEvent::SelectNav { item } => {
                self.select_nav(*item, now);
            }
            PageEvent::Unmount { target } => self.unmount(target, now),
            PageEvent::Mount { target } => self.remount(target, now),
        }
        Ok(())
    }

    /// Samples every animator at `now`. Advances the frame counter.
    pub fn frame(&mut self, now: f64) -> FrameSnapshot {
        let elements = self
            .animators
            .iter_mut()
            .zip(&self.page.elements)
            .map(|(anim, el)| ElementFrame {
                key: el.key.clone(),
                reveal: anim.sample(now),
            })
            .collect();
        let decorations = self
            .loops
            .iter()
            .zip(&self.page.decorations)
            .map(|(lp, d)| match self.mounted_at {
                // loops run from mount
                Some(start) => DecorationFrame {
                    key: d.key.clone(),
                    pose: lp.sample(now - start),
                    cycle: lp.cycle(now - start),
                },
                None => DecorationFrame {
                    key: d.key.clone(),
                    pose: d.cycle.keys[0],
                    cycle: 0,
                },
            })
            .collect();

        let snapshot = FrameSnapshot {
            frame: self.frame,
            time: now,
            scroll_y: self.viewport.scroll_y,
            navbar: self.navbar.mode(),
            menu_open: self.menu.is_open(),
            menu_offset: self.menu.panel_offset(now),
            parallax: self.parallax.offsets().to_vec(),
            elements,
            decorations,
        };
        self.frame = FrameIndex(self.frame.0 + 1);
        snapshot
    }

    fn refresh(&mut self, now: f64) {
        self.regions = self.layout.resolve(&self.page, &self.viewport);
        if self.is_mounted() {
            self.observe_all(now);
        }
    }

    fn observe_all(&mut self, now: f64) {
        for (i, observer) in self.observers.iter_mut().enumerate() {
            if !observer.observe(self.regions[i], &self.viewport) {
                continue;
            }
            tracing::debug!(observer = %self.page.observers[i].key, now, "observer fired");
            for &el in &self.watchers[i] {
                self.animators[el].trigger(now);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/engine.rs"]
mod tests;
