//! Scroll-triggered reveal animations for the Zara AI landing page.
//!
//! The crate models the page's motion layer without rendering anything:
//!
//! - Build a [`Page`] (or take [`Page::zara`]) describing every animated element
//! - Drive it with a [`PageRuntime`] from scroll, resize, pointer and menu events
//! - Sample a [`FrameSnapshot`] per frame for the renderer, or replay a [`Scenario`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod interaction;
pub(crate) mod page;
pub(crate) mod runtime;
pub(crate) mod viewport;

pub use crate::foundation::core::{Affine, Fps, FrameIndex, Point, Rect, Size, Vec2};
pub use crate::foundation::error::{MotionError, MotionResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::looping::{LoopAnimator, LoopSpec};
pub use crate::animation::ops::{delay, stagger, stagger_delay, stagger_delays};
pub use crate::animation::pose::{Lerp, Pose};
pub use crate::animation::reveal::{AnimationState, RevealAnimator, RevealFrame, RevealSpec};
pub use crate::animation::tween::Tween;
pub use crate::interaction::navbar::{
    MobileMenu, NavItem, NavbarMode, NavbarState, SCROLL_THRESHOLD_PX, TRY_ZARA_URL,
};
pub use crate::page::composer::{SectionComposer, Staggered};
pub use crate::page::content;
pub use crate::page::dsl::PageBuilder;
pub use crate::page::layout::{Breakpoint, GridCell, PageLayout, Region};
pub use crate::page::model::{DecorationSpec, ElementSpec, ObserverSpec, Page, SectionId, Trigger};
pub use crate::runtime::engine::{PARALLAX_TARGET, PageEvent, PageRuntime};
pub use crate::runtime::scenario::{Scenario, TimedEvent};
pub use crate::runtime::snapshot::{DecorationFrame, ElementFrame, FrameSnapshot};
pub use crate::viewport::margin::RootMargin;
pub use crate::viewport::observer::{
    ObserveOptions, Viewport, VisibilityLatch, VisibilityObserver, intersects,
};
pub use crate::viewport::parallax::{HERO_DIVISORS, Parallax};
