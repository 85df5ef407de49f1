//! The Zara AI landing page: every animated element and what drives it.

use crate::{
    animation::{
        ease::Ease,
        looping::LoopSpec,
        pose::Pose,
        reveal::RevealSpec,
    },
    foundation::core::{Rect, Vec2},
    foundation::error::MotionResult,
    page::{
        composer::SectionComposer,
        content::{FEATURES, SPECS},
        dsl::PageBuilder,
        layout::{Breakpoint, GridCell, Region},
        model::{Page, SectionId},
    },
    viewport::{margin::RootMargin, observer::ObserveOptions, parallax::HERO_DIVISORS},
};

const PAGE_WIDTH: f64 = 1280.0;
const SPECS_WIDTH: f64 = 1152.0;
const GUTTER: f64 = 24.0;
const GRID_GAP: f64 = 32.0;
const SECTION_PAD: f64 = 80.0;
const HEADER_HEIGHT: f64 = 150.0;
const HEADER_GAP: f64 = 64.0;
const FEATURE_CARD_HEIGHT: f64 = 260.0;
const SPEC_CARD_HEIGHT: f64 = 440.0;
const BULLETS_PER_CARD: usize = 5;

const MD: f64 = 768.0;
const LG: f64 = 1024.0;
const FEATURE_COLUMNS: [Breakpoint; 2] = [Breakpoint::new(MD, 2), Breakpoint::new(LG, 3)];
const SPEC_COLUMNS: [Breakpoint; 1] = [Breakpoint::new(MD, 3)];

/// Section header block (heading plus intro paragraph).
fn header_rect() -> Rect {
    Rect::new(0.0, SECTION_PAD, PAGE_WIDTH, SECTION_PAD + HEADER_HEIGHT)
}

/// Cell for the 1-based `position` of a card grid under a section header.
fn grid_cell(
    position: usize,
    cell_height: f64,
    max_width: f64,
    breakpoints: &[Breakpoint],
) -> Region {
    Region::Grid(GridCell {
        index: position.saturating_sub(1),
        top: SECTION_PAD + HEADER_HEIGHT + HEADER_GAP,
        height: cell_height,
        gap: GRID_GAP,
        gutter: GUTTER,
        max_width,
        breakpoints: breakpoints.to_vec(),
    })
}

fn section_margin() -> ObserveOptions {
    ObserveOptions::once(RootMargin::vertical(-100.0))
}

impl Page {
    /// Builds the landing page.
    pub fn zara() -> MotionResult<Page> {
        let b = PageBuilder::new().parallax(HERO_DIVISORS);
        let b = chrome(b)?;
        let b = hero(b)?;
        let b = features(b)?;
        let b = demo(b)?;
        let b = specs(b)?;
        let b = cta(b)?;
        b.build()
    }
}

fn chrome(b: PageBuilder) -> MotionResult<PageBuilder> {
    b.on_mount(
        "page",
        SectionId::Hero,
        RevealSpec::new(Pose::faded_up(20.0), 0.8),
    )?
    .on_mount(
        "navbar",
        SectionId::Navbar,
        RevealSpec::new(Pose::dropped(-100.0), 0.6).with_ease(Ease::EXPO_OUT),
    )
}

fn hero(b: PageBuilder) -> MotionResult<PageBuilder> {
    let s = SectionId::Hero;
    let dot = LoopSpec::new(
        vec![
            Pose::REST,
            Pose::REST.with_offset(Vec2::new(0.0, 15.0)),
            Pose::REST,
        ],
        1.5,
    );

    b.on_mount("hero.content", s, RevealSpec::new(Pose::faded_up(20.0), 0.8))?
        .on_mount(
            "hero.badge",
            s,
            RevealSpec::new(Pose::popped(0.8), 0.5).with_delay(0.3),
        )?
        .on_mount(
            "hero.title",
            s,
            RevealSpec::new(Pose::faded(), 0.8).with_delay(0.4),
        )?
        .on_mount(
            "hero.subtitle",
            s,
            RevealSpec::new(Pose::faded(), 0.8).with_delay(0.6),
        )?
        .on_mount(
            "hero.actions",
            s,
            RevealSpec::new(Pose::faded_up(20.0), 0.6).with_delay(0.8),
        )?
        .on_mount(
            "hero.scroll_indicator",
            s,
            RevealSpec::new(Pose::faded(), 1.0).with_delay(1.5),
        )?
        .decoration("hero.scroll_dot", s, dot)
}

fn features(b: PageBuilder) -> MotionResult<PageBuilder> {
    let s = SectionId::Features;
    let cards = SectionComposer::new(RevealSpec::new(Pose::faded_up(30.0), 0.6), 0.1)?;

    let b = b.observer("features.header", s, header_rect(), section_margin())?;
    header(b, "features", s)?.cards(
        "features.card",
        s,
        &FEATURES,
        &cards,
        section_margin(),
        |card| grid_cell(card.position, FEATURE_CARD_HEIGHT, PAGE_WIDTH, &FEATURE_COLUMNS),
    )
}

/// Header block rising in, with its title and intro paragraph fading on top.
fn header(b: PageBuilder, prefix: &str, s: SectionId) -> MotionResult<PageBuilder> {
    let obs = format!("{prefix}.header");
    b.in_view(
        obs.clone(),
        s,
        obs.as_str(),
        RevealSpec::new(Pose::faded_up(20.0), 0.6),
    )?
    .in_view(
        format!("{prefix}.title"),
        s,
        obs.as_str(),
        RevealSpec::new(Pose::faded(), 0.6),
    )?
    .in_view(
        format!("{prefix}.intro"),
        s,
        obs.as_str(),
        RevealSpec::new(Pose::faded(), 0.6).with_delay(0.2),
    )
}

fn demo(b: PageBuilder) -> MotionResult<PageBuilder> {
    let s = SectionId::Demo;
    let obs = "demo.section";
    let rise = RevealSpec::new(Pose::faded_up(20.0), 0.6);

    b.observer(obs, s, Region::Section, section_margin())?
        .in_view("demo.heading", s, obs, rise)?
        .in_view("demo.intro", s, obs, rise.with_delay(0.2))?
        .in_view(
            "demo.chat",
            s,
            obs,
            RevealSpec::new(Pose::faded_x(-30.0), 0.6).with_delay(0.4),
        )?
        .in_view(
            "demo.highlights",
            s,
            obs,
            RevealSpec::new(Pose::faded_x(30.0), 0.6).with_delay(0.4),
        )
}

fn specs(b: PageBuilder) -> MotionResult<PageBuilder> {
    let s = SectionId::Specs;
    let cards = SectionComposer::new(RevealSpec::new(Pose::faded_up(30.0), 0.7), 0.2)?;
    let card_margin = ObserveOptions::once(RootMargin::vertical(-50.0));
    let bullet_indices: Vec<usize> = (0..BULLETS_PER_CARD).collect();

    let b = b.observer("specs.header", s, header_rect(), section_margin())?;
    let mut b = header(b, "specs", s)?.cards("specs.card", s, &SPECS, &cards, card_margin, |card| {
        grid_cell(card.position, SPEC_CARD_HEIGHT, SPECS_WIDTH, &SPEC_COLUMNS)
    })?;

    for card in &SPECS {
        let card_key = format!("specs.card.{}", card.position);
        let bullets = SectionComposer::new(RevealSpec::new(Pose::faded_x(-10.0), 0.3), 0.1)?
            .with_base(card.position as f64 * 0.2)?;
        b = b.group(
            &format!("{card_key}.bullet"),
            s,
            &card_key,
            &bullet_indices[..card.bullets.len().min(BULLETS_PER_CARD)],
            &bullets,
        )?;
    }
    Ok(b)
}

fn cta(b: PageBuilder) -> MotionResult<PageBuilder> {
    let s = SectionId::Cta;
    let obs = "cta.section";
    let rise = RevealSpec::new(Pose::faded_up(20.0), 0.6);
    let ring = |scale: f64, opacity: f64, peak_scale: f64, peak_opacity: f64, period: f64| {
        let rest = Pose::REST.with_scale(scale).with_opacity(opacity);
        let peak = Pose::REST.with_scale(peak_scale).with_opacity(peak_opacity);
        LoopSpec::new(vec![rest, peak, rest], period)
    };

    b.observer(obs, s, Region::Section, section_margin())?
    .in_view("cta.panel", s, obs, RevealSpec::new(Pose::faded_up(40.0), 0.8))?
    .in_view("cta.heading", s, obs, rise.with_delay(0.2))?
    .in_view("cta.body", s, obs, rise.with_delay(0.4))?
    .in_view("cta.actions", s, obs, rise.with_delay(0.6))?
    .decoration("cta.ring.1", s, ring(1.0, 0.3, 1.05, 0.2, 5.0))?
    .decoration("cta.ring.2", s, ring(1.0, 0.2, 1.1, 0.1, 7.0).with_delay(0.5))?
    .decoration("cta.ring.3", s, ring(1.0, 0.1, 1.15, 0.05, 9.0).with_delay(1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/page/zara.rs"]
mod tests;
