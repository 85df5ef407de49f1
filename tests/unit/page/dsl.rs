use super::*;
use crate::foundation::core::Rect;

fn rect() -> Rect {
    Rect::new(0.0, 0.0, 100.0, 100.0)
}

#[test]
fn builder_rejects_duplicate_keys() {
    let spec = RevealSpec::new(Pose::faded(), 0.5);
    let err = PageBuilder::new()
        .on_mount("a", SectionId::Hero, spec)
        .unwrap()
        .on_mount("a", SectionId::Hero, spec)
        .err()
        .unwrap();
    assert!(err.to_string().contains("duplicate element key 'a'"));

    let err = PageBuilder::new()
        .observer("o", SectionId::Demo, rect(), ObserveOptions::default())
        .unwrap()
        .observer("o", SectionId::Demo, rect(), ObserveOptions::default())
        .err()
        .unwrap();
    assert!(err.to_string().contains("duplicate observer key 'o'"));
}

#[test]
fn build_validates_observer_references() {
    let spec = RevealSpec::new(Pose::faded(), 0.5);
    let res = PageBuilder::new()
        .in_view("a", SectionId::Demo, "missing", spec)
        .unwrap()
        .build();
    assert!(res.is_err());
}

#[test]
fn cards_get_their_own_observers() {
    let composer = SectionComposer::new(RevealSpec::new(Pose::faded_up(30.0), 0.6), 0.5).unwrap();
    let page = PageBuilder::new()
        .cards(
            "card",
            SectionId::Features,
            &[1usize, 2],
            &composer,
            ObserveOptions::default(),
            |p| Rect::new(0.0, *p as f64 * 100.0, 10.0, *p as f64 * 100.0 + 10.0).into(),
        )
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(page.observers.len(), 2);
    assert_eq!(
        page.observers[1].region,
        Region::Fixed {
            rect: Rect::new(0.0, 200.0, 10.0, 210.0)
        }
    );
    let card2 = page.element("card.2").unwrap();
    assert_eq!(card2.reveal.delay, 1.0);
    assert_eq!(
        card2.trigger,
        Trigger::InView {
            observer: "card.2".to_string()
        }
    );
}

#[test]
fn group_shares_one_observer() {
    let composer = SectionComposer::new(RevealSpec::new(Pose::faded_x(-10.0), 0.3), 0.25)
        .unwrap()
        .with_base(0.5)
        .unwrap();
    let page = PageBuilder::new()
        .observer("list", SectionId::Specs, rect(), ObserveOptions::default())
        .unwrap()
        .group("item", SectionId::Specs, "list", &[0usize, 1, 2], &composer)
        .unwrap()
        .build()
        .unwrap();

    let delays: Vec<f64> = page.elements.iter().map(|e| e.reveal.delay).collect();
    assert_eq!(delays, vec![0.5, 0.75, 1.0]);
}

#[test]
fn defaults_follow_the_site() {
    let page = PageBuilder::new().build().unwrap();
    assert_eq!(page.navbar_threshold, 20.0);
    assert!(page.parallax_divisors.is_empty());
}
