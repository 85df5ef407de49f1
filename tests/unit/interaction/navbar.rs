use super::*;

#[test]
fn scroll_threshold_toggles_reversibly() {
    let mut nav = NavbarState::default();
    assert!(!nav.on_scroll(0.0));
    assert_eq!(nav.mode(), NavbarMode::Expanded);
    assert!(nav.on_scroll(25.0));
    assert_eq!(nav.mode(), NavbarMode::Compact);
    assert!(nav.on_scroll(5.0));
    assert_eq!(nav.mode(), NavbarMode::Expanded);
}

#[test]
fn threshold_is_strict() {
    let mut nav = NavbarState::default();
    nav.on_scroll(20.0);
    assert!(!nav.is_compact());
    nav.on_scroll(20.5);
    assert!(nav.is_compact());
    assert!(!nav.on_scroll(400.0));
}

#[test]
fn custom_threshold_is_validated() {
    assert!(NavbarState::new(-1.0).is_err());
    let mut nav = NavbarState::new(100.0).unwrap();
    nav.on_scroll(50.0);
    assert!(!nav.is_compact());
    assert_eq!(nav.threshold(), 100.0);
}

#[test]
fn menu_opens_and_closes() {
    let mut menu = MobileMenu::new();
    assert!(!menu.is_open());
    assert!(menu.open(0.0));
    assert!(menu.is_open());
    assert!(!menu.open(0.1));
    assert!(menu.close(1.0));
    assert!(!menu.is_open());
}

#[test]
fn selecting_any_item_closes_menu() {
    for item in NavItem::ALL {
        let mut menu = MobileMenu::new();
        menu.open(0.0);
        assert_eq!(menu.select(item, 1.0), item.anchor());
        assert!(!menu.is_open());
    }
}

#[test]
fn select_on_closed_menu_still_navigates() {
    let mut menu = MobileMenu::new();
    assert_eq!(menu.select(NavItem::Faq, 0.0), "#faq");
    assert!(!menu.is_open());
}

#[test]
fn panel_slides_in_and_out() {
    let mut menu = MobileMenu::new();
    assert_eq!(menu.panel_offset(0.0), 1.0);
    assert!(!menu.is_present(0.0));

    menu.open(1.0);
    assert_eq!(menu.panel_offset(1.0), 1.0);
    let mid = menu.panel_offset(1.1);
    assert!(mid > 0.0 && mid < 1.0);
    assert_eq!(menu.panel_offset(1.5), 0.0);

    menu.close(2.0);
    assert!(menu.is_present(2.1));
    assert!(!menu.is_present(2.5));
    assert_eq!(menu.panel_offset(2.5), 1.0);
}

#[test]
fn closing_mid_slide_starts_from_current_offset() {
    let mut menu = MobileMenu::new();
    menu.open(0.0);
    let at = menu.panel_offset(0.05);
    menu.close(0.05);
    assert_eq!(menu.panel_offset(0.05), at);
}

#[test]
fn nav_items_have_labels_and_anchors() {
    let labels: Vec<&str> = NavItem::ALL.iter().map(|i| i.label()).collect();
    assert_eq!(labels, vec!["Features", "Specs", "Roadmap", "FAQ"]);
    assert!(NavItem::ALL.iter().all(|i| i.anchor().starts_with('#')));
    assert!(TRY_ZARA_URL.starts_with("https://"));
}
