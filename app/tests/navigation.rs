use civsail::content::{Bearing, Sector, Ship, ShipSection};
use civsail::state::{Popup, SectionKey, SectionSelector};

fn ship(slug: &str, name: &str) -> Ship {
    Ship {
        slug: String::from(slug),
        name: String::from(name),
        hull_number: String::from("T-AKE-1"),
        class: String::from("Lewis and Clark class"),
        kind: String::from("Dry cargo and ammunition ship"),
        image: None,
        summary: String::new(),
        specs: vec![],
        overview: String::new(),
        missions: vec![],
        life_aboard: String::new(),
        news_url: None,
        news: vec![],
    }
}

#[test]
fn compass_turns_clockwise() {
    let mut compass = SectionSelector::new(Sector::Deck);
    let mut bearings = vec![];
    for _ in Sector::ALL {
        bearings.push(compass.active().bearing());
        assert!(compass.next());
    }
    assert_eq!(
        vec![Bearing::North, Bearing::East, Bearing::South, Bearing::West],
        bearings
    );
    assert_eq!(Sector::Deck, compass.active());

    assert!(compass.previous());
    assert_eq!(Sector::Specialized, compass.active());
    assert_eq!(270, compass.active().bearing().degrees());
}

#[test]
fn selecting_the_active_sector_is_a_noop() {
    let mut compass = SectionSelector::new(Sector::Supply);
    assert!(!compass.select(Sector::Supply));
    assert_eq!(SectionSelector::new(Sector::Supply), compass);
    assert_eq!("Supply & Steward", compass.active().label());

    let mut tabs = SectionSelector::<ShipSection>::default();
    assert_eq!(ShipSection::Overview, tabs.active());
    assert!(!tabs.select(ShipSection::Overview));
    assert!(tabs.select(ShipSection::LifeAboard));
    assert!(tabs.is_active(ShipSection::LifeAboard));
}

#[test]
fn popup_shows_only_the_latest_ship() {
    let mut popup = Popup::default();
    popup.open(ship("usns-mercy", "USNS Mercy"));
    popup.close();
    assert_eq!(None, popup.visible());

    popup.open(ship("usns-supply", "USNS Supply"));
    let shown = popup.visible().map(|ship| ship.slug.as_str());
    assert_eq!(Some("usns-supply"), shown);
}

#[test]
fn ships_without_a_picture_use_the_placeholder() {
    let mut mercy = ship("usns-mercy", "USNS Mercy");
    assert_eq!(civsail::content::PLACEHOLDER_IMAGE, mercy.image_path());
    mercy.image = Some(String::from("/images/mercy.jpg"));
    assert_eq!("/images/mercy.jpg", mercy.image_path());
}

#[test]
fn ship_tabs_start_over_on_another_ship() {
    use civsail::state::ScopedSelector;

    let mut tabs = ScopedSelector::<ShipSection>::default();
    assert!(tabs.select("usns-mercy", ShipSection::Missions));
    assert_eq!(ShipSection::Missions, tabs.active("usns-mercy"));

    assert_eq!(ShipSection::Overview, tabs.active("usns-supply"));
    assert!(tabs.select("usns-supply", ShipSection::LifeAboard));
    assert_eq!(ShipSection::Overview, tabs.active("usns-mercy"));
}
