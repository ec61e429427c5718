#![cfg(feature = "ssr")]

use civsail::editorials::{EditorialStore, Error};
use std::path::PathBuf;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn store(is_running_in_prod: bool) -> EditorialStore {
    EditorialStore::new(PathBuf::from("tests/data/editorials"), is_running_in_prod)
}

fn slugs(store: &EditorialStore) -> Vec<String> {
    store
        .index()
        .unwrap()
        .into_iter()
        .map(|front_matter| front_matter.slug)
        .collect()
}

#[test]
fn get_by_slug() {
    setup();

    let editorial = store(true).get_by_slug("1-toc").unwrap();
    assert_eq!("0001-toc", editorial.front_matter.slug);
    assert_eq!(5, editorial.toc.len());
    assert_eq!([1u16, 0, 0, 0, 0, 0], editorial.toc[0].path);
    assert_eq!([1u16, 1, 0, 0, 0, 0], editorial.toc[1].path);
    assert_eq!([1u16, 1, 0, 1, 0, 0], editorial.toc[2].path);
    assert_eq!([1u16, 1, 1, 0, 0, 0], editorial.toc[3].path);
    assert_eq!([1u16, 2, 0, 0, 0, 0], editorial.toc[4].path);
    assert_eq!("1.2", editorial.toc[4].section_number());
    assert_eq!(
        Some("Maria Santos"),
        editorial.author.as_ref().map(|author| author.name.as_str())
    );
}

#[test]
fn directories_hold_their_editorial() {
    setup();

    let editorial = store(true).get_by_slug("0002-engine-watch").unwrap();
    assert_eq!("Engine watch", editorial.front_matter.metadata.title);
    assert!(editorial.html_body.contains("Write everything down."));
}

#[test]
fn index_is_newest_first_and_hides_drafts_in_prod() {
    setup();

    assert_eq!(
        vec!["0003-first-day", "0002-engine-watch", "0001-toc"],
        slugs(&store(true))
    );
    assert_eq!(
        vec!["0003-first-day", "0002-engine-watch", "0001-toc", "0004-unfinished"],
        slugs(&store(false))
    );
}

#[test]
fn drafts_are_only_served_outside_prod() {
    setup();

    assert!(matches!(
        store(true).get_by_slug("0004-unfinished"),
        Err(Error::NotFound { kind: "editorial", .. })
    ));
    let draft = store(false).get_by_slug("4-unfinished").unwrap();
    assert!(draft.front_matter.is_draft());
    assert_eq!(None, draft.author);
}

#[test]
fn unknown_slugs_are_not_found() {
    setup();

    for slug in ["toc", "0009-toc", "notes", ""] {
        assert!(
            matches!(store(false).get_by_slug(slug), Err(Error::NotFound { .. })),
            "{:?} should not resolve",
            slug
        );
    }
}

#[test]
fn series_are_ordered_by_part() {
    setup();

    let series = store(true).series("below-decks").unwrap();
    assert_eq!("Below decks", series.title);
    let parts: Vec<(&str, u16)> = series
        .entries
        .iter()
        .map(|front_matter| {
            let part = front_matter.metadata.series.as_ref().map_or(0, |s| s.part);
            (front_matter.slug.as_str(), part)
        })
        .collect();
    assert_eq!(vec![("0003-first-day", 1), ("0002-engine-watch", 2)], parts);

    assert!(matches!(
        store(true).series("above-decks"),
        Err(Error::NotFound { kind: "series", .. })
    ));
}

#[test]
fn author_pages_list_their_editorials() {
    setup();

    let page = store(true).author("dwayne-hollis").unwrap();
    assert_eq!("First Assistant Engineer", page.author.role);
    let slugs: Vec<&str> = page
        .editorials
        .iter()
        .map(|front_matter| front_matter.slug.as_str())
        .collect();
    assert_eq!(vec!["0003-first-day", "0002-engine-watch"], slugs);

    assert_eq!(2, store(true).authors().unwrap().len());
    assert!(matches!(
        store(true).author("ghost-writer"),
        Err(Error::NotFound { kind: "author", .. })
    ));
}
