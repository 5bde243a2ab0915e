use super::*;

fn names(items: &[&str]) -> NameSet {
    items.iter().copied().collect()
}

#[test]
fn merge_overwrites_scalars_with_informative_values() {
    let mut a = TitleRecord::new(10)
        .with_name("Old Name")
        .with_type(AppType::Game)
        .with_parent(3);
    let b = TitleRecord::new(10).with_name("New Name");
    a.merge_in(&b);

    assert_eq!(a.name.as_deref(), Some("New Name"));
    // Unknown type and parent 0 carry no information.
    assert_eq!(a.app_type, AppType::Game);
    assert_eq!(a.parent_id, 3);
}

#[test]
fn merge_ignores_blank_name() {
    let mut a = TitleRecord::new(10).with_name("Foo");
    a.merge_in(&TitleRecord::new(10).with_name("  "));
    assert_eq!(a.name.as_deref(), Some("Foo"));
}

#[test]
fn merge_unions_sets() {
    let mut a = TitleRecord::new(1);
    a.tags = names(&["Action", "Indie"]);
    a.language_support.interface = names(&["English"]);
    let mut b = TitleRecord::new(1);
    b.tags = names(&["indie", "Roguelike"]);
    b.language_support.interface = names(&["German"]);
    b.vr_support.headsets = names(&["Valve Index"]);

    a.merge_in(&b);
    assert_eq!(a.tags.as_slice(), ["Action", "Indie", "Roguelike"]);
    assert_eq!(a.language_support.interface.as_slice(), ["English", "German"]);
    assert_eq!(a.vr_support.headsets.as_slice(), ["Valve Index"]);
}

#[test]
fn merge_takes_max_freshness() {
    let mut a = TitleRecord::new(1);
    a.last_cache_update = 500;
    a.last_store_scrape = 100;
    let mut b = TitleRecord::new(1);
    b.last_cache_update = 400;
    b.last_store_scrape = 200;
    a.merge_in(&b);
    assert_eq!(a.last_cache_update, 500);
    assert_eq!(a.last_store_scrape, 200);
}

#[test]
fn cache_platforms_do_not_override_scraped_platforms() {
    let mut scraped = TitleRecord::new(1).with_platforms(Platforms::WINDOWS);
    scraped.last_store_scrape = 1_700_000_000;

    let from_cache = TitleRecord::new(1).with_platforms(Platforms::ALL);
    scraped.merge_in(&from_cache);
    assert_eq!(scraped.platforms(), Platforms::WINDOWS);
}

#[test]
fn platforms_fill_unknown_or_empty() {
    let mut unknown = TitleRecord::new(1);
    unknown.last_store_scrape = 1_700_000_000;
    unknown.merge_in(&TitleRecord::new(1).with_platforms(Platforms::LINUX));
    assert_eq!(unknown.platforms(), Platforms::LINUX);

    let mut empty = TitleRecord::new(1).with_platforms(Platforms::NONE);
    empty.last_store_scrape = 1_700_000_000;
    empty.merge_in(&TitleRecord::new(1).with_platforms(Platforms::MAC));
    assert_eq!(empty.platforms(), Platforms::MAC);
}

#[test]
fn explicit_none_does_not_erase_known_platforms() {
    let mut a = TitleRecord::new(1).with_platforms(Platforms::WINDOWS);
    a.merge_in(&TitleRecord::new(1).with_platforms(Platforms::NONE));
    assert_eq!(a.platforms(), Platforms::WINDOWS);
}

#[test]
fn unknown_platforms_read_as_all() {
    assert_eq!(TitleRecord::new(1).platforms(), Platforms::ALL);
}

#[test]
fn merge_order_does_not_matter_for_disjoint_fields() {
    let base = TitleRecord::new(7).with_name("Base");
    let mut b = TitleRecord::new(7).with_type(AppType::Dlc);
    b.developers = names(&["Acme"]);
    let mut c = TitleRecord::new(7).with_parent(5);
    c.release_date = Some("2020-01-01".to_string());

    let mut one_at_a_time = base.clone();
    one_at_a_time.merge_in(&b);
    one_at_a_time.merge_in(&c);

    let mut premerged = b.clone();
    premerged.merge_in(&c);
    let mut at_once = base.clone();
    at_once.merge_in(&premerged);

    assert_eq!(one_at_a_time, at_once);
}

#[test]
fn completion_times_keep_known_values() {
    let mut a = TitleRecord::new(1);
    a.completion_times = CompletionTimes {
        main: 10,
        extras: 20,
        completionist: 30,
    };
    let mut b = TitleRecord::new(1);
    b.completion_times.extras = 25;
    a.merge_in(&b);
    assert_eq!(
        a.completion_times,
        CompletionTimes {
            main: 10,
            extras: 25,
            completionist: 30
        }
    );
}

#[test]
fn clear_localized_keeps_identity() {
    let mut r = TitleRecord::new(42).with_name("Portal").with_parent(40);
    r.tags = names(&["Puzzle"]);
    r.genres = names(&["Action"]);
    r.flags = names(&["Single-player"]);
    r.release_date = Some("2007-10-10".to_string());
    r.vr_support.input = names(&["Tracked Controllers"]);
    r.language_support.subtitles = names(&["English"]);
    r.developers = names(&["Valve"]);
    r.last_store_scrape = 1_700_000_000;

    r.clear_localized();
    assert!(r.tags.is_empty());
    assert!(r.genres.is_empty());
    assert!(r.flags.is_empty());
    assert!(r.release_date.is_none());
    assert!(r.vr_support.is_empty());
    assert!(r.language_support.is_empty());
    assert_eq!(r.last_store_scrape, 1);
    assert_eq!(r.id, 42);
    assert_eq!(r.name.as_deref(), Some("Portal"));
    assert_eq!(r.parent_id, 40);
    assert_eq!(r.developers.as_slice(), ["Valve"]);
}

#[test]
fn release_year_formats() {
    let mut r = TitleRecord::new(1);
    assert_eq!(r.release_year(), 0);
    r.release_date = Some("2019-05-03".to_string());
    assert_eq!(r.release_year(), 2019);
    r.release_date = Some("3 May, 2019".to_string());
    assert_eq!(r.release_year(), 2019);
    r.release_date = Some("May 3, 2018".to_string());
    assert_eq!(r.release_year(), 2018);
    r.release_date = Some("Coming soon".to_string());
    assert_eq!(r.release_year(), 0);
}

#[test]
fn hours_round_up() {
    assert_eq!(hours_from_seconds(0), 0);
    assert_eq!(hours_from_seconds(1), 1);
    assert_eq!(hours_from_seconds(3600), 1);
    assert_eq!(hours_from_seconds(3601), 2);
    assert_eq!(hours_from_seconds(36_000), 10);
}

#[test]
fn snapshot_json_round_trip() {
    let mut r = TitleRecord::new(620)
        .with_name("Portal 2")
        .with_type(AppType::Game)
        .with_platforms(Platforms::WINDOWS | Platforms::MAC);
    r.tags = names(&["Puzzle", "Co-op"]);
    r.completion_times.main = 9;
    r.last_store_scrape = 1_700_000_000;

    let json = serde_json::to_string(&r).unwrap();
    assert!(json.contains(r#""type":"Game""#));
    let back: TitleRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, r);
}
