use super::*;

fn with_genres(id: u32, parent: u32, genres: &[&str]) -> TitleRecord {
    let mut record = TitleRecord::new(id).with_parent(parent);
    record.genres = genres.iter().copied().collect();
    record
}

#[test]
fn test_direct_value_wins() {
    let store = TitleStore::new();
    store.add(with_genres(1, 0, &["Strategy"]));
    store.add(with_genres(2, 1, &["Action"]));
    let genres = store.resolve_attribute(2, Attribute::Genres, DEFAULT_FALLBACK_DEPTH);
    assert_eq!(genres.as_slice(), ["Action"]);
}

#[test]
fn test_falls_back_to_parent() {
    let store = TitleStore::new();
    let mut base = TitleRecord::new(1);
    base.developers = ["Acme"].into_iter().collect();
    store.add(base);
    store.add(TitleRecord::new(2).with_parent(1));
    store.add(TitleRecord::new(3).with_parent(2));

    let devs = store.resolve_attribute(3, Attribute::Developers, DEFAULT_FALLBACK_DEPTH);
    assert_eq!(devs.as_slice(), ["Acme"]);
}

#[test]
fn test_depth_limits_fallback() {
    let store = TitleStore::new();
    store.add(with_genres(1, 0, &["RPG"]));
    store.add(with_genres(2, 1, &[]));
    store.add(with_genres(3, 2, &[]));
    store.add(with_genres(4, 3, &[]));
    store.add(with_genres(5, 4, &[]));

    assert!(store.resolve_attribute(2, Attribute::Genres, 0).is_empty());
    assert_eq!(store.resolve_attribute(2, Attribute::Genres, 1).as_slice(), ["RPG"]);
    assert_eq!(store.resolve_attribute(4, Attribute::Genres, 3).as_slice(), ["RPG"]);
    assert!(store.resolve_attribute(5, Attribute::Genres, 3).is_empty());
}

#[test]
fn test_cycle_terminates_empty() {
    let store = TitleStore::new();
    store.add(with_genres(1, 2, &[]));
    store.add(with_genres(2, 1, &[]));
    store.add(with_genres(3, 3, &[]));

    assert!(store.resolve_attribute(1, Attribute::Genres, DEFAULT_FALLBACK_DEPTH).is_empty());
    assert!(store.resolve_attribute(3, Attribute::Tags, 1_000_000).is_empty());
    assert!(!store.supports_vr(1, DEFAULT_FALLBACK_DEPTH));
    assert!(store.resolve_genres(2, 50, true).is_empty());
}

#[test]
fn test_unknown_id_and_missing_parent() {
    let store = TitleStore::new();
    store.add(with_genres(2, 77, &[]));
    assert!(store.resolve_attribute(1, Attribute::Genres, 3).is_empty());
    assert!(store.resolve_attribute(2, Attribute::Genres, 3).is_empty());
}

#[test]
fn test_genres_from_tags() {
    let store = TitleStore::new();
    store.add(with_genres(1, 0, &["Action", "Indie"]));
    store.add(with_genres(2, 0, &["Strategy"]));
    let mut tagged = TitleRecord::new(3).with_parent(2);
    tagged.tags = ["Roguelike", "indie", "Action"].into_iter().collect();
    store.add(tagged);

    let from_tags = store.resolve_genres(3, DEFAULT_FALLBACK_DEPTH, true);
    assert_eq!(from_tags.as_slice(), ["indie", "Action"]);

    // Without the tag fallback the parent's genres are used.
    let from_parent = store.resolve_genres(3, DEFAULT_FALLBACK_DEPTH, false);
    assert_eq!(from_parent.as_slice(), ["Strategy"]);
}

#[test]
fn test_genres_tags_without_genre_match_fall_back_to_parent() {
    let store = TitleStore::new();
    store.add(with_genres(1, 0, &["Simulation"]));
    let mut child = TitleRecord::new(2).with_parent(1);
    child.tags = ["Cozy"].into_iter().collect();
    store.add(child);

    assert_eq!(store.resolve_genres(2, 3, true).as_slice(), ["Simulation"]);
}

#[test]
fn test_vr_support_falls_back_to_parent() {
    let store = TitleStore::new();
    let mut base = TitleRecord::new(1);
    base.vr_support.input = ["Tracked Controllers"].into_iter().collect();
    store.add(base);
    store.add(TitleRecord::new(2).with_parent(1));
    store.add(TitleRecord::new(3));

    assert!(store.supports_vr(1, 0));
    assert!(store.supports_vr(2, DEFAULT_FALLBACK_DEPTH));
    assert!(!store.supports_vr(2, 0));
    assert!(!store.supports_vr(3, DEFAULT_FALLBACK_DEPTH));
    assert!(!store.supports_vr(99, DEFAULT_FALLBACK_DEPTH));
}
