use super::*;
use appshelf_core::TitleRecord;

fn record(id: u32, build: impl FnOnce(&mut TitleRecord)) -> TitleRecord {
    let mut r = TitleRecord::new(id);
    build(&mut r);
    r
}

fn tagged(id: u32, tags: &[&str]) -> TitleRecord {
    record(id, |r| r.tags = tags.iter().copied().collect())
}

#[test]
fn test_tag_weights_interpolate() {
    assert_eq!(tag_weights(3, 3.0), [3.0, 2.0, 1.0]);
    assert_eq!(tag_weights(1, 3.0), [3.0]);
    assert_eq!(tag_weights(2, 1.0), [1.0, 1.0]);
    assert_eq!(tag_weights(2, 0.5), [1.0, 1.0]);
    assert!(tag_weights(0, 3.0).is_empty());
    assert_eq!(tag_weights(5, 2.0), [2.0, 1.75, 1.5, 1.25, 1.0]);
}

#[test]
fn test_tag_score_single_title() {
    let store = TitleStore::new();
    store.add(tagged(1, &["A", "B", "C"]));

    let options = TagScoreOptions {
        weight_factor: 3.0,
        ..Default::default()
    };
    let scores = store.aggregate_tag_score(None, &options);
    assert_eq!(
        scores,
        [("A".to_string(), 3.0), ("B".to_string(), 2.0), ("C".to_string(), 1.0)]
    );
}

#[test]
fn test_tag_score_accumulates_and_limits() {
    let store = TitleStore::new();
    store.add(tagged(1, &["Action", "Indie", "Pixel Graphics"]));
    store.add(tagged(2, &["Indie", "Action"]));
    store.add(tagged(3, &["Puzzle"]));

    let options = TagScoreOptions {
        weight_factor: 2.0,
        tags_per_game: 2,
        ..Default::default()
    };
    let scores: HashMap<String, f32> = store.aggregate_tag_score(None, &options).into_iter().collect();
    // Title 1 counts Action=2, Indie=1; title 2 Indie=2, Action=1; title 3 Puzzle=2.
    assert_eq!(scores.len(), 3);
    assert_eq!(scores["Action"], 3.0);
    assert_eq!(scores["Indie"], 3.0);
    assert_eq!(scores["Puzzle"], 2.0);
}

#[test]
fn test_tag_score_filter_min_score_and_sort() {
    let store = TitleStore::new();
    store.add(tagged(1, &["Zombies", "Co-op"]));
    store.add(tagged(2, &["Co-op"]));
    store.add(tagged(3, &["Zombies"]));

    let mut filter = FilterSet::new();
    filter.insert(1, false);
    filter.insert(2, false);
    filter.insert(3, true);

    let by_score = store.aggregate_tag_score(
        Some(&filter),
        &TagScoreOptions {
            min_score: 1.0,
            ..Default::default()
        },
    );
    assert_eq!(
        by_score,
        [("Co-op".to_string(), 2.0), ("Zombies".to_string(), 1.0)]
    );

    let by_name = store.aggregate_tag_score(
        None,
        &TagScoreOptions {
            min_score: 2.0,
            sort: TagSort::Name,
            ..Default::default()
        },
    );
    assert_eq!(by_name, [("Co-op".to_string(), 2.0), ("Zombies".to_string(), 2.0)]);
}

#[test]
fn test_tag_score_excludes_genres() {
    let store = TitleStore::new();
    store.add(record(1, |r| {
        r.tags = ["Action", "Roguelike"].into_iter().collect();
        r.genres = ["action"].into_iter().collect();
    }));

    let scores = store.aggregate_tag_score(
        None,
        &TagScoreOptions {
            exclude_genres: true,
            ..Default::default()
        },
    );
    assert_eq!(scores, [("Roguelike".to_string(), 1.0)]);
}

#[test]
fn test_count_excludes_hidden_titles() {
    let store = TitleStore::new();
    for id in 1..=3 {
        store.add(record(id, |r| r.developers = ["Acme"].into_iter().collect()));
    }
    store.add(record(4, |r| r.developers = ["Solo Dev"].into_iter().collect()));

    let mut filter = FilterSet::new();
    filter.insert(1, false);
    filter.insert(2, false);
    filter.insert(3, true);
    filter.insert(4, false);

    let counts = store.aggregate_count(Attribute::Developers, Some(&filter), 2);
    assert_eq!(counts, HashMap::from([("Acme".to_string(), 2)]));

    let unfiltered = store.aggregate_count(Attribute::Developers, None, 1);
    assert_eq!(unfiltered["Acme"], 3);
    assert_eq!(unfiltered["Solo Dev"], 1);
}

#[test]
fn test_count_ignores_titles_outside_filter() {
    let store = TitleStore::new();
    store.add(record(1, |r| r.publishers = ["Big Pub"].into_iter().collect()));
    store.add(record(2, |r| r.publishers = ["Big Pub"].into_iter().collect()));

    let filter: FilterSet = [1, 99].into_iter().collect();
    let counts = store.aggregate_count(Attribute::Publishers, Some(&filter), 0);
    assert_eq!(counts, HashMap::from([("Big Pub".to_string(), 1)]));
}

#[test]
fn test_union_is_case_insensitive_and_sorted() {
    let store = TitleStore::new();
    store.add(record(1, |r| r.flags = ["Single-player", "Steam Achievements"].into_iter().collect()));
    store.add(record(2, |r| r.flags = ["single-player", "Co-op"].into_iter().collect()));

    let flags = store.all_flags();
    assert_eq!(flags.as_slice(), ["Co-op", "Single-player", "Steam Achievements"]);
    assert!(store.all_genres().is_empty());
}

#[test]
fn test_language_and_vr_unions() {
    let store = TitleStore::new();
    store.add(record(1, |r| {
        r.language_support.interface = ["English", "French"].into_iter().collect();
        r.vr_support.headsets = ["Valve Index"].into_iter().collect();
    }));
    store.add(record(2, |r| {
        r.language_support.interface = ["english"].into_iter().collect();
        r.language_support.full_audio = ["German"].into_iter().collect();
        r.vr_support.play_area = ["Room-Scale"].into_iter().collect();
    }));

    let languages = store.all_languages();
    assert_eq!(languages.interface.as_slice(), ["English", "French"]);
    assert_eq!(languages.full_audio.as_slice(), ["German"]);
    assert!(languages.subtitles.is_empty());

    let vr = store.all_vr_support();
    assert_eq!(vr.headsets.as_slice(), ["Valve Index"]);
    assert_eq!(vr.play_area.as_slice(), ["Room-Scale"]);
}
