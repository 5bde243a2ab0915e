use super::*;
use appshelf_core::Platforms;
use appshelf_vdf::VdfWriter;

fn cache_with(apps: &[&dyn Fn(&mut VdfWriter)]) -> Vec<u8> {
    let mut w = VdfWriter::new();
    w.raw(b"\x28\x44\x56\x07");
    for app in apps {
        w.begin("appinfo").begin("common");
        app(&mut w);
        w.end().end();
    }
    w.into_bytes()
}

fn estimate(seconds: u64, imputed: bool) -> CompletionEstimate {
    CompletionEstimate { seconds, imputed }
}

#[test]
fn test_cache_duplicates_merge_into_one_record() {
    let data = cache_with(&[
        &|w| {
            w.int32("gameid", 10).string("name", "Foo").string("type", "Game");
        },
        &|w| {
            w.int32("gameid", 10).int32("parent", 5);
        },
    ]);
    let store = TitleStore::new();
    let report = store.ingest_cache_bytes(&data, 1_000);
    assert_eq!(report, CacheIngestReport { touched: 1, skipped: 0 });

    let record = store.get(10).unwrap();
    assert_eq!(record.name.as_deref(), Some("Foo"));
    assert_eq!(record.app_type, AppType::Game);
    assert_eq!(record.parent_id, 5);
    assert_eq!(record.last_cache_update, 1_000);
}

#[test]
fn test_cache_ingestion_is_idempotent() {
    let data = cache_with(&[
        &|w| {
            w.int32("gameid", 1)
                .string("name", "One")
                .string("type", "game")
                .string("oslist", "windows,linux");
        },
        &|w| {
            w.int32("gameid", 2).string("type", "dlc").int32("parent", 1);
        },
        &|w| {
            w.int32("gameid", 1).string("oslist", "windows");
        },
    ]);

    let once = TitleStore::new();
    once.ingest_cache_bytes(&data, 42);
    let twice = TitleStore::new();
    twice.ingest_cache_bytes(&data, 42);
    twice.ingest_cache_bytes(&data, 42);

    assert_eq!(once.ids(), twice.ids());
    for id in once.ids() {
        assert_eq!(once.get(id), twice.get(id));
    }
}

#[test]
fn test_cache_does_not_override_scraped_platforms() {
    let store = TitleStore::new();
    let mut scraped = TitleRecord::new(7).with_platforms(Platforms::WINDOWS);
    scraped.last_store_scrape = 1_700_000_000;
    store.add(scraped);

    let data = cache_with(&[&|w| {
        w.int32("gameid", 7).string("oslist", "windows,macos,linux");
    }]);
    store.ingest_cache_bytes(&data, 1);
    assert_eq!(store.get(7).unwrap().platforms(), Platforms::WINDOWS);
}

#[test]
fn test_ingest_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appinfo.vdf");
    let data = cache_with(&[
        &|w| {
            w.int32("gameid", 400).string("name", "Portal");
        },
        &|w| {
            w.string("name", "no id here");
        },
        &|w| {
            w.string("gameid", "620").string("name", "Portal 2");
        },
    ]);
    std::fs::write(&path, data).unwrap();

    let store = TitleStore::new();
    assert_eq!(store.ingest_from_local_cache(&path).unwrap(), 2);
    assert_eq!(store.name(620), "Portal 2");
    assert!(store.get(400).unwrap().last_cache_update > 0);
}

#[test]
fn test_missing_cache_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let store = TitleStore::new();
    store.add(TitleRecord::new(1).with_name("Kept"));

    let err = store
        .ingest_from_local_cache(&dir.path().join("appinfo.vdf"))
        .unwrap_err();
    assert!(matches!(err, StoreError::SourceUnavailable(_)));
    assert_eq!(store.len(), 1);
    assert_eq!(store.name(1), "Kept");
}

#[test]
fn test_reconcile_public_list() {
    let store = TitleStore::new();
    store.add(TitleRecord::new(1).with_name("Same").with_type(AppType::Game));
    store.add(TitleRecord::new(2).with_name("Old").with_type(AppType::Game));
    store.add(TitleRecord::new(3).with_type(AppType::Dlc));

    let entries = [
        PublicListEntry { id: 1, name: "Same".into() },
        PublicListEntry { id: 2, name: "New".into() },
        PublicListEntry { id: 3, name: "Named".into() },
        PublicListEntry { id: 4, name: "Fresh".into() },
        PublicListEntry { id: 0, name: "Invalid".into() },
    ];
    assert_eq!(store.reconcile_public_list(&entries), 1);

    assert_eq!(store.get(1).unwrap().app_type, AppType::Game);
    let renamed = store.get(2).unwrap();
    assert_eq!(renamed.name.as_deref(), Some("New"));
    assert_eq!(renamed.app_type, AppType::Unknown);
    assert_eq!(store.name(3), "Named");
    assert_eq!(store.get(3).unwrap().app_type, AppType::Unknown);
    assert_eq!(store.name(4), "Fresh");
    assert!(!store.contains(0));

    // Applying the same list again creates nothing.
    assert_eq!(store.reconcile_public_list(&entries), 0);
}

#[test]
fn test_apply_completion_times() {
    let store = TitleStore::new();
    let mut known = TitleRecord::new(10);
    known.completion_times.main = 99;
    store.add(known);

    let rows = [
        CompletionRow {
            id: 10,
            name: "Known".into(),
            main: estimate(3600 * 5 + 1, false),
            extras: estimate(3600 * 8, true),
            completionist: estimate(0, false),
        },
        CompletionRow {
            id: 11,
            name: "Unknown".into(),
            main: estimate(3600, false),
            extras: estimate(3600, false),
            completionist: estimate(3600, false),
        },
    ];

    assert_eq!(store.apply_completion_times(&rows, false), 1);
    let times = store.get(10).unwrap().completion_times;
    assert_eq!((times.main, times.extras, times.completionist), (6, 0, 0));
    assert!(!store.contains(11));
    assert!(store.last_completion_update() > 0);

    store.apply_completion_times(&rows, true);
    assert_eq!(store.get(10).unwrap().completion_times.extras, 8);
}
