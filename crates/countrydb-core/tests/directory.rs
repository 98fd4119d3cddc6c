// crates/countrydb-core/tests/directory.rs
use countrydb_core::prelude::*;

fn three() -> Vec<Country> {
    vec![
        Country::builder("USA", "United States")
            .population(331_000_000)
            .region("Americas")
            .language("eng", "English")
            .build(),
        Country::builder("CAN", "Canada")
            .population(38_000_000)
            .region("Americas")
            .language("eng", "English")
            .language("fra", "French")
            .build(),
        Country::builder("JPN", "Japan")
            .population(126_000_000)
            .region("Asia")
            .language("jpn", "Japanese")
            .build(),
    ]
}

fn session(countries: Vec<Country>) -> Directory<MemoryStore> {
    let mut dir = Directory::new(MemoryStore::new());
    assert!(dir.load(&StaticProvider::new(countries)));
    dir
}

fn visible_codes(dir: &Directory<MemoryStore>) -> Vec<String> {
    dir.snapshot().visible.into_iter().map(|c| c.code).collect()
}

#[test]
fn search_for_canada() {
    let mut dir = session(three());
    dir.set_search_term("Canada");
    assert_eq!(visible_codes(&dir), ["CAN"]);
}

#[test]
fn region_asia() {
    let mut dir = session(three());
    dir.set_region("Asia");
    assert_eq!(visible_codes(&dir), ["JPN"]);
}

#[test]
fn language_french() {
    let mut dir = session(three());
    dir.set_language("French");
    assert_eq!(visible_codes(&dir), ["CAN"]);
}

#[test]
fn toggling_usa_persists() {
    let mut dir = session(three());
    assert!(dir.toggle_favorite("USA"));
    let stored = dir.favorites().store().get(FAVORITES_KEY).unwrap();
    assert_eq!(stored.as_deref(), Some(r#"["USA"]"#));

    assert!(!dir.toggle_favorite("USA"));
    let stored = dir.favorites().store().get(FAVORITES_KEY).unwrap();
    assert_eq!(stored.as_deref(), Some("[]"));
}

#[test]
fn favorites_only_overrides_everything_else() {
    let mut store = MemoryStore::new();
    store.set(FAVORITES_KEY, r#"["CAN"]"#).unwrap();
    let mut dir = Directory::new(store);
    dir.load(&StaticProvider::new(three()));

    dir.set_search_term("Japan");
    dir.set_region("Asia");
    dir.set_language("Japanese");
    dir.set_favorites_only(true);
    assert_eq!(visible_codes(&dir), ["CAN"]);
}

#[test]
fn twenty_synthetic_countries_paginate() {
    let countries = (0..20)
        .map(|i| Country::builder(&format!("X{i:02}"), &format!("Country {i}")).build())
        .collect();
    let mut dir = session(countries);

    let names = |d: &Directory<MemoryStore>| -> Vec<String> {
        d.snapshot().visible.into_iter().map(|c| c.common_name).collect()
    };

    let page1 = names(&dir);
    assert_eq!(page1.len(), 12);
    assert_eq!(page1.first().map(String::as_str), Some("Country 0"));
    assert_eq!(page1.last().map(String::as_str), Some("Country 11"));
    assert_eq!(dir.total_pages(), 2);

    dir.next_page();
    let page2 = names(&dir);
    assert_eq!(page2.len(), 8);
    assert_eq!(page2.first().map(String::as_str), Some("Country 12"));
    assert_eq!(page2.last().map(String::as_str), Some("Country 19"));

    // Next is disabled on the last page.
    dir.next_page();
    assert_eq!(dir.current_page(), 2);
    assert!(!dir.snapshot().has_next);
}

#[test]
fn provider_failure_is_neutral() {
    struct Down;
    impl DataProvider for Down {
        fn fetch_all(&self) -> Result<Vec<Country>> {
            Err(CountryDbError::Http("connection refused".into()))
        }
        fn fetch_country(&self, _: &str) -> Result<Option<Country>> {
            Err(CountryDbError::Http("connection refused".into()))
        }
        fn fetch_exchange_rate(&self, _: &str) -> Result<Option<f64>> {
            Ok(None)
        }
    }

    let mut dir = Directory::new(MemoryStore::new());
    dir.load(&Down);
    let snap = dir.snapshot();
    assert!(snap.load_failed);
    assert!(snap.visible.is_empty());
    assert!(snap.regions.is_empty());
    assert_eq!(snap.total_pages, 1);
    assert_eq!(snap.window.buttons, vec![1]);
    assert_eq!(snap.empty_state, Some(EmptyState::NoCountries));
}

#[test]
fn sample_dataset_end_to_end() {
    let provider = FileProvider::sample().without_cache();
    let mut dir = Directory::new(MemoryStore::new());
    assert!(dir.load(&provider));

    let snap = dir.snapshot();
    assert!(!snap.load_failed);
    assert_eq!(snap.total_matches, 17);
    assert_eq!(snap.total_pages, 2);
    assert!(snap.show_pagination);
    assert_eq!(
        snap.regions,
        ["Americas", "Asia", "Europe", "Africa", "Oceania", "Antarctic"]
    );
    assert!(snap.languages.windows(2).all(|w| w[0] < w[1]));
    assert!(snap.languages.iter().any(|l| l == "Swiss German"));

    dir.set_region("Europe");
    dir.set_language("French");
    let codes: Vec<String> = dir.snapshot().visible.into_iter().map(|c| c.code).collect();
    assert_eq!(codes, ["FRA", "CHE"]);

    // Antarctica has no languages; it never matches a language filter.
    dir.clear_filters();
    dir.set_search_term("ant");
    let codes: Vec<String> = dir.snapshot().visible.into_iter().map(|c| c.code).collect();
    assert_eq!(codes, ["ATA"]);
    dir.set_language("English");
    assert_eq!(dir.snapshot().empty_state, Some(EmptyState::NoMatches));
}

#[test]
fn sample_detail_with_rates() {
    let provider = FileProvider::sample()
        .without_cache()
        .with_rates(FileProvider::default_data_dir().join("rates.sample.json"));

    let out = load_detail(&provider, "che");
    let detail = out.detail.expect("Switzerland is in the sample");
    assert_eq!(detail.region, "Europe (Western Europe)");
    assert_eq!(detail.currency.as_ref().map(|c| c.code.as_str()), Some("CHF"));
    assert_eq!(detail.exchange_rate, Some(0.88));

    let out = load_detail(&provider, "ATA");
    let detail = out.detail.expect("Antarctica is in the sample");
    assert_eq!(detail.capitals, "N/A");
    assert!(detail.currency.is_none());
    assert!(detail.exchange_rate.is_none());
}

#[test]
fn favorites_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    {
        let mut session = Directory::new(JsonFileStore::open(&path).unwrap());
        session.load(&StaticProvider::new(three()));
        session.toggle_favorite("JPN");
        session.toggle_favorite("USA");
    }

    let mut session = Directory::new(JsonFileStore::open(&path).unwrap());
    session.load(&StaticProvider::new(three()));
    session.set_favorites_only(true);
    let snap = session.snapshot();
    assert_eq!(snap.favorite_count, 2);
    let codes: Vec<String> = snap.visible.into_iter().map(|c| c.code).collect();
    assert_eq!(codes, ["USA", "JPN"]);
}

#[test]
fn window_tracks_navigation() {
    let countries = (0..100)
        .map(|i| Country::builder(&format!("N{i:02}"), &format!("Nation {i}")).build())
        .collect();
    let mut dir = session(countries);
    assert_eq!(dir.total_pages(), 9);

    let w = dir.page_window();
    assert_eq!(w.buttons, vec![1, 2, 3, 4, 5]);
    assert_eq!(w.last_page, Some(9));

    dir.go_to_page(5);
    assert_eq!(dir.page_window().buttons, vec![3, 4, 5, 6, 7]);

    dir.go_to_page(7);
    let w = dir.page_window();
    assert_eq!(w.buttons, vec![5, 6, 7, 8, 9]);
    assert_eq!(w.last_page, None);

    dir.set_search_term("Nation 9");
    assert_eq!(dir.current_page(), 1);
    // "Nation 9" and "Nation 90".."Nation 99"
    assert_eq!(dir.snapshot().total_matches, 11);
    assert_eq!(dir.page_window().buttons, vec![1]);
}

#[test]
fn corrupt_store_file_means_no_favorites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "not json").unwrap();

    let mut session = Directory::new(JsonFileStore::open_or_empty(&path));
    session.load(&StaticProvider::new(three()));
    assert_eq!(session.favorite_count(), 0);
    assert!(!session.snapshot().load_failed);

    // the first toggle rewrites the file in a readable shape
    session.toggle_favorite("CAN");
    assert!(!session.favorites().persist_failed());
    let reopened = Directory::new(JsonFileStore::open(&path).unwrap());
    assert!(reopened.is_favorite("CAN"));
}

#[test]
fn detail_uses_first_listed_currency() {
    let provider = StaticProvider::from_json(
        r#"[{ "cca3": "ZWE", "name": { "common": "Zimbabwe" },
              "currencies": { "ZWL": { "name": "Zimbabwean dollar", "symbol": "$" },
                              "BWP": { "name": "Botswana pula", "symbol": "P" } } }]"#,
    )
    .unwrap()
    .with_rate("ZWL", 322.0)
    .with_rate("BWP", 13.5);

    let detail = load_detail(&provider, "zwe").detail.unwrap();
    assert_eq!(detail.currency.as_ref().map(|c| c.code.as_str()), Some("ZWL"));
    assert_eq!(detail.exchange_rate, Some(322.0));
}
