use wasm_bindgen_test::*;

use countrydb_wasm::CountryDirectory;

#[wasm_bindgen_test]
fn sample_loads_and_paginates() {
    let mut dir = CountryDirectory::new();
    assert!(dir.load_sample());
    assert!(!dir.load_failed());
    assert_eq!(dir.total_matches(), 17);
    assert_eq!(dir.total_pages(), 2);

    dir.next_page();
    assert_eq!(dir.current_page(), 2);
    dir.set_region("Europe");
    assert_eq!(dir.current_page(), 1);
    assert_eq!(dir.total_matches(), 5);
}

#[wasm_bindgen_test]
fn malformed_body_counts_as_failure() {
    let mut dir = CountryDirectory::new();
    dir.load_json("<html>502 Bad Gateway</html>");
    assert!(dir.load_failed());
    assert_eq!(dir.total_matches(), 0);
    assert_eq!(dir.total_pages(), 1);
}

#[wasm_bindgen_test]
fn favorites_only_view() {
    let mut dir = CountryDirectory::new();
    dir.load_sample();
    // start from a clean slate in case storage carried something over
    for code in ["JPN", "CAN"] {
        if dir.is_favorite(code) {
            dir.toggle_favorite(code);
        }
    }
    let base = dir.favorite_count();

    assert!(dir.toggle_favorite("jpn"));
    assert!(dir.toggle_favorite("CAN"));
    assert_eq!(dir.favorite_count(), base + 2);

    dir.set_favorites_only(true);
    dir.set_search_term("Germany");
    assert!(dir.total_matches() >= 2);
    assert!(!dir.toggle_favorite("JPN"));
}
