//! Advanced filtering example for countrydb-rs
//!
//! Combines search, region and language criteria, shows how each setter
//! resets the page, and prints the pagination window.

use countrydb_core::prelude::*;

fn print_matches<S: KeyValueStore>(label: &str, dir: &Directory<S>) {
    let names: Vec<&str> = dir.matches().iter().map(|c| c.common_name.as_str()).collect();
    println!("{label}: {} match(es)", names.len());
    if !names.is_empty() {
        println!("  {}", names.join(", "));
    }
}

fn main() -> Result<()> {
    println!("=== countrydb-rs Advanced Filtering Example ===\n");

    let mut dir = Directory::new(MemoryStore::new());
    dir.load(&FileProvider::sample());

    // Example 1: Search is a case-insensitive substring of the common name
    println!("--- Example 1: Search ---");
    dir.set_search_term("an");
    print_matches("\"an\"", &dir);
    println!();

    // Example 2: Criteria combine
    println!("--- Example 2: Search + region ---");
    dir.set_region("Europe");
    print_matches("\"an\" in Europe", &dir);
    println!();

    // Example 3: Language matches the display name exactly
    println!("--- Example 3: Region + language ---");
    dir.clear_filters();
    dir.set_region("Europe");
    dir.set_language("French");
    print_matches("French speakers in Europe", &dir);
    dir.set_language("french");
    print_matches("\"french\" (wrong case)", &dir);
    println!();

    // Example 4: Page resets
    println!("--- Example 4: Page resets ---");
    dir.clear_filters();
    dir.go_to_page(2);
    println!("On page {}", dir.current_page());
    dir.set_region("Asia");
    println!("After changing region: page {}", dir.current_page());
    println!();

    // Example 5: Pagination window over a larger synthetic dataset
    println!("--- Example 5: Pagination window ---");
    let many: Vec<Country> = (0..100)
        .map(|i| Country::builder(&format!("C{i:02}"), &format!("Country {i}")).build())
        .collect();
    let mut big = Directory::new(MemoryStore::new());
    big.load_countries(many);
    for page in [1, 5, 9] {
        big.go_to_page(page);
        let w = big.page_window();
        println!("page {page}: buttons {:?}, last {:?}", w.buttons, w.last_page);
    }

    Ok(())
}
