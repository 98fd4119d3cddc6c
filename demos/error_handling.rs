//! Error handling example for countrydb-rs
//!
//! Collaborator failures never escape the directory: they become an empty
//! dataset, a flag on the snapshot, or a missing exchange rate.

use countrydb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== countrydb-rs Error Handling Example ===\n");

    // Example 1: Missing dataset file
    println!("--- Example 1: Loading a missing file ---");
    let mut dir = Directory::new(MemoryStore::new());
    dir.load(&FileProvider::new("does/not/exist.json").without_cache());
    match dir.dataset().status() {
        LoadStatus::Failed(reason) => println!("✗ Load failed: {reason}"),
        other => println!("Unexpected status: {other:?}"),
    }
    let snap = dir.snapshot();
    println!(
        "  Snapshot still renders: {} visible, {} page(s), load_failed = {}",
        snap.visible.len(),
        snap.total_pages,
        snap.load_failed
    );
    println!();

    // Example 2: Malformed payload
    println!("--- Example 2: Malformed payload ---");
    match StaticProvider::from_json("{ not json") {
        Ok(_) => println!("  Parsed?"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 3: Unknown codes
    println!("--- Example 3: Unknown country codes ---");
    let provider = FileProvider::sample();
    for code in ["XXX", "", "ABCD"] {
        let outcome = load_detail(&provider, code);
        match (outcome.detail, outcome.failed) {
            (Some(d), _) => println!("  Found: {}", d.common_name),
            (None, true) => println!("  Lookup failed: {code:?}"),
            (None, false) => println!("  Not found: {code:?}"),
        }
    }
    println!();

    // Example 4: Missing exchange rate keeps the detail
    println!("--- Example 4: Detail without a rate ---");
    if let Some(d) = load_detail(&provider, "CHE").detail {
        println!("  {} ({})", d.common_name, d.code);
        println!("  Capital: {}", d.capitals);
        println!("  Area: {}", d.area);
        match d.rate_line() {
            Some(line) => println!("  Rate: {line}"),
            None => println!("  Rate: not available"),
        }
    }
    println!();

    // Example 5: Empty states
    println!("--- Example 5: Empty states ---");
    let mut dir = Directory::new(MemoryStore::new());
    dir.load(&provider);
    dir.set_favorites_only(true);
    if let Some(empty) = dir.snapshot().empty_state {
        println!("  {}", empty.message());
    }
    dir.set_favorites_only(false);
    dir.set_search_term("Atlantis");
    if let Some(empty) = dir.snapshot().empty_state {
        println!("  {}", empty.message());
    }

    Ok(())
}
