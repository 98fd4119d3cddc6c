//! Basic usage example for countrydb-rs
//!
//! This example demonstrates how to:
//! - Load the bundled sample dataset
//! - Read the region and language choices
//! - Page through the directory
//! - Toggle favorites

use countrydb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== countrydb-rs Basic Usage Example ===\n");

    // Load the dataset
    println!("Loading sample dataset...");
    let provider = FileProvider::sample();
    let mut dir = Directory::new(MemoryStore::new());
    if !dir.load(&provider) || dir.dataset().is_failed() {
        eprintln!("✗ Could not load {}", provider.dataset_path().display());
        return Ok(());
    }
    println!("✓ Loaded {} countries\n", dir.dataset().len());

    // Example 1: Facet choices
    println!("--- Example 1: Filter choices ---");
    println!("Regions: {}", dir.regions().join(", "));
    let languages = dir.languages();
    let preview: Vec<&str> = languages.iter().take(5).map(String::as_str).collect();
    println!("Languages ({}): {} ...", languages.len(), preview.join(", "));
    println!();

    // Example 2: First page
    println!("--- Example 2: First page ---");
    let snap = dir.snapshot();
    for c in &snap.visible {
        println!("  {} {:<28} {}", c.code, c.common_name, c.region);
    }
    println!("Page {} of {}\n", snap.current_page, snap.total_pages);

    // Example 3: Next page
    println!("--- Example 3: Next page ---");
    dir.next_page();
    for c in dir.visible_slice() {
        println!("  {} {}", c.code, c.common_name);
    }
    println!();

    // Example 4: Favorites
    println!("--- Example 4: Favorites ---");
    dir.toggle_favorite("JPN");
    dir.toggle_favorite("nzl");
    dir.set_favorites_only(true);
    for c in dir.matches() {
        println!("  ★ {}", c.common_name);
    }
    println!("Favorites: {}", dir.favorite_count());

    Ok(())
}
