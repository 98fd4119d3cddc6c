//! countrydb — Command-line interface for countrydb-core
//!
//! Browse a country dataset page by page, narrow it by name, region or
//! language, and keep a persistent list of favorites.
//!
//! Usage examples
//! --------------
//!
//! - Overview of the dataset
//!   $ countrydb stats
//!
//! - First page, then a filtered page
//!   $ countrydb list
//!   $ countrydb list --region Europe --language French
//!   $ countrydb list -q united --page 2
//!
//! - Favorites (stored in ./countrydb-store.json unless --store is given)
//!   $ countrydb favorite CAN
//!   $ countrydb list --favorites
//!
//! - Details, with an exchange rate when a rates file is supplied
//!   $ countrydb --rates rates.json show che
//!
//! Logging goes to stderr; set `RUST_LOG=debug` for pipeline traces.
mod args;
mod render;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use countrydb_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn build_provider(args: &CliArgs) -> Box<dyn DataProvider> {
    #[cfg(feature = "http")]
    if args.remote {
        match HttpProvider::new() {
            Ok(p) => return Box::new(p),
            Err(e) => tracing::warn!(error = %e, "HTTP client unavailable; falling back to file"),
        }
    }

    let mut provider = match &args.input {
        Some(path) => FileProvider::new(path),
        None => FileProvider::sample(),
    };
    if let Some(rates) = &args.rates {
        provider = provider.with_rates(rates);
    }
    if args.no_cache {
        provider = provider.without_cache();
    }
    Box::new(provider)
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = CliArgs::parse();

    let provider = build_provider(&args);
    let store_path = args.store_path();
    // An unreadable store means no favorites; it is replaced on the next toggle.
    let store = JsonFileStore::open_or_empty(&store_path);

    let mut dir = Directory::new(store);
    dir.load(provider.as_ref());
    match dir.dataset().status() {
        LoadStatus::Failed(reason) => eprintln!("Could not load countries: {reason}"),
        _ => tracing::info!(
            countries = dir.dataset().len(),
            favorites = dir.favorite_count(),
            store = %store_path.display(),
            "directory ready"
        ),
    }

    match args.command {
        Commands::Stats => {
            let snap = dir.snapshot();
            println!("Directory statistics:");
            println!("  Countries: {}", dir.dataset().len());
            println!("  Regions: {}", snap.regions.len());
            println!("  Languages: {}", snap.languages.len());
            println!("  Favorites: {}", snap.favorite_count);
            println!("  Pages: {}", snap.total_pages);
        }

        Commands::List {
            search,
            region,
            language,
            favorites,
            page,
        } => {
            dir.set_search_term(&search);
            dir.set_region(&region);
            dir.set_language(&language);
            dir.set_favorites_only(favorites);
            dir.go_to_page(page);

            let snap = dir.snapshot();
            if let Some(empty) = snap.empty_state {
                println!("{}", empty.message());
                return Ok(());
            }
            for c in &snap.visible {
                println!("{}", render::country_row(c, dir.is_favorite(&c.code)));
            }
            println!();
            println!(
                "{} match(es), page {} of {}",
                snap.total_matches, snap.current_page, snap.total_pages
            );
            if snap.show_pagination {
                println!("{}", render::window_line(&snap));
            }
        }

        Commands::Regions => {
            for r in dir.regions() {
                println!("{r}");
            }
        }

        Commands::Languages => {
            for l in dir.languages() {
                println!("{l}");
            }
        }

        Commands::Favorite { code } => {
            let name = dir
                .country(&code)
                .map(|c| c.common_name.clone())
                .unwrap_or_else(|| code.to_uppercase());
            let now = dir.toggle_favorite(&code);
            if dir.favorites().persist_failed() {
                eprintln!("Warning: favorites could not be saved to {}", store_path.display());
            }
            if now {
                println!("Added {name} to favorites ({} total)", dir.favorite_count());
            } else {
                println!("Removed {name} from favorites ({} total)", dir.favorite_count());
            }
        }

        Commands::Favorites => {
            dir.set_favorites_only(true);
            let matches = dir.matches();
            if matches.is_empty() {
                println!("{}", EmptyState::NoFavorites.message());
            }
            for c in matches {
                println!("{}", render::country_row(c, true));
            }
        }

        Commands::Show { code } => {
            let outcome = load_detail(provider.as_ref(), &code);
            match outcome.detail {
                Some(d) => {
                    for line in render::detail_lines(&d, dir.is_favorite(&d.code)) {
                        println!("{line}");
                    }
                }
                None if outcome.failed => eprintln!("Could not load details for {code}"),
                None => eprintln!("No country found for: {code}"),
            }
        }
    }

    Ok(())
}
