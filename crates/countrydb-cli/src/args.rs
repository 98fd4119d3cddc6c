use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for countrydb
#[derive(Debug, Parser)]
#[command(
    name = "countrydb",
    version,
    about = "Browse, filter and bookmark a country directory from the terminal"
)]
pub struct CliArgs {
    /// Path to the dataset (.json or .json.gz in REST Countries v3.1 shape).
    /// Defaults to the bundled sample.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// Key-value store file holding favorites (default: ./countrydb-store.json)
    #[arg(long = "store", global = true)]
    pub store: Option<PathBuf>,

    /// Exchange rates file ({"base":"USD","rates":{...}}) used by `show`
    #[arg(short = 'r', long = "rates", global = true)]
    pub rates: Option<PathBuf>,

    /// Do not read or write the binary dataset cache
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// Fetch from the public REST endpoints instead of a file
    #[cfg(feature = "http")]
    #[arg(long = "remote", global = true)]
    pub remote: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn store_path(&self) -> PathBuf {
        self.store
            .clone()
            .unwrap_or_else(|| PathBuf::from("countrydb-store.json"))
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset, facets and favorites
    Stats,

    /// List one page of countries matching the filters
    List {
        /// Case-insensitive substring of the common name
        #[arg(short = 'q', long = "search", default_value = "")]
        search: String,

        /// Exact region (see `regions`)
        #[arg(long = "region", default_value = "")]
        region: String,

        /// Exact language name (see `languages`)
        #[arg(long = "language", default_value = "")]
        language: String,

        /// Show favorites only (ignores the other filters)
        #[arg(long = "favorites")]
        favorites: bool,

        /// Page number, clamped to the available pages
        #[arg(short = 'p', long = "page", default_value_t = 1)]
        page: usize,
    },

    /// List the region filter choices
    Regions,

    /// List the language filter choices
    Languages,

    /// Toggle a country in the favorites
    Favorite {
        /// Three-letter code (e.g. CAN)
        code: String,
    },

    /// List favorite countries
    Favorites,

    /// Show details for one country
    Show {
        /// Three-letter code, case-insensitive (e.g. jpn)
        code: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_filters() {
        let args = CliArgs::parse_from([
            "countrydb", "list", "-q", "can", "--region", "Americas", "--page", "2",
        ]);
        match args.command {
            Commands::List { search, region, language, favorites, page } => {
                assert_eq!(search, "can");
                assert_eq!(region, "Americas");
                assert!(language.is_empty());
                assert!(!favorites);
                assert_eq!(page, 2);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = CliArgs::parse_from(["countrydb", "favorites", "--store", "/tmp/s.json"]);
        assert_eq!(args.store_path(), PathBuf::from("/tmp/s.json"));
    }
}
