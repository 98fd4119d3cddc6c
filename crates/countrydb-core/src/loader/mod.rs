// crates/countrydb-core/src/loader/mod.rs

//! # Data Providers
//!
//! Adapters that produce the dataset the engine consumes. They handle the
//! physical layer (files, decompression, HTTP, the binary cache) and hand back
//! converted [`Country`] records.

use crate::error::{CountryDbError, Result};
use crate::model::{build_countries, Country};
use crate::raw::{CountriesRaw, RatesRaw};
use crate::traits::DataProvider;
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};

pub mod cache;
pub mod common_io;
#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::HttpProvider;

/// Parse a REST Countries style JSON array into the model.
pub fn parse_countries<R: Read>(reader: R) -> Result<Vec<Country>> {
    let raw: CountriesRaw = serde_json::from_reader(reader)?;
    Ok(build_countries(raw))
}

pub fn parse_countries_str(json: &str) -> Result<Vec<Country>> {
    let raw: CountriesRaw = serde_json::from_str(json)?;
    Ok(build_countries(raw))
}

// -----------------------------------------------------------------------------
// STATIC PROVIDER
// -----------------------------------------------------------------------------

/// Serves records already in memory. Used by tests, demos and the WASM
/// bindings (where the host page does the fetching).
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    countries: Vec<Country>,
    rates: BTreeMap<String, f64>,
}

impl StaticProvider {
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries,
            rates: BTreeMap::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(parse_countries_str(json)?))
    }

    /// Add a USD rate for `currency`.
    pub fn with_rate(mut self, currency: &str, rate: f64) -> Self {
        self.rates.insert(currency.to_owned(), rate);
        self
    }

    pub fn with_rates(mut self, rates: BTreeMap<String, f64>) -> Self {
        self.rates.extend(rates);
        self
    }
}

impl DataProvider for StaticProvider {
    fn fetch_all(&self) -> Result<Vec<Country>> {
        Ok(self.countries.clone())
    }

    fn fetch_country(&self, code: &str) -> Result<Option<Country>> {
        let code = code.trim();
        Ok(self
            .countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .cloned())
    }

    fn fetch_exchange_rate(&self, currency: &str) -> Result<Option<f64>> {
        Ok(self.rates.get(currency).copied())
    }
}

// -----------------------------------------------------------------------------
// FILE PROVIDER
// -----------------------------------------------------------------------------

/// Reads a `.json` / `.json.gz` dataset from disk, plus an optional rates file
/// in the `{"rates": {"EUR": 0.92}}` shape.
///
/// The converted dataset is cached as a binary snapshot next to the source
/// (see [`cache`]) and reused while the source is not newer than the cache.
#[derive(Debug)]
pub struct FileProvider {
    dataset: PathBuf,
    rates: Option<PathBuf>,
    use_cache: bool,
    loaded: OnceCell<Vec<Country>>,
}

impl FileProvider {
    pub fn new(dataset: impl AsRef<Path>) -> Self {
        Self {
            dataset: dataset.as_ref().to_path_buf(),
            rates: None,
            use_cache: true,
            loaded: OnceCell::new(),
        }
    }

    pub fn with_rates(mut self, rates: impl AsRef<Path>) -> Self {
        self.rates = Some(rates.as_ref().to_path_buf());
        self
    }

    /// Skip reading and writing the binary snapshot.
    pub fn without_cache(mut self) -> Self {
        self.use_cache = false;
        self
    }

    pub fn dataset_path(&self) -> &Path {
        &self.dataset
    }

    /// Directory holding the bundled sample dataset.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "countries.sample.json"
    }

    /// Provider over the bundled sample dataset.
    pub fn sample() -> Self {
        Self::new(Self::default_data_dir().join(Self::default_dataset_filename()))
    }

    fn countries(&self) -> Result<&[Country]> {
        self.loaded
            .get_or_try_init(|| self.read_dataset())
            .map(Vec::as_slice)
    }

    fn read_dataset(&self) -> Result<Vec<Country>> {
        let cache_path = common_io::get_cache_path(&self.dataset, cache::CACHE_SUFFIX);

        // 1) Try binary cache first
        if self.use_cache && cache::is_cache_fresh(&self.dataset, &cache_path) {
            match cache::read_cache(&cache_path) {
                Ok(countries) => {
                    tracing::debug!(path = %cache_path.display(), "dataset served from cache");
                    return Ok(countries);
                }
                Err(e) => tracing::warn!(error = %e, "ignoring unreadable dataset cache"),
            }
        }

        // 2) Parse the source
        let reader = common_io::open_stream(&self.dataset)?;
        let countries = parse_countries(reader)?;

        // 3) Best-effort: write cache
        if self.use_cache {
            if let Err(e) = cache::write_cache(&cache_path, &countries) {
                tracing::warn!(error = %e, path = %cache_path.display(), "could not write dataset cache");
            }
        }
        Ok(countries)
    }
}

impl DataProvider for FileProvider {
    fn fetch_all(&self) -> Result<Vec<Country>> {
        self.countries().map(<[Country]>::to_vec)
    }

    fn fetch_country(&self, code: &str) -> Result<Option<Country>> {
        let code = code.trim();
        Ok(self
            .countries()?
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .cloned())
    }

    fn fetch_exchange_rate(&self, currency: &str) -> Result<Option<f64>> {
        let Some(path) = &self.rates else {
            return Ok(None);
        };
        let reader = common_io::open_stream(path)?;
        let rates: RatesRaw = serde_json::from_reader(reader)?;
        if let Some(base) = rates.base.as_deref().filter(|b| !b.eq_ignore_ascii_case("USD")) {
            return Err(CountryDbError::InvalidData(format!(
                "rates file is based on {base}, expected USD"
            )));
        }
        Ok(rates.rates.get(currency).copied())
    }
}
