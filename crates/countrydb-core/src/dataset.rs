// crates/countrydb-core/src/dataset.rs
use crate::model::Country;
use crate::traits::DataProvider;
use once_cell::unsync::OnceCell;

/// Outcome of the one-shot dataset load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Pending,
    Loaded,
    Failed(String),
}

/// Holds the dataset produced by the [`DataProvider`], filled exactly once.
///
/// A failed fetch leaves an empty dataset and the `Failed` status. Later load
/// attempts are ignored; retrying is the provider's job.
#[derive(Debug, Default)]
pub struct DatasetCache {
    countries: OnceCell<Vec<Country>>,
    failure: Option<String>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the cache from a provider. Returns `true` if this call filled it.
    pub fn load_from<P: DataProvider + ?Sized>(&mut self, provider: &P) -> bool {
        if self.countries.get().is_some() {
            tracing::warn!("dataset already loaded; ignoring second load");
            return false;
        }
        match provider.fetch_all() {
            Ok(countries) => {
                tracing::info!(count = countries.len(), "dataset loaded");
                self.accept(countries)
            }
            Err(e) => {
                tracing::warn!(error = %e, "dataset load failed; continuing with an empty dataset");
                self.failure = Some(e.to_string());
                self.accept(Vec::new())
            }
        }
    }

    /// Accept an already-fetched sequence. Only the first call has an effect.
    pub fn accept(&mut self, countries: Vec<Country>) -> bool {
        self.countries.set(countries).is_ok()
    }

    /// All records in provider order; empty before load or after failure.
    pub fn get_all(&self) -> &[Country] {
        self.countries.get().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn status(&self) -> LoadStatus {
        match (&self.failure, self.countries.get()) {
            (Some(msg), _) => LoadStatus::Failed(msg.clone()),
            (None, Some(_)) => LoadStatus::Loaded,
            (None, None) => LoadStatus::Pending,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.countries.get().is_some()
    }

    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }

    pub fn len(&self) -> usize {
        self.get_all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.get_all().is_empty()
    }

    /// Find a record by code, case-insensitive (e.g. "can", "CAN").
    pub fn find_by_code(&self, code: &str) -> Option<&Country> {
        let code = code.trim();
        self.get_all()
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CountryDbError, Result};
    use crate::loader::StaticProvider;

    struct Failing;

    impl DataProvider for Failing {
        fn fetch_all(&self) -> Result<Vec<Country>> {
            Err(CountryDbError::Http("503 Service Unavailable".into()))
        }
        fn fetch_country(&self, _code: &str) -> Result<Option<Country>> {
            Ok(None)
        }
        fn fetch_exchange_rate(&self, _currency: &str) -> Result<Option<f64>> {
            Ok(None)
        }
    }

    fn provider() -> StaticProvider {
        StaticProvider::new(vec![
            Country::builder("USA", "United States").build(),
            Country::builder("CAN", "Canada").build(),
        ])
    }

    #[test]
    fn starts_pending_and_empty() {
        let cache = DatasetCache::new();
        assert_eq!(cache.status(), LoadStatus::Pending);
        assert!(cache.get_all().is_empty());
    }

    #[test]
    fn loads_once() {
        let mut cache = DatasetCache::new();
        assert!(cache.load_from(&provider()));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.status(), LoadStatus::Loaded);

        let other = StaticProvider::new(vec![Country::builder("JPN", "Japan").build()]);
        assert!(!cache.load_from(&other));
        assert_eq!(cache.get_all()[0].code, "USA");
    }

    #[test]
    fn failure_degrades_to_empty() {
        let mut cache = DatasetCache::new();
        cache.load_from(&Failing);
        assert!(cache.is_failed());
        assert!(cache.is_empty());
        assert!(matches!(cache.status(), LoadStatus::Failed(msg) if msg.contains("503")));
    }

    #[test]
    fn find_by_code_ignores_case() {
        let mut cache = DatasetCache::new();
        cache.load_from(&provider());
        assert_eq!(cache.find_by_code("can").map(Country::name), Some("Canada"));
        assert!(cache.find_by_code("XXX").is_none());
    }
}
