// crates/countrydb-core/src/traits.rs
use crate::error::Result;
use crate::model::Country;
use crate::text::contains_folded;

/// Name-based matching helpers for types that expose a canonical display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`] and get case-insensitive helpers for free.
///
/// # Examples
/// ```rust
/// use countrydb_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Japan").is_named("JAPAN"));
/// assert!(Place("United States").name_contains("states"));
/// assert!(Place("Japan").name_contains(""));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive name equality.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        self.name_str().to_lowercase() == q.to_lowercase()
    }

    /// Case-insensitive substring match. An empty query always matches.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        contains_folded(self.name_str(), q)
    }
}

impl NameMatch for Country {
    fn name_str(&self) -> &str {
        &self.common_name
    }
}

/// Source of country records (the external collaborator).
///
/// Implementations own transport, retries and caching. The engine calls
/// [`DataProvider::fetch_all`] once per session.
pub trait DataProvider {
    /// The full, ordered dataset.
    fn fetch_all(&self) -> Result<Vec<Country>>;

    /// One record by its three-letter code; `Ok(None)` if unknown.
    fn fetch_country(&self, code: &str) -> Result<Option<Country>>;

    /// Units of `currency` per one USD; `Ok(None)` if the rate is unknown.
    fn fetch_exchange_rate(&self, currency: &str) -> Result<Option<f64>>;
}

/// Minimal string key-value storage (browser `localStorage`, a file, memory).
///
/// Values are raw strings; encoding is the caller's business.
pub trait KeyValueStore {
    /// Read a value by key. `Ok(None)` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value under key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
