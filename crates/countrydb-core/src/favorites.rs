// crates/countrydb-core/src/favorites.rs
use crate::traits::KeyValueStore;
use std::collections::BTreeSet;

/// Storage key for the persisted favorites array.
pub const FAVORITES_KEY: &str = "countryFavorites";

/// Membership set of favorite country codes.
pub type FavoriteSet = BTreeSet<String>;

/// Favorite codes, hydrated from and written through to a [`KeyValueStore`].
///
/// The persisted value is a JSON array of uppercase codes, e.g. `["CAN","USA"]`.
/// Every mutation rewrites the whole array immediately. Storage failures never
/// propagate: an unreadable value hydrates as "no favorites", a failed write
/// keeps the in-memory change and raises [`FavoritesStore::persist_failed`].
#[derive(Debug)]
pub struct FavoritesStore<S: KeyValueStore> {
    store: S,
    key: String,
    codes: FavoriteSet,
    persist_failed: bool,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Hydrate from `store` under the default key.
    pub fn hydrate(store: S) -> Self {
        Self::hydrate_with_key(store, FAVORITES_KEY)
    }

    pub fn hydrate_with_key(store: S, key: &str) -> Self {
        let codes = read_codes(&store, key);
        tracing::debug!(key, count = codes.len(), "favorites hydrated");
        Self {
            store,
            key: key.to_owned(),
            codes,
            persist_failed: false,
        }
    }

    /// Flip membership of `code`. Returns the new membership.
    pub fn toggle(&mut self, code: &str) -> bool {
        let code = normalize(code);
        let now_favorite = if self.codes.remove(&code) {
            false
        } else {
            self.codes.insert(code);
            true
        };
        self.persist();
        now_favorite
    }

    pub fn is_favorite(&self, code: &str) -> bool {
        self.codes.contains(&normalize(code))
    }

    pub fn all(&self) -> &FavoriteSet {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Drop every favorite and remove the persisted key.
    pub fn clear(&mut self) {
        self.codes.clear();
        self.persist_failed = match self.store.remove(&self.key) {
            Ok(()) => false,
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "failed to clear persisted favorites");
                true
            }
        };
    }

    /// `true` if the most recent write-through failed.
    pub fn persist_failed(&self) -> bool {
        self.persist_failed
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) {
        let result = match serde_json::to_string(&self.codes) {
            Ok(json) => self.store.set(&self.key, &json),
            Err(e) => Err(e.into()),
        };
        self.persist_failed = match result {
            Ok(()) => false,
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "failed to persist favorites");
                true
            }
        };
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

fn read_codes<S: KeyValueStore>(store: &S, key: &str) -> FavoriteSet {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return FavoriteSet::new(),
        Err(e) => {
            tracing::warn!(error = %e, key, "favorites unreadable; starting empty");
            return FavoriteSet::new();
        }
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(codes) => codes
            .iter()
            .map(|c| normalize(c))
            .filter(|c| !c.is_empty())
            .collect(),
        Err(e) => {
            tracing::warn!(error = %e, key, "favorites unparsable; starting empty");
            FavoriteSet::new()
        }
    }
}
