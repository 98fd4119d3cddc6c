// crates/countrydb-core/src/filter.rs
use crate::favorites::FavoriteSet;
use crate::model::Country;
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};

/// The query the user currently has active.
///
/// Empty strings mean "no constraint". When `favorites_only` is set the other
/// fields are ignored entirely (see [`apply`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub search_term: String,
    pub region: String,
    pub language: String,
    pub favorites_only: bool,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: &str) -> Self {
        self.search_term = term.to_owned();
        self
    }

    pub fn region(mut self, region: &str) -> Self {
        self.region = region.to_owned();
        self
    }

    pub fn language(mut self, language: &str) -> Self {
        self.language = language.to_owned();
        self
    }

    pub fn favorites_only(mut self, on: bool) -> Self {
        self.favorites_only = on;
        self
    }

    /// `true` if no search, region or language constraint is set.
    pub fn is_unconstrained(&self) -> bool {
        self.search_term.is_empty() && self.region.is_empty() && self.language.is_empty()
    }

    /// The conjunctive test used outside favorites-only mode.
    ///
    /// - name contains `search_term`, case-insensitively;
    /// - `region` is empty or equals the record's region exactly;
    /// - `language` is empty or is one of the record's language names.
    pub fn matches(&self, country: &Country) -> bool {
        country.name_contains(&self.search_term)
            && (self.region.is_empty() || country.region == self.region)
            && (self.language.is_empty() || country.speaks(&self.language))
    }
}

/// Select the visible subset of `dataset`, preserving its order.
///
/// In favorites-only mode the result is exactly the records whose code is in
/// `favorites`, regardless of search, region or language.
pub fn apply<'a>(
    dataset: &'a [Country],
    criteria: &FilterCriteria,
    favorites: &FavoriteSet,
) -> Vec<&'a Country> {
    let out: Vec<&Country> = if criteria.favorites_only {
        dataset
            .iter()
            .filter(|c| favorites.contains(&c.code))
            .collect()
    } else {
        dataset.iter().filter(|c| criteria.matches(c)).collect()
    };
    tracing::debug!(
        candidates = dataset.len(),
        matched = out.len(),
        favorites_only = criteria.favorites_only,
        "filter applied"
    );
    out
}
