// crates/countrydb-core/src/directory.rs

//! The browsing session: dataset, facets, favorites, criteria and page state
//! behind one mutation surface.
//!
//! Every mutator leaves the session consistent; [`Directory::snapshot`]
//! recomputes the filter and page outputs from scratch and hands them out as
//! an immutable value.

use crate::config::DirectoryConfig;
use crate::dataset::DatasetCache;
use crate::facets::FacetIndex;
use crate::favorites::FavoritesStore;
use crate::filter::{self, FilterCriteria};
use crate::model::Country;
use crate::pagination::{total_pages, PageState, PageWindow};
use crate::traits::{DataProvider, KeyValueStore};
use serde::Serialize;

/// Why the visible list is empty, when it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmptyState {
    /// Favorites-only mode with nothing to show ("No favorites yet").
    NoFavorites,
    /// The ordinary filters matched nothing ("No countries match your search").
    NoMatches,
    /// Nothing to show with no search, region or language set, e.g. after a
    /// failed load ("No countries found").
    NoCountries,
}

impl EmptyState {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoFavorites => "No favorites yet",
            Self::NoMatches => "No countries match your search",
            Self::NoCountries => "No countries found",
        }
    }
}

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectorySnapshot {
    pub visible: Vec<Country>,
    pub total_matches: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub window: PageWindow,
    pub has_prev: bool,
    pub has_next: bool,
    /// Pagination controls are only shown when matches exceed one page.
    pub show_pagination: bool,
    pub criteria: FilterCriteria,
    pub regions: Vec<String>,
    pub languages: Vec<String>,
    pub favorite_count: usize,
    pub empty_state: Option<EmptyState>,
    pub load_failed: bool,
    pub persist_failed: bool,
}

/// A country directory session over a favorites store `S`.
#[derive(Debug)]
pub struct Directory<S: KeyValueStore> {
    config: DirectoryConfig,
    dataset: DatasetCache,
    facets: FacetIndex,
    favorites: FavoritesStore<S>,
    criteria: FilterCriteria,
    page: PageState,
}

impl<S: KeyValueStore> Directory<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, DirectoryConfig::default())
    }

    /// Build a session; favorites are hydrated from `store` right away.
    pub fn with_config(store: S, config: DirectoryConfig) -> Self {
        let favorites = FavoritesStore::hydrate_with_key(store, &config.favorites_key);
        let page = PageState::new(config.page_size());
        Self {
            config,
            dataset: DatasetCache::new(),
            facets: FacetIndex::default(),
            favorites,
            criteria: FilterCriteria::default(),
            page,
        }
    }

    // ------------------------------------------------------------------
    // Dataset
    // ------------------------------------------------------------------

    /// One-shot load from `provider`. Facets are rebuilt when the dataset
    /// actually changes; failure leaves an empty dataset and sets
    /// `load_failed` on snapshots.
    pub fn load<P: DataProvider + ?Sized>(&mut self, provider: &P) -> bool {
        let filled = self.dataset.load_from(provider);
        if filled {
            self.facets = FacetIndex::build(self.dataset.get_all());
        }
        filled
    }

    /// Like [`Directory::load`] for records fetched elsewhere.
    pub fn load_countries(&mut self, countries: Vec<Country>) -> bool {
        let filled = self.dataset.accept(countries);
        if filled {
            tracing::info!(count = self.dataset.len(), "dataset accepted");
            self.facets = FacetIndex::build(self.dataset.get_all());
        }
        filled
    }

    pub fn dataset(&self) -> &DatasetCache {
        &self.dataset
    }

    pub fn country(&self, code: &str) -> Option<&Country> {
        self.dataset.find_by_code(code)
    }

    pub fn regions(&self) -> &[String] {
        self.facets.regions()
    }

    pub fn languages(&self) -> &[String] {
        self.facets.languages()
    }

    // ------------------------------------------------------------------
    // Criteria (any change sends the user back to page 1)
    // ------------------------------------------------------------------

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_search_term(&mut self, text: &str) {
        if self.criteria.search_term != text {
            self.criteria.search_term = text.to_owned();
            self.page.reset();
        }
    }

    /// Empty string clears the region filter.
    pub fn set_region(&mut self, region: &str) {
        if self.criteria.region != region {
            self.criteria.region = region.to_owned();
            self.page.reset();
        }
    }

    /// Empty string clears the language filter.
    pub fn set_language(&mut self, language: &str) {
        if self.criteria.language != language {
            self.criteria.language = language.to_owned();
            self.page.reset();
        }
    }

    pub fn set_favorites_only(&mut self, on: bool) {
        if self.criteria.favorites_only != on {
            self.criteria.favorites_only = on;
            self.page.reset();
        }
    }

    /// Replace the whole criteria at once.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if self.criteria != criteria {
            self.criteria = criteria;
            self.page.reset();
        }
    }

    /// Clear search, region and language. Favorites-only is left alone.
    pub fn clear_filters(&mut self) {
        let cleared = FilterCriteria {
            favorites_only: self.criteria.favorites_only,
            ..FilterCriteria::default()
        };
        self.set_criteria(cleared);
    }

    // ------------------------------------------------------------------
    // Favorites (mutations never move the page)
    // ------------------------------------------------------------------

    /// Flip a favorite; returns the new membership.
    pub fn toggle_favorite(&mut self, code: &str) -> bool {
        self.favorites.toggle(code)
    }

    pub fn is_favorite(&self, code: &str) -> bool {
        self.favorites.is_favorite(code)
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    pub fn favorites(&self) -> &FavoritesStore<S> {
        &self.favorites
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    pub fn current_page(&self) -> usize {
        self.page.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.page.items_per_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.matches().len(), self.page.items_per_page)
    }

    /// Jump to page `n`, clamped to `[1, total_pages]`.
    pub fn go_to_page(&mut self, n: usize) {
        let total = self.total_pages();
        self.page.go_to(n, total);
    }

    pub fn next_page(&mut self) {
        let total = self.total_pages();
        self.page.next(total);
    }

    pub fn prev_page(&mut self) {
        let total = self.total_pages();
        self.page.prev(total);
    }

    pub fn page_window(&self) -> PageWindow {
        self.page.window(self.total_pages())
    }

    /// The records on the current page.
    pub fn visible_slice(&self) -> Vec<&Country> {
        let mut matches = self.matches();
        let range = self.page.range(matches.len());
        matches.truncate(range.end);
        matches.drain(..range.start);
        matches
    }

    // ------------------------------------------------------------------
    // Pipeline
    // ------------------------------------------------------------------

    /// Every record passing the current criteria, in dataset order.
    pub fn matches(&self) -> Vec<&Country> {
        filter::apply(self.dataset.get_all(), &self.criteria, self.favorites.all())
    }

    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    pub fn snapshot(&self) -> DirectorySnapshot {
        let matches = self.matches();
        let total_matches = matches.len();
        let total = total_pages(total_matches, self.page.items_per_page);
        let range = self.page.range(total_matches);
        let visible: Vec<Country> = matches[range].iter().map(|c| (*c).clone()).collect();

        let empty_state = match (total_matches, self.criteria.favorites_only) {
            (0, true) => Some(EmptyState::NoFavorites),
            (0, false) if self.criteria.is_unconstrained() => Some(EmptyState::NoCountries),
            (0, false) => Some(EmptyState::NoMatches),
            _ => None,
        };

        DirectorySnapshot {
            visible,
            total_matches,
            current_page: self.page.current_page,
            total_pages: total,
            window: self.page.window(total),
            has_prev: self.page.has_prev(),
            has_next: self.page.has_next(total),
            show_pagination: total_matches > self.page.items_per_page,
            criteria: self.criteria.clone(),
            regions: self.facets.regions.clone(),
            languages: self.facets.languages.clone(),
            favorite_count: self.favorites.len(),
            empty_state,
            load_failed: self.dataset.is_failed(),
            persist_failed: self.favorites.persist_failed(),
        }
    }
}
