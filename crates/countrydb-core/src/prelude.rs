// crates/countrydb-core/src/prelude.rs
//! countrydb prelude: bring common types and traits into scope for demos.

pub use crate::config::DirectoryConfig;
pub use crate::dataset::{DatasetCache, LoadStatus};
pub use crate::detail::{load_detail, CountryDetail, DetailOutcome};
pub use crate::directory::{Directory, DirectorySnapshot, EmptyState};
pub use crate::error::{CountryDbError, Result};
pub use crate::facets::FacetIndex;
pub use crate::favorites::{FavoriteSet, FavoritesStore, FAVORITES_KEY};
pub use crate::filter::FilterCriteria;
#[cfg(feature = "http")]
pub use crate::loader::HttpProvider;
pub use crate::loader::{FileProvider, StaticProvider};
pub use crate::model::{Country, Currency};
pub use crate::pagination::{PageState, PageWindow, ITEMS_PER_PAGE};
pub use crate::storage::{JsonFileStore, MemoryStore};
pub use crate::traits::{DataProvider, KeyValueStore, NameMatch};
