// crates/countrydb-core/src/lib.rs

//! # countrydb-core
//!
//! Query engine for a fixed, in-memory collection of country records.
//!
//! The pipeline reads left to right:
//!
//! ```text
//! DataProvider -> DatasetCache -> FacetIndex (region / language choices)
//!                              -> filter::apply -> pagination -> snapshot
//! FavoritesStore --------------------^
//! ```
//!
//! [`Directory`] wires the pieces together and hands out an immutable
//! [`DirectorySnapshot`] after every mutation.
//!
//! ```rust
//! use countrydb_core::prelude::*;
//!
//! let provider = StaticProvider::new(vec![
//!     Country::builder("CAN", "Canada").region("Americas").language("fra", "French").build(),
//!     Country::builder("JPN", "Japan").region("Asia").language("jpn", "Japanese").build(),
//! ]);
//!
//! let mut dir = Directory::new(MemoryStore::default());
//! dir.load(&provider);
//! dir.set_language("French");
//!
//! let snap = dir.snapshot();
//! assert_eq!(snap.visible.len(), 1);
//! assert_eq!(snap.visible[0].code, "CAN");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod dataset;
pub mod detail;
pub mod directory;
pub mod error;
pub mod facets;
pub mod favorites;
pub mod filter;
pub mod loader;
pub mod model;
pub mod pagination;
pub mod prelude;
pub mod storage;
pub mod text;
pub mod traits;
// Shared Raw Input (upstream JSON shape)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::config::DirectoryConfig;
pub use crate::dataset::DatasetCache;
pub use crate::detail::{load_detail, CountryDetail, DetailOutcome};
pub use crate::directory::{Directory, DirectorySnapshot, EmptyState};
pub use crate::error::{CountryDbError, Result};
pub use crate::facets::FacetIndex;
pub use crate::favorites::FavoritesStore;
pub use crate::filter::FilterCriteria;
pub use crate::model::{Country, CountryBuilder, Currency};
pub use crate::pagination::{PageState, PageWindow, ITEMS_PER_PAGE};
pub use crate::storage::{JsonFileStore, MemoryStore};
pub use crate::traits::{DataProvider, KeyValueStore, NameMatch};
