//! countrydb-cli
//! =============
//!
//! Command-line interface for the `countrydb-core` country directory.
//!
//! This crate primarily provides a binary (`countrydb`). The library target
//! only carries this overview page.
//!
//! Basic usage:
//!
//! ```text
//! countrydb --help
//! countrydb stats
//! countrydb list --region Europe --language French
//! countrydb favorite CAN
//! countrydb list --favorites
//! countrydb --rates rates.json show che
//! ```
//!
//! For programmatic access use the [`countrydb-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
