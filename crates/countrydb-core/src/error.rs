// crates/countrydb-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by collaborators (data providers and key-value stores).
///
/// The query engine itself never fails: it turns these into empty results
/// plus a flag on the snapshot.
#[derive(Debug, Error)]
pub enum CountryDbError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("HTTP error: {0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, CountryDbError>;
