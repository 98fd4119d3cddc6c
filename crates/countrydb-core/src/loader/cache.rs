// crates/countrydb-core/src/loader/cache.rs

//! Binary snapshot of a converted dataset, kept next to its JSON source.

use crate::error::{CountryDbError, Result};
use crate::model::Country;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "comp.bin";

/// Upper bound for a cache file; anything larger is treated as corrupt.
const CACHE_LIMIT: u64 = 64 * 1024 * 1024;

/// The cache is fresh if it exists and the source is not newer.
pub fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let cache_time = match fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        Err(_) => false,
    }
}

pub fn read_cache(path: &Path) -> Result<Vec<Country>> {
    use bincode::Options;

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    let mut stream: Box<dyn Read> = Box::new(GzDecoder::new(reader));
    #[cfg(not(feature = "compact"))]
    let mut stream: Box<dyn Read> = Box::new(reader);

    let mut data = Vec::new();
    stream.read_to_end(&mut data)?;

    // with_fixint_encoding keeps the layout identical to bincode::serialize_into
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .allow_trailing_bytes()
        .with_limit(CACHE_LIMIT)
        .deserialize(&data)
        .map_err(CountryDbError::Bincode)
}

pub fn write_cache(path: &Path, countries: &[Country]) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    #[cfg(feature = "compact")]
    let mut encoder: Box<dyn Write> = Box::new(GzEncoder::new(writer, Compression::default()));
    #[cfg(not(feature = "compact"))]
    let mut encoder: Box<dyn Write> = Box::new(writer);

    bincode::serialize_into(&mut encoder, countries)?;
    encoder.flush()?;
    Ok(())
}
