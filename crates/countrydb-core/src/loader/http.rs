// crates/countrydb-core/src/loader/http.rs

// ---------------------------------------------------------------------------
// FILE GUARD: This entire file is skipped if 'http' feature is missing.
// ---------------------------------------------------------------------------
#![cfg(feature = "http")]

use crate::error::{CountryDbError, Result};
use crate::model::{build_countries, Country};
use crate::raw::{CountriesRaw, RatesRaw};
use crate::traits::DataProvider;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

pub const COUNTRIES_BASE_URL: &str = "https://restcountries.com/v3.1";
pub const RATES_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";

/// Blocking provider against the public REST Countries and exchange-rate
/// endpoints. No retries.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: Client,
    base_url: String,
    rates_url: String,
}

impl HttpProvider {
    pub fn new() -> Result<Self> {
        Self::with_urls(COUNTRIES_BASE_URL, RATES_URL)
    }

    pub fn with_urls(base_url: &str, rates_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(http_err)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            rates_url: rates_url.to_owned(),
        })
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        tracing::debug!(url, "GET");
        let resp = self.client.get(url).send().map_err(http_err)?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = resp.error_for_status().map_err(http_err)?;
        resp.json::<T>().map(Some).map_err(http_err)
    }
}

impl DataProvider for HttpProvider {
    fn fetch_all(&self) -> Result<Vec<Country>> {
        let url = format!("{}/all", self.base_url);
        let raw: CountriesRaw = self
            .get_json(&url)?
            .ok_or_else(|| CountryDbError::NotFound(url.clone()))?;
        Ok(build_countries(raw))
    }

    fn fetch_country(&self, code: &str) -> Result<Option<Country>> {
        let url = format!("{}/alpha/{}", self.base_url, code.trim());
        let raw: Option<CountriesRaw> = self.get_json(&url)?;
        Ok(raw.and_then(|r| build_countries(r).into_iter().next()))
    }

    fn fetch_exchange_rate(&self, currency: &str) -> Result<Option<f64>> {
        let rates: Option<RatesRaw> = self.get_json(&self.rates_url)?;
        Ok(rates.and_then(|r| r.rates.get(currency).copied()))
    }
}

fn http_err(e: reqwest::Error) -> CountryDbError {
    CountryDbError::Http(e.to_string())
}
