// crates/countrydb-core/src/detail.rs
use crate::model::Country;
use crate::text::group_thousands;
use crate::traits::DataProvider;
use serde::Serialize;

/// Placeholder for absent display values.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyDetail {
    pub code: String,
    pub name: String,
    /// The symbol, or `"N/A"`.
    pub symbol: String,
}

/// Display-ready projection of one [`Country`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryDetail {
    pub code: String,
    pub common_name: String,
    pub official_name: String,
    pub flag_image_url: String,
    /// Capitals joined with `", "`, or `"N/A"`.
    pub capitals: String,
    /// `"Europe (Western Europe)"`, or just the region.
    pub region: String,
    /// `"331,000,000"`
    pub population: String,
    /// `"9,984,670 km²"`, or `"N/A"`.
    pub area: String,
    pub languages: Vec<String>,
    pub currency: Option<CurrencyDetail>,
    /// Units of the primary currency per one USD.
    pub exchange_rate: Option<f64>,
    pub borders: Vec<String>,
}

impl CountryDetail {
    pub fn new(country: &Country, exchange_rate: Option<f64>) -> Self {
        let capitals = if country.capitals.is_empty() {
            NOT_AVAILABLE.to_owned()
        } else {
            country.capitals.join(", ")
        };

        let region = match country.subregion() {
            Some(sub) => format!("{} ({sub})", country.region),
            None => country.region.clone(),
        };

        let area = match country.area {
            Some(a) => format!("{} km²", group_thousands(a.round() as u64)),
            None => NOT_AVAILABLE.to_owned(),
        };

        let currency = country.primary_currency().map(|(code, c)| CurrencyDetail {
            code: code.to_owned(),
            name: c.name.clone(),
            symbol: c.symbol.clone().unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
        });

        Self {
            code: country.code.clone(),
            common_name: country.common_name.clone(),
            official_name: country.official_name.clone(),
            flag_image_url: country.flag_image_url.clone(),
            capitals,
            region,
            population: group_thousands(country.population),
            area,
            languages: country.language_names().map(str::to_owned).collect(),
            // a rate is meaningless without a currency to quote it in
            exchange_rate: currency.as_ref().and(exchange_rate),
            currency,
            borders: country.borders.clone(),
        }
    }

    /// `"1 USD = 1.3600 CAD"`, when both currency and rate are known.
    pub fn rate_line(&self) -> Option<String> {
        let currency = self.currency.as_ref()?;
        let rate = self.exchange_rate?;
        Some(format!("1 USD = {rate:.4} {}", currency.code))
    }
}

/// Result of a detail lookup. `failed` is set when the provider errored;
/// an unknown code is `detail: None, failed: false`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailOutcome {
    pub detail: Option<CountryDetail>,
    pub failed: bool,
}

/// Fetch one country and, when it has a currency, its USD exchange rate.
///
/// A failed rate fetch keeps the detail and leaves the rate empty.
pub fn load_detail<P: DataProvider + ?Sized>(provider: &P, code: &str) -> DetailOutcome {
    let country = match provider.fetch_country(code) {
        Ok(Some(c)) => c,
        Ok(None) => {
            tracing::info!(code, "no such country");
            return DetailOutcome {
                detail: None,
                failed: false,
            };
        }
        Err(e) => {
            tracing::warn!(error = %e, code, "detail fetch failed");
            return DetailOutcome {
                detail: None,
                failed: true,
            };
        }
    };

    let rate = match country.primary_currency() {
        Some((currency, _)) => provider.fetch_exchange_rate(currency).unwrap_or_else(|e| {
            tracing::warn!(error = %e, currency, "exchange rate fetch failed");
            None
        }),
        None => None,
    };

    DetailOutcome {
        detail: Some(CountryDetail::new(&country, rate)),
        failed: false,
    }
}
