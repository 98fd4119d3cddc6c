// crates/countrydb-core/src/model.rs
use crate::raw::{CountriesRaw, CountryRaw};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A currency as carried on a [`Country`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: Option<String>,
}

/// A country entry in the directory. Immutable once loaded.
///
/// Collections are never absent: a record without languages carries an empty
/// vector, a record without a region carries an empty string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Three-letter code, uppercase, unique within a dataset.
    pub code: String,
    pub common_name: String,
    pub official_name: String,
    pub capitals: Vec<String>,
    pub population: u64,
    pub region: String,
    pub subregion: Option<String>,

    /// (language code, display name), in payload order.
    pub languages: Vec<(String, String)>,
    /// (currency code, currency), in payload order; the first is primary.
    pub currencies: Vec<(String, Currency)>,

    pub flag_image_url: String,
    pub area: Option<f64>,
    /// Weak references to other records; may name codes not in the dataset.
    pub borders: Vec<String>,
}

impl Country {
    pub fn builder(code: &str, common_name: &str) -> CountryBuilder {
        CountryBuilder::new(code, common_name)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.common_name
    }

    pub fn official_name(&self) -> &str {
        &self.official_name
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn subregion(&self) -> Option<&str> {
        self.subregion.as_deref()
    }

    pub fn capitals(&self) -> &[String] {
        &self.capitals
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn area(&self) -> Option<f64> {
        self.area
    }

    pub fn borders(&self) -> &[String] {
        &self.borders
    }

    /// Language display names, in language-code order.
    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|(_, name)| name.as_str())
    }

    /// `true` if `name` is one of the language display names (exact match).
    pub fn speaks(&self, name: &str) -> bool {
        self.language_names().any(|l| l == name)
    }

    /// The first currency listed, with its code.
    pub fn primary_currency(&self) -> Option<(&str, &Currency)> {
        self.currencies.first().map(|(code, c)| (code.as_str(), c))
    }
}

/// Fluent constructor for [`Country`], used by tests, demos and bindings.
#[derive(Debug, Clone)]
pub struct CountryBuilder {
    inner: Country,
}

impl CountryBuilder {
    pub fn new(code: &str, common_name: &str) -> Self {
        Self {
            inner: Country {
                code: code.trim().to_ascii_uppercase(),
                common_name: common_name.to_owned(),
                official_name: common_name.to_owned(),
                capitals: Vec::new(),
                population: 0,
                region: String::new(),
                subregion: None,
                languages: Vec::new(),
                currencies: Vec::new(),
                flag_image_url: String::new(),
                area: None,
                borders: Vec::new(),
            },
        }
    }

    pub fn official_name(mut self, name: &str) -> Self {
        self.inner.official_name = name.to_owned();
        self
    }

    pub fn capital(mut self, capital: &str) -> Self {
        self.inner.capitals.push(capital.to_owned());
        self
    }

    pub fn population(mut self, population: u64) -> Self {
        self.inner.population = population;
        self
    }

    pub fn region(mut self, region: &str) -> Self {
        self.inner.region = region.to_owned();
        self
    }

    pub fn subregion(mut self, subregion: &str) -> Self {
        self.inner.subregion = Some(subregion.to_owned());
        self
    }

    pub fn language(mut self, code: &str, name: &str) -> Self {
        self.inner.languages.push((code.to_owned(), name.to_owned()));
        self
    }

    pub fn currency(mut self, code: &str, name: &str, symbol: Option<&str>) -> Self {
        let currency = Currency {
            name: name.to_owned(),
            symbol: symbol.map(str::to_owned),
        };
        self.inner.currencies.push((code.to_owned(), currency));
        self
    }

    pub fn flag(mut self, url: &str) -> Self {
        self.inner.flag_image_url = url.to_owned();
        self
    }

    pub fn area(mut self, area: f64) -> Self {
        self.inner.area = Some(area);
        self
    }

    pub fn border(mut self, code: &str) -> Self {
        self.inner.borders.push(code.to_ascii_uppercase());
        self
    }

    pub fn build(self) -> Country {
        self.inner
    }
}

impl From<CountryRaw> for Country {
    fn from(c: CountryRaw) -> Self {
        let languages = c.languages.unwrap_or_default().into_iter().collect();

        let currencies = c
            .currencies
            .unwrap_or_default()
            .into_iter()
            .map(|(code, cur)| {
                (
                    code,
                    Currency {
                        name: cur.name.unwrap_or_default(),
                        symbol: cur.symbol.filter(|s| !s.is_empty()),
                    },
                )
            })
            .collect();

        let official_name = if c.name.official.is_empty() {
            c.name.common.clone()
        } else {
            c.name.official
        };

        Country {
            code: c.cca3.trim().to_ascii_uppercase(),
            common_name: c.name.common,
            official_name,
            capitals: c.capital.unwrap_or_default(),
            population: c.population.unwrap_or(0),
            region: c.region.unwrap_or_default(),
            subregion: c.subregion.filter(|s| !s.is_empty()),
            languages,
            currencies,
            flag_image_url: c.flags.png.or(c.flags.svg).unwrap_or_default(),
            area: c.area.filter(|a| *a >= 0.0),
            borders: c
                .borders
                .unwrap_or_default()
                .into_iter()
                .map(|b| b.to_ascii_uppercase())
                .collect(),
        }
    }
}

/// Convert raw JSON records into the directory model.
///
/// Order is preserved. A record whose code repeats an earlier one is dropped
/// (the first occurrence wins), as is a record with no code at all.
pub fn build_countries(raw: CountriesRaw) -> Vec<Country> {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut out = Vec::with_capacity(raw.len());

    for country in raw.into_iter().map(Country::from) {
        if country.code.is_empty() {
            tracing::warn!(name = %country.common_name, "dropping record without a code");
            continue;
        }
        if !seen.insert(country.code.clone()) {
            tracing::warn!(code = %country.code, "dropping duplicate country code");
            continue;
        }
        out.push(country);
    }
    out
}
