// crates/countrydb-core/src/raw.rs
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// Entries of a JSON object in document order (`null` reads as `None`).
pub type OrderedEntries<V> = Option<Vec<(String, V)>>;

/// Deserialize a JSON object into its entries without re-ordering them. The
/// first key listed is the one the directory treats as primary.
fn ordered_entries<'de, D, V>(deserializer: D) -> Result<OrderedEntries<V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct EntriesVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
        type Value = OrderedEntries<V>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a JSON object or null")
        }

        fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2: Deserializer<'de>>(self, d: D2) -> Result<Self::Value, D2::Error> {
            d.deserialize_map(self)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, V>()? {
                entries.push(entry);
            }
            Ok(Some(entries))
        }
    }

    deserializer.deserialize_option(EntriesVisitor(PhantomData))
}

/// Raw `name` object as in the REST Countries v3.1 JSON:
/// `{ "common": "Canada", "official": "Canada" }`
#[derive(Debug, Default, Deserialize)]
pub struct NameRaw {
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// Raw currency entry: `{ "name": "Euro", "symbol": "€" }`
#[derive(Debug, Default, Deserialize)]
pub struct CurrencyRaw {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FlagsRaw {
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub svg: Option<String>,
}

/// Raw country structure from JSON.
/// NOTE: This type mirrors the external dataset; every field is defaulted so
/// a record with missing keys still parses.
#[derive(Debug, Default, Deserialize)]
pub struct CountryRaw {
    #[serde(default)]
    pub name: NameRaw,
    #[serde(default)]
    pub cca3: String,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    /// languages: { "eng": "English", "fra": "French" }, payload order kept
    #[serde(default, deserialize_with = "ordered_entries")]
    pub languages: OrderedEntries<String>,
    /// currencies in payload order; the first is the primary one
    #[serde(default, deserialize_with = "ordered_entries")]
    pub currencies: OrderedEntries<CurrencyRaw>,
    #[serde(default)]
    pub flags: FlagsRaw,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub borders: Option<Vec<String>>,
}

pub type CountriesRaw = Vec<CountryRaw>;

/// Exchange rate payload: `{ "base": "USD", "rates": { "EUR": 0.92 } }`
#[derive(Debug, Default, Deserialize)]
pub struct RatesRaw {
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub rates: BTreeMap<String, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_record_parses_with_defaults() {
        let raw: CountryRaw = serde_json::from_str(r#"{ "cca3": "ATA" }"#).unwrap();
        assert_eq!(raw.cca3, "ATA");
        assert!(raw.name.common.is_empty());
        assert!(raw.languages.is_none());
        assert!(raw.region.is_none());
    }

    #[test]
    fn full_record_parses() {
        let json = r#"{
            "name": { "common": "Canada", "official": "Canada" },
            "cca3": "CAN",
            "capital": ["Ottawa"],
            "population": 38005238,
            "region": "Americas",
            "subregion": "North America",
            "languages": { "eng": "English", "fra": "French" },
            "currencies": { "CAD": { "name": "Canadian dollar", "symbol": "$" } },
            "flags": { "png": "https://flagcdn.com/w320/ca.png" },
            "area": 9984670.0,
            "borders": ["USA"]
        }"#;
        let raw: CountryRaw = serde_json::from_str(json).unwrap();
        assert_eq!(raw.name.common, "Canada");
        assert_eq!(raw.languages.unwrap().len(), 2);
        let currencies = raw.currencies.unwrap();
        assert_eq!(currencies[0].0, "CAD");
        assert_eq!(currencies[0].1.symbol.as_deref(), Some("$"));
        assert_eq!(raw.borders.unwrap(), vec!["USA"]);
    }

    #[test]
    fn object_entries_keep_payload_order() {
        let raw: CountryRaw = serde_json::from_str(
            r#"{ "cca3": "ZWE",
                 "languages": { "sna": "Shona", "eng": "English", "nde": "Northern Ndebele" },
                 "currencies": { "ZWL": { "name": "Zimbabwean dollar" }, "BWP": { "name": "Botswana pula" } } }"#,
        )
        .unwrap();
        let langs: Vec<_> = raw.languages.unwrap().into_iter().map(|(k, _)| k).collect();
        assert_eq!(langs, vec!["sna", "eng", "nde"]);
        let codes: Vec<_> = raw.currencies.unwrap().into_iter().map(|(k, _)| k).collect();
        assert_eq!(codes, vec!["ZWL", "BWP"]);
    }

    #[test]
    fn null_collections_read_as_absent() {
        let raw: CountryRaw =
            serde_json::from_str(r#"{ "cca3": "ATA", "languages": null, "currencies": null }"#).unwrap();
        assert!(raw.languages.is_none());
        assert!(raw.currencies.is_none());
    }
}
