// crates/countrydb-core/src/facets.rs
use crate::model::Country;
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// Filter choices derived from a dataset.
///
/// - `regions`: distinct non-empty regions, in first-seen order.
/// - `languages`: distinct non-empty language display names, sorted.
///
/// A pure function of the dataset; rebuild it when the dataset changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetIndex {
    pub regions: Vec<String>,
    pub languages: Vec<String>,
}

impl FacetIndex {
    pub fn build(countries: &[Country]) -> Self {
        let mut seen = HashSet::new();
        let regions = countries
            .iter()
            .map(|c| c.region.as_str())
            .filter(|r| !r.is_empty() && seen.insert(*r))
            .map(str::to_owned)
            .collect();

        let languages = countries
            .iter()
            .flat_map(Country::language_names)
            .filter(|l| !l.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect();

        let index = Self { regions, languages };
        tracing::debug!(
            regions = index.regions.len(),
            languages = index.languages.len(),
            "facet index rebuilt"
        );
        index
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Vec<Country> {
        vec![
            Country::builder("JPN", "Japan").region("Asia").language("jpn", "Japanese").build(),
            Country::builder("USA", "United States").region("Americas").language("eng", "English").build(),
            Country::builder("ATA", "Antarctica").build(),
            Country::builder("CAN", "Canada")
                .region("Americas")
                .language("eng", "English")
                .language("fra", "French")
                .build(),
        ]
    }

    #[test]
    fn regions_keep_first_seen_order() {
        let idx = FacetIndex::build(&dataset());
        assert_eq!(idx.regions(), ["Asia", "Americas"]);
    }

    #[test]
    fn languages_are_sorted_and_distinct() {
        let idx = FacetIndex::build(&dataset());
        assert_eq!(idx.languages(), ["English", "French", "Japanese"]);
    }

    #[test]
    fn empty_dataset_has_no_facets() {
        assert_eq!(FacetIndex::build(&[]), FacetIndex::default());
    }

    #[test]
    fn blank_language_names_are_skipped() {
        let countries = vec![Country::builder("XXX", "Blank").language("xxx", "").build()];
        assert!(FacetIndex::build(&countries).languages.is_empty());
    }

    #[test]
    fn no_duplicates_or_empties_for_any_mix() {
        let mut countries = dataset();
        countries.extend(dataset());
        let idx = FacetIndex::build(&countries);
        let unique: HashSet<_> = idx.regions.iter().collect();
        assert_eq!(unique.len(), idx.regions.len());
        assert!(idx.regions.iter().all(|r| !r.is_empty()));
        assert!(idx.languages.windows(2).all(|w| w[0] < w[1]));
    }
}
