// crates/countrydb-core/src/config.rs
use crate::favorites::FAVORITES_KEY;
use crate::pagination::ITEMS_PER_PAGE;
use serde::{Deserialize, Serialize};

/// Tunables for a [`crate::Directory`]. `Default` gives the stock values:
/// 12 items per page, favorites under `"countryFavorites"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub items_per_page: usize,
    pub favorites_key: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            items_per_page: ITEMS_PER_PAGE,
            favorites_key: FAVORITES_KEY.to_owned(),
        }
    }
}

impl DirectoryConfig {
    /// Page size, never below one.
    pub fn page_size(&self) -> usize {
        self.items_per_page.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: DirectoryConfig = serde_json::from_str(r#"{ "items_per_page": 24 }"#).unwrap();
        assert_eq!(cfg.items_per_page, 24);
        assert_eq!(cfg.favorites_key, "countryFavorites");
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let cfg = DirectoryConfig {
            items_per_page: 0,
            ..DirectoryConfig::default()
        };
        assert_eq!(cfg.page_size(), 1);
    }
}
