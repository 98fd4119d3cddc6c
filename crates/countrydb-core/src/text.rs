// crates/countrydb-core/src/text.rs

/// Lowercase a string for case-insensitive comparison.
///
/// Uses full Unicode lowercasing (`"ÅLAND"` -> `"åland"`), no transliteration:
/// accents are significant.
///
/// # Examples
///
/// ```rust
/// use countrydb_core::text::fold_case;
///
/// assert_eq!(fold_case("Côte d'Ivoire"), "côte d'ivoire");
/// ```
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Case-insensitive substring test. An empty needle always matches.
///
/// # Examples
///
/// ```rust
/// use countrydb_core::text::contains_folded;
///
/// assert!(contains_folded("United States", "states"));
/// assert!(contains_folded("Japan", ""));
/// assert!(!contains_folded("Japan", "pan am"));
/// ```
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    fold_case(haystack).contains(&fold_case(needle))
}

/// Render an integer with `,` thousands separators (`331000000` -> `"331,000,000"`).
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_case_insensitive() {
        assert!(contains_folded("Canada", "CAN"));
        assert!(contains_folded("Canada", "nad"));
        assert!(!contains_folded("Canada", "Kanada"));
    }

    #[test]
    fn accents_are_not_folded_away() {
        assert!(contains_folded("Curaçao", "ÇAO"));
        assert!(!contains_folded("Curaçao", "curacao"));
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(38005238), "38,005,238");
        assert_eq!(group_thousands(331000000), "331,000,000");
    }
}
