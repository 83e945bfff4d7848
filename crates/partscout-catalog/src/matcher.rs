//! Keyword lookup over the catalog.
//!
//! A row matches when its uppercased description or uppercased code contains
//! any keyword as a substring. Keywords are tested one by one; they are never
//! joined into a pattern string.

use partscout_core::{KeywordSet, MatchResult, ProductRow};

use crate::store::CatalogStore;

/// `true` if any keyword occurs in the row's description or code.
///
/// Keywords are expected to be uppercased already (see [`KeywordSet`]).
/// A missing field never matches.
pub fn row_matches(row: &ProductRow, keywords: &KeywordSet) -> bool {
    [row.description.as_deref(), row.code.as_deref()]
        .into_iter()
        .flatten()
        .map(str::to_uppercase)
        .any(|field| keywords.iter().any(|kw| field.contains(kw.as_str())))
}

/// Rows matching any keyword, in catalog order.
///
/// Returns `None` when nothing matches. An empty keyword set matches nothing.
pub fn match_catalog(keywords: &KeywordSet, catalog: &CatalogStore) -> Option<MatchResult> {
    if keywords.is_empty() {
        return None;
    }

    let rows = catalog
        .rows()
        .iter()
        .filter(|row| row_matches(row, keywords))
        .cloned()
        .collect();
    MatchResult::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> CatalogStore {
        CatalogStore::from_rows(vec![
            ProductRow::new("TU1208", "MANGUERA 12MM", 5.0, "3 DIAS"),
            ProductRow::new("KQ2H06-01S", "Conector recto 6mm", 120.0, "INMEDIATA"),
            ProductRow::new("TU0604", "MANGUERA 6MM AZUL", 40.0, "1 SEMANA"),
            ProductRow::new("SY3120-5LZD", "VALVULA SOLENOIDE 5/2", 3.0, "15 DIAS"),
            ProductRow {
                code: None,
                description: Some("SILENCIADOR 1/8".to_string()),
                quantity: None,
                lead_time: None,
            },
            ProductRow {
                code: Some("AN101-01".to_string()),
                description: None,
                quantity: Some(2.0),
                lead_time: None,
            },
        ])
    }

    fn keywords(pieces: &[&str]) -> KeywordSet {
        KeywordSet::from_pieces(pieces.iter().copied())
    }

    fn codes(result: &MatchResult) -> Vec<&str> {
        result
            .rows()
            .iter()
            .map(|r| r.code.as_deref().unwrap_or("-"))
            .collect()
    }

    #[test]
    fn test_description_keyword_matches() {
        let catalog = sample_catalog();
        let result = match_catalog(&keywords(&["MANGUERA", "12MM"]), &catalog).unwrap();
        assert_eq!(codes(&result), vec!["TU1208", "TU0604"]);
    }

    #[test]
    fn test_unknown_keyword_is_absent() {
        let catalog = sample_catalog();
        assert!(match_catalog(&keywords(&["XYZ999"]), &catalog).is_none());
    }

    #[test]
    fn test_exact_code_returns_that_product() {
        let catalog = sample_catalog();
        let result = match_catalog(&keywords(&["TU1208"]), &catalog).unwrap();
        assert_eq!(codes(&result), vec!["TU1208"]);
    }

    #[test]
    fn test_code_substring_returns_all_sharing_it() {
        let catalog = sample_catalog();
        let result = match_catalog(&keywords(&["TU"]), &catalog).unwrap();
        assert_eq!(codes(&result), vec!["TU1208", "TU0604"]);
    }

    #[test]
    fn test_matching_is_case_insensitive_on_fields() {
        let catalog = sample_catalog();
        // "Conector recto 6mm" is mixed case in the catalog.
        let result = match_catalog(&keywords(&["conector"]), &catalog).unwrap();
        assert_eq!(codes(&result), vec!["KQ2H06-01S"]);
    }

    #[test]
    fn test_missing_fields_do_not_match_or_panic() {
        let catalog = sample_catalog();

        let result = match_catalog(&keywords(&["SILENCIADOR"]), &catalog).unwrap();
        assert_eq!(result.len(), 1);
        assert!(result.rows()[0].code.is_none());

        let result = match_catalog(&keywords(&["AN101"]), &catalog).unwrap();
        assert_eq!(codes(&result), vec!["AN101-01"]);
    }

    #[test]
    fn test_empty_keywords_match_nothing() {
        let catalog = sample_catalog();
        assert!(match_catalog(&KeywordSet::default(), &catalog).is_none());
    }

    #[test]
    fn test_empty_catalog_matches_nothing() {
        let catalog = CatalogStore::default();
        assert!(match_catalog(&keywords(&["MANGUERA"]), &catalog).is_none());
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let catalog = sample_catalog();
        let result = match_catalog(&keywords(&["5/2"]), &catalog).unwrap();
        assert_eq!(codes(&result), vec!["SY3120-5LZD"]);
        assert!(match_catalog(&keywords(&[".*"]), &catalog).is_none());
        assert!(match_catalog(&keywords(&["MANGUERA|VALVULA"]), &catalog).is_none());
    }

    #[test]
    fn test_row_is_listed_once_even_if_both_fields_hit() {
        let catalog = CatalogStore::from_rows(vec![ProductRow::new(
            "VALV-1",
            "VALVULA",
            1.0,
            "",
        )]);
        let result = match_catalog(&keywords(&["VALV", "VALVULA"]), &catalog).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_every_match_contains_a_keyword_and_keeps_order() {
        let catalog = sample_catalog();
        let kws = keywords(&["6MM", "5/2", "AN1"]);
        let result = match_catalog(&kws, &catalog).unwrap();

        for row in result.rows() {
            assert!(row_matches(row, &kws));
        }

        let positions: Vec<usize> = result
            .rows()
            .iter()
            .map(|r| catalog.rows().iter().position(|c| c == r).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);

        let skipped = catalog
            .rows()
            .iter()
            .filter(|r| !result.rows().contains(r))
            .all(|r| !row_matches(r, &kws));
        assert!(skipped);
    }

    #[test]
    fn test_matching_is_idempotent() {
        let catalog = sample_catalog();
        let kws = keywords(&["MANGUERA", "VALVULA"]);
        let first = match_catalog(&kws, &catalog);
        let second = match_catalog(&kws, &catalog);
        assert_eq!(first, second);
    }
}
