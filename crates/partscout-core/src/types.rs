use serde::{Deserialize, Serialize};

// =============================================================================
// Catalog rows
// =============================================================================

/// One product of the catalog.
///
/// Every field is optional because spreadsheet cells may be blank. Rows are
/// immutable once loaded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    /// Product code, e.g. `TU1208`.
    pub code: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Units on hand.
    pub quantity: Option<f64>,
    /// Delivery lead time as written in the source, e.g. `3 DIAS`.
    pub lead_time: Option<String>,
}

impl ProductRow {
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        quantity: f64,
        lead_time: impl Into<String>,
    ) -> Self {
        Self {
            code: Some(code.into()),
            description: Some(description.into()),
            quantity: Some(quantity),
            lead_time: Some(lead_time.into()),
        }
    }

    /// Quantity formatted for display; whole numbers drop the fraction.
    pub fn quantity_display(&self) -> String {
        self.quantity.map(format_number).unwrap_or_default()
    }
}

/// Shortest textual form of a spreadsheet number: `1208.0` becomes `1208`,
/// fractional values keep their decimals.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

// =============================================================================
// Keywords
// =============================================================================

/// Normalized search keywords extracted from one query.
///
/// Invariant: every keyword is trimmed, uppercased and non-empty. Order is
/// the order in which the pieces were supplied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    /// Build a keyword set from raw pieces, dropping blanks.
    pub fn from_pieces<I, S>(pieces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            pieces
                .into_iter()
                .map(|p| p.as_ref().trim().to_uppercase())
                .filter(|p| !p.is_empty())
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Match results
// =============================================================================

/// A non-empty, catalog-ordered selection of product rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult(Vec<ProductRow>);

impl MatchResult {
    /// Wrap matched rows. Returns `None` for an empty selection so that
    /// "no match" is always represented as an absent result.
    pub fn from_rows(rows: Vec<ProductRow>) -> Option<Self> {
        if rows.is_empty() {
            None
        } else {
            Some(Self(rows))
        }
    }

    pub fn rows(&self) -> &[ProductRow] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
