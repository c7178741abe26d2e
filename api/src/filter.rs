//! Normalization and matching of the filter box text.

/// A normalized filter query.
///
/// Built from raw input by trimming surrounding whitespace, removing every
/// `:` and lowercasing. Only the query is lowercased: catalog names are
/// compared as stored, so a name with capitals never matches a query that
/// contains them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().replace(':', "").to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when `name` contains the query as a substring.
    pub fn matches(&self, name: &str) -> bool {
        name.contains(self.0.as_str())
    }
}
