//! Provides the ordered name-to-URL map of emoji images.

use crate::filter::Query;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// A map from emoji name to the URL of its image.
///
/// Iteration follows insertion order, which for a decoded catalog is the
/// order of keys in the response body. The catalog fetched at startup is never
/// mutated afterwards; filtering produces a new, smaller catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolCatalog(IndexMap<String, String>);

impl SymbolCatalog {
    /// Creates a new, empty `SymbolCatalog`.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Inserts or replaces the image URL for `name`.
    ///
    /// A replaced entry keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), url.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over `(name, url)` pairs in catalog order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }

    /// Names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns the entries whose name contains `query`, in catalog order.
    ///
    /// An empty query keeps every entry.
    pub fn filtered(&self, query: &Query) -> SymbolCatalog {
        self.iter()
            .filter(|(name, _)| query.matches(name))
            .collect()
    }
}

impl<N: Into<String>, U: Into<String>> FromIterator<(N, U)> for SymbolCatalog {
    fn from_iter<I: IntoIterator<Item = (N, U)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, url)| (name.into(), url.into()))
                .collect(),
        )
    }
}

/// Iterator over the entries of a [`SymbolCatalog`].
pub struct Iter<'a>(indexmap::map::Iter<'a, String, String>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.0
            .next()
            .map(|(name, url)| (name.as_str(), url.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a SymbolCatalog {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The colon-delimited reference to an emoji, e.g. `:smile:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcode(String);

impl Shortcode {
    pub fn for_name(name: &str) -> Self {
        Self(format!(":{name}:"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Shortcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
