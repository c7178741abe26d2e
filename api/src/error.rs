//! Error types for the catalog fetch and the preference store.

use thiserror::Error;

/// Why the catalog could not be loaded.
///
/// Nothing retries on any of these; the startup sequence surfaces them as-is.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request to the emoji endpoint failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("emoji endpoint answered with HTTP status {0}")]
    Status(u16),

    #[error("emoji endpoint returned an unexpected body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure to write a preference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("preference storage is not available")]
    Unavailable,

    #[error("preference storage rejected the write for key `{key}`")]
    Rejected { key: String },
}
