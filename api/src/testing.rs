//! Fake capabilities shared by the unit tests.

use crate::catalog::SymbolCatalog;
use crate::clipboard::ClipboardWriter;
use crate::error::CatalogError;
use crate::error::StoreError;
use crate::prefs::PreferenceStore;
use crate::source::CatalogSource;
use std::cell::RefCell;
use std::rc::Rc;

/// Remembers every clipboard write. Clones share the record.
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard(Rc<RefCell<Vec<String>>>);

impl RecordingClipboard {
    pub fn writes(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&self, text: &str) {
        self.0.borrow_mut().push(text.to_string());
    }
}

pub struct StaticSource(pub SymbolCatalog);

impl CatalogSource for StaticSource {
    async fn fetch_catalog(&self) -> Result<SymbolCatalog, CatalogError> {
        Ok(self.0.clone())
    }
}

/// Answers every fetch with the given HTTP status.
pub struct FailingSource(pub u16);

impl CatalogSource for FailingSource {
    async fn fetch_catalog(&self) -> Result<SymbolCatalog, CatalogError> {
        Err(CatalogError::Status(self.0))
    }
}

/// Has no values and refuses writes.
pub struct RejectingStore;

impl PreferenceStore for RejectingStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Rejected { key: key.to_string() })
    }
}
