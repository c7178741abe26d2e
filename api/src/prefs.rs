//! The persisted layout preference and the store it lives in.

use crate::error::StoreError;
use crate::layout::Layout;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key under which the layout preference is stored.
pub const LAYOUT_KEY: &str = "layout";

/// A string key-value store that survives page reloads.
///
/// In the browser this is `localStorage`. Reads never fail; a store that
/// cannot be reached simply has no values.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Reads the layout preference from `store`, defaulting to grid.
pub fn read_layout(store: &impl PreferenceStore) -> Layout {
    Layout::from_stored(store.get(LAYOUT_KEY).as_deref())
}

/// Persists `layout` into `store`.
pub fn write_layout(store: &impl PreferenceStore, layout: Layout) -> Result<(), StoreError> {
    store.set(LAYOUT_KEY, layout.as_str())
}

/// A store that only lives as long as the process.
///
/// Used where there is no `localStorage`, and by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
