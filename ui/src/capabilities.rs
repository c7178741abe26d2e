//! Browser-backed implementations of the controller's capabilities.

use api::clipboard::ClipboardWriter;
use api::error::StoreError;
use api::prefs::PreferenceStore;
use api::ViewContext;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use crate::compat;

/// The controller as wired up in the running app.
pub type WidgetContext = ViewContext<BrowserStorage, DomClipboard>;

/// `localStorage`, or a per-session map where there is none.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        compat::storage_get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        compat::storage_set(key, value)
    }
}

/// The system clipboard.
///
/// Must be used from inside the Dioxus runtime: the write is spawned as a
/// task and finishes after the click handler returns.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomClipboard;

impl ClipboardWriter for DomClipboard {
    fn write_text(&self, text: &str) {
        let text = text.to_string();
        spawn(async move {
            if !compat::clipboard_set(text.clone()).await {
                warn!("could not copy {text} to the clipboard");
            }
        });
    }
}
