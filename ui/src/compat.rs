// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use api::error::StoreError;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{self, Storage, Window};

    pub async fn clipboard_set(text: String) -> bool {
        match web_sys::window().map(|win: Window| win.navigator().clipboard()) {
            Some(clipboard) => {
                let promise = clipboard.write_text(&text);
                JsFuture::from(promise).await.is_ok()
            }
            _ => false,
        }
    }

    fn local_storage() -> Option<Storage> {
        // Err when storage is disabled, Ok(None) in some sandboxed frames
        web_sys::window()?.local_storage().ok()?
    }

    pub fn storage_get(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok()?
    }

    pub fn storage_set(key: &str, value: &str) -> Result<(), StoreError> {
        let storage = local_storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StoreError::Rejected {
                key: key.to_string(),
            })
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use api::error::StoreError;
    use api::prefs::MemoryStore;
    use api::prefs::PreferenceStore;
    use dioxus_clipboard::prelude::*;

    thread_local! {
        // no localStorage off the web; preferences last for the session only
        static SESSION_STORE: MemoryStore = MemoryStore::new();
    }

    pub async fn clipboard_set(text: String) -> bool {
        let mut clipboard = use_clipboard();
        clipboard.set(text).is_ok()
    }

    pub fn storage_get(key: &str) -> Option<String> {
        SESSION_STORE.with(|store| store.get(key))
    }

    pub fn storage_set(key: &str, value: &str) -> Result<(), StoreError> {
        SESSION_STORE.with(|store| store.set(key, value))
    }
}
