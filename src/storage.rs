//! Browser Storage
//!
//! `KeyValueStore` over `window.localStorage`.

use listkeeper_core::{DomainError, DomainResult, KeyValueStore};
use wasm_bindgen::JsValue;

/// Handle to the page's local storage. Looked up on every call, so it holds no JS state.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> DomainResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| DomainError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| DomainError::Storage("localStorage unavailable".to_string()))
    }
}

fn js_error(err: JsValue) -> DomainError {
    DomainError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> DomainResult<()> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}
