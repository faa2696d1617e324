//! `localStorage` adapter for the [`KeyValueStore`] port.

use billsight_app::error::StoreError;
use billsight_app::ports::KeyValueStore;
use wasm_bindgen::JsValue;

/// The page origin's `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn unavailable(err: &JsValue) -> StoreError {
    StoreError::Unavailable(format!("{err:?}"))
}

fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?
        .local_storage()
        .map_err(|err| unavailable(&err))?
        .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        local_storage()?.get_item(key).map_err(|err| unavailable(&err))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| unavailable(&err))
    }
}
