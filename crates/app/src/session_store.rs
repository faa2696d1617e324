//! Session store: typed access to the two persisted records.
//!
//! The identity record and the result record are the only state shared
//! between pages. Both live as JSON strings in a [`KeyValueStore`] under
//! configurable keys. A record that fails to decode is treated as absent so
//! a stale or hand-edited value never wedges the UI.

use billsight_domain::identity::Identity;
use billsight_domain::report::BillReport;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::ports::KeyValueStore;

/// Storage keys of the persisted records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub identity: String,
    pub result: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            identity: "loggedInUser".to_string(),
            result: "resultData".to_string(),
        }
    }
}

/// Typed view over a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Create a session store using the given keys.
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    /// The stored identity, if registration has completed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if storage cannot be read.
    pub fn identity(&self) -> Result<Option<Identity>, StoreError> {
        self.read(&self.keys.identity)
    }

    /// Overwrite the identity record.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the record cannot be encoded or written.
    pub fn save_identity(&self, identity: &Identity) -> Result<(), StoreError> {
        self.write(&self.keys.identity, identity)
    }

    /// The most recent successful submission response, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if storage cannot be read.
    pub fn result(&self) -> Result<Option<BillReport>, StoreError> {
        self.read(&self.keys.result)
    }

    /// Overwrite the result record.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the record cannot be encoded or written.
    pub fn save_result(&self, report: &BillReport) -> Result<(), StoreError> {
        self.write(&self.keys.result, report)
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.store.get_item(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                tracing::warn!(key, error = %err, "ignoring undecodable stored record");
                Ok(None)
            }
        }
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(StoreError::Serialize)?;
        self.store.set_item(key, &raw)
    }
}
