//! History service: bills the registered user submitted before.

use billsight_domain::history::BillHistoryEntry;

use crate::error::HistoryError;
use crate::ports::{BillingApi, KeyValueStore};
use crate::session_store::SessionStore;

/// Application service listing the registered user's past bills.
pub struct HistoryService<A, S> {
    api: A,
    session: SessionStore<S>,
}

impl<A: BillingApi, S: KeyValueStore> HistoryService<A, S> {
    /// Create a new service backed by the given ports.
    pub fn new(api: A, session: SessionStore<S>) -> Self {
        Self { api, session }
    }

    /// Fetch the history of the stored identity, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NotRegistered`] without a stored identity,
    /// or the API / storage error otherwise.
    pub async fn load(&self) -> Result<Vec<BillHistoryEntry>, HistoryError> {
        let identity = self.session.identity()?.ok_or(HistoryError::NotRegistered)?;
        let entries = self.api.fetch_history(&identity.user_id).await?;
        tracing::debug!(count = entries.len(), "loaded bill history");
        Ok(entries)
    }
}
