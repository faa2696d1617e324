//! Registration gate: use-cases guarding the form behind a stored identity.

use billsight_domain::identity::{Identity, UserId};

use crate::error::{ApiError, RegistrationError};
use crate::ports::{BillingApi, KeyValueStore, Notifier};
use crate::session_store::SessionStore;

/// Application service deciding whether the page is unlocked and performing
/// registration.
pub struct RegistrationGate<A, S, N> {
    api: A,
    session: SessionStore<S>,
    notifier: N,
}

impl<A, S, N> RegistrationGate<A, S, N>
where
    A: BillingApi,
    S: KeyValueStore,
    N: Notifier,
{
    /// Create a new gate backed by the given ports.
    pub fn new(api: A, session: SessionStore<S>, notifier: N) -> Self {
        Self {
            api,
            session,
            notifier,
        }
    }

    /// The stored identity, or `None` when the registration prompt must be shown.
    ///
    /// Unreadable storage locks the page.
    pub fn current_identity(&self) -> Option<Identity> {
        match self.session.identity() {
            Ok(identity) => identity,
            Err(err) => {
                tracing::warn!(error = %err, "cannot read identity record");
                None
            }
        }
    }

    /// Register `raw_user_id` with the billing service and persist the
    /// returned identity.
    ///
    /// Every failure is also surfaced through the notifier; nothing is
    /// retried and the identity record is only written on success.
    ///
    /// # Errors
    ///
    /// - [`RegistrationError::Validation`] for empty input (no request is sent)
    /// - [`RegistrationError::Api`] when the service rejects the request or is unreachable
    /// - [`RegistrationError::Store`] when the identity cannot be persisted
    pub async fn register(&self, raw_user_id: &str) -> Result<Identity, RegistrationError> {
        let result = self.try_register(raw_user_id).await;
        if let Err(err) = &result {
            self.report(err);
        }
        result
    }

    async fn try_register(&self, raw_user_id: &str) -> Result<Identity, RegistrationError> {
        let user_id = UserId::parse(raw_user_id)?;
        tracing::debug!(user_id = %user_id, "registering");
        let identity = self.api.register(&user_id).await?;
        self.session.save_identity(&identity)?;
        tracing::info!(user_id = %identity.user_id, "registered");
        Ok(identity)
    }

    fn report(&self, err: &RegistrationError) {
        match err {
            RegistrationError::Validation(_) => {}
            RegistrationError::Api(ApiError::Server { status, .. }) => {
                tracing::warn!(status, "registration rejected");
            }
            other => tracing::warn!(error = ?other, "registration failed"),
        }
        self.notifier.notify(&err.user_message());
    }
}
