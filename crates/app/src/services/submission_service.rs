//! Submission service: sends the bill form to the prediction service.

use std::cell::Cell;

use billsight_domain::report::BillReport;
use billsight_domain::submission::{BillForm, SubmissionPayload, SubmissionState};

use crate::error::{ApiError, SubmissionError};
use crate::ports::{BillingApi, KeyValueStore, Notifier};
use crate::session_store::SessionStore;

/// Application service for the submit action.
///
/// Holds the [`SubmissionState`] so that a second submit while a request is
/// outstanding is refused instead of racing the first one to the result key.
pub struct SubmissionService<A, S, N> {
    api: A,
    session: SessionStore<S>,
    notifier: N,
    state: Cell<SubmissionState>,
}

impl<A, S, N> SubmissionService<A, S, N>
where
    A: BillingApi,
    S: KeyValueStore,
    N: Notifier,
{
    /// Create a new service backed by the given ports.
    pub fn new(api: A, session: SessionStore<S>, notifier: N) -> Self {
        Self {
            api,
            session,
            notifier,
            state: Cell::new(SubmissionState::Idle),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    /// Build the payload from `form`, send it, and persist the response as
    /// the result record.
    ///
    /// On success the caller navigates to the report view. On failure the
    /// user is notified, the form is untouched and the result record keeps
    /// its previous value.
    ///
    /// # Errors
    ///
    /// - [`SubmissionError::InFlight`] if a previous submission has not finished (no request is sent)
    /// - [`SubmissionError::NotRegistered`] if no identity record is stored
    /// - [`SubmissionError::Api`] for non-success responses and transport failures
    /// - [`SubmissionError::Store`] if storage cannot be read or the result cannot be written
    pub async fn submit(&self, form: &BillForm) -> Result<BillReport, SubmissionError> {
        match self.state.get().begin() {
            Ok(next) => self.state.set(next),
            Err(err) => {
                tracing::debug!("submission already in flight, ignoring");
                return Err(err.into());
            }
        }

        let result = self.send(form).await;
        self.state.set(self.state.get().finish(result.is_ok()));

        if let Err(err) = &result {
            match err {
                SubmissionError::Api(ApiError::Server { status, .. }) => {
                    tracing::warn!(status, "submission rejected");
                }
                other => tracing::warn!(error = ?other, "submission failed"),
            }
            self.notifier.notify(&err.user_message());
        }
        result
    }

    async fn send(&self, form: &BillForm) -> Result<BillReport, SubmissionError> {
        let identity = self
            .session
            .identity()?
            .ok_or(SubmissionError::NotRegistered)?;
        let payload = SubmissionPayload::build(&identity, form);
        tracing::debug!(
            user_id = %payload.user_id,
            month = %payload.month,
            appliances = payload.appliances.len(),
            "submitting bill"
        );

        let report = self.api.submit_data(&payload).await?;
        self.session.save_result(&report)?;
        tracing::info!(month = %report.bill.month, "stored prediction report");
        Ok(report)
    }
}
