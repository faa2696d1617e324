//! Billing API port: the remote registration and prediction service.
//!
//! The prediction algorithm lives entirely behind this trait; the client
//! only moves JSON in and out.

use std::future::Future;

use billsight_domain::history::BillHistoryEntry;
use billsight_domain::identity::{Identity, UserId};
use billsight_domain::report::BillReport;
use billsight_domain::submission::SubmissionPayload;

use crate::error::ApiError;

/// Client for the billing service's HTTP+JSON endpoints.
pub trait BillingApi {
    /// `POST /api/register` with `{ user_id }`.
    ///
    /// Resolves to the identity record the service echoes back.
    fn register(&self, user_id: &UserId) -> impl Future<Output = Result<Identity, ApiError>>;

    /// `POST /api/submit_data` with the submission payload.
    fn submit_data(
        &self,
        payload: &SubmissionPayload,
    ) -> impl Future<Output = Result<BillReport, ApiError>>;

    /// `GET /api/dashboard_data?user_id=…`: bills submitted by `user_id`, oldest first.
    fn fetch_history(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<BillHistoryEntry>, ApiError>>;
}

impl<T: BillingApi> BillingApi for std::rc::Rc<T> {
    fn register(&self, user_id: &UserId) -> impl Future<Output = Result<Identity, ApiError>> {
        (**self).register(user_id)
    }

    fn submit_data(
        &self,
        payload: &SubmissionPayload,
    ) -> impl Future<Output = Result<BillReport, ApiError>> {
        (**self).submit_data(payload)
    }

    fn fetch_history(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<BillHistoryEntry>, ApiError>> {
        (**self).fetch_history(user_id)
    }
}
