//! Stub ports shared by the use-case tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use billsight_domain::history::BillHistoryEntry;
use billsight_domain::identity::{Identity, UserId};
use billsight_domain::report::BillReport;
use billsight_domain::submission::SubmissionPayload;

pub use billsight_domain::report::fixtures::sample_report;

use crate::error::ApiError;
use crate::ports::{BillingApi, Notifier};

/// A request the stub API received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Register(String),
    Submit(SubmissionPayload),
    History(String),
}

/// [`BillingApi`] that records calls and replays queued responses.
#[derive(Default)]
pub struct RecordingApi {
    pub calls: RefCell<Vec<Call>>,
    pub register_responses: RefCell<VecDeque<Result<Identity, ApiError>>>,
    pub submit_responses: RefCell<VecDeque<Result<BillReport, ApiError>>>,
    pub history_responses: RefCell<VecDeque<Result<Vec<BillHistoryEntry>, ApiError>>>,
}

impl RecordingApi {
    pub fn with_register(response: Result<Identity, ApiError>) -> Self {
        let api = Self::default();
        api.register_responses.borrow_mut().push_back(response);
        api
    }

    pub fn with_submit(response: Result<BillReport, ApiError>) -> Self {
        let api = Self::default();
        api.submit_responses.borrow_mut().push_back(response);
        api
    }

    pub fn with_history(response: Result<Vec<BillHistoryEntry>, ApiError>) -> Self {
        let api = Self::default();
        api.history_responses.borrow_mut().push_back(response);
        api
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

fn next<T>(queue: &RefCell<VecDeque<Result<T, ApiError>>>) -> Result<T, ApiError> {
    queue
        .borrow_mut()
        .pop_front()
        .unwrap_or_else(|| Err(ApiError::Transport("no stubbed response".to_string())))
}

impl BillingApi for RecordingApi {
    async fn register(&self, user_id: &UserId) -> Result<Identity, ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::Register(user_id.as_str().to_string()));
        next(&self.register_responses)
    }

    async fn submit_data(&self, payload: &SubmissionPayload) -> Result<BillReport, ApiError> {
        self.calls.borrow_mut().push(Call::Submit(payload.clone()));
        // Suspend like a real request so concurrent submits overlap.
        tokio::task::yield_now().await;
        next(&self.submit_responses)
    }

    async fn fetch_history(&self, user_id: &str) -> Result<Vec<BillHistoryEntry>, ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::History(user_id.to_string()));
        next(&self.history_responses)
    }
}

/// [`Notifier`] that remembers every message.
#[derive(Default)]
pub struct RecordingNotifier {
    pub messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
