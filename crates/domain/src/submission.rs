//! Submission: the bill form, the payload built from it, and the lifecycle
//! of one submit action.

use serde::{Deserialize, Serialize};

use crate::appliance::{Appliance, ApplianceList, parse_number};
use crate::identity::Identity;

/// Raw contents of the bill form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillForm {
    /// Billing month as entered (e.g. `2024-01`).
    pub month: String,
    pub total_units: String,
    pub bill_amount: String,
    pub appliances: ApplianceList,
}

/// Request body of the data-submission endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub user_id: String,
    pub month: String,
    pub total_units: f64,
    pub bill_amount: f64,
    pub appliances: Vec<Appliance>,
}

impl SubmissionPayload {
    /// Assemble the payload for `identity` from the current form contents.
    ///
    /// Appliances keep the list's insertion order.
    #[must_use]
    pub fn build(identity: &Identity, form: &BillForm) -> Self {
        Self {
            user_id: identity.user_id.clone(),
            month: form.month.clone(),
            total_units: parse_number(&form.total_units),
            bill_amount: parse_number(&form.bill_amount),
            appliances: form.appliances.to_appliances(),
        }
    }
}

/// Lifecycle of the submit action.
///
/// ```text
/// Idle ──begin──▶ Submitting ──succeed──▶ Done
///   ▲                 │
///   │                 └──fail──▶ Errored
///   └── Done / Errored may begin again
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Done,
    Errored,
}

/// Attempted to start a submission while one is still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("a submission is already in progress")]
pub struct AlreadySubmitting;

impl SubmissionState {
    /// Move to [`Submitting`](Self::Submitting).
    ///
    /// # Errors
    ///
    /// Returns [`AlreadySubmitting`] when a request is still outstanding.
    pub fn begin(self) -> Result<Self, AlreadySubmitting> {
        match self {
            Self::Submitting => Err(AlreadySubmitting),
            Self::Idle | Self::Done | Self::Errored => Ok(Self::Submitting),
        }
    }

    /// Record the outcome of the outstanding request.
    #[must_use]
    pub fn finish(self, succeeded: bool) -> Self {
        if succeeded { Self::Done } else { Self::Errored }
    }

    #[must_use]
    pub fn is_in_flight(self) -> bool {
        matches!(self, Self::Submitting)
    }
}
