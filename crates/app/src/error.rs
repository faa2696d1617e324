//! Application-layer errors.
//!
//! Every use-case error can render the message shown to the user through
//! [`user_message`](RegistrationError::user_message); the full error is only
//! logged.

use billsight_domain::error::ValidationError;
use billsight_domain::submission::AlreadySubmitting;

/// Failure talking to the billing service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The service answered with a non-success status.
    #[error("server responded with HTTP {status}")]
    Server {
        status: u16,
        /// The `error` field of the JSON body, when present.
        message: Option<String>,
    },

    /// The request never produced a response (unreachable host, CORS, …).
    #[error("request failed: {0}")]
    Transport(String),

    /// A success response whose body did not match the expected shape.
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Failure reading or writing the key/value store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage backend is missing or refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The record could not be encoded as JSON.
    #[error("failed to encode record")]
    Serialize(#[source] serde_json::Error),
}

/// Errors from [`RegistrationGate::register`](crate::services::registration_gate::RegistrationGate::register).
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("invalid registration input")]
    Validation(#[from] ValidationError),

    #[error("registration request failed")]
    Api(#[from] ApiError),

    #[error("failed to persist identity")]
    Store(#[from] StoreError),
}

impl RegistrationError {
    /// The message surfaced to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(_) => "Please enter a valid User ID.".to_string(),
            Self::Api(ApiError::Server {
                message: Some(message),
                ..
            }) => format!("Registration Error: {message}"),
            Self::Api(ApiError::Server {
                status,
                message: None,
            }) => format!("Registration Error: HTTP {status}"),
            Self::Api(ApiError::Transport(_) | ApiError::Decode(_)) => {
                "Registration network error!".to_string()
            }
            Self::Store(err) => format!("Registration Error: {err}"),
        }
    }
}

/// Errors from [`SubmissionService::submit`](crate::services::submission_service::SubmissionService::submit).
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// A previous submission is still outstanding.
    #[error(transparent)]
    InFlight(#[from] AlreadySubmitting),

    /// No identity record is stored (storage was cleared after unlocking).
    #[error("no registered user")]
    NotRegistered,

    #[error("submission request failed")]
    Api(#[from] ApiError),

    #[error("failed to access session storage")]
    Store(#[from] StoreError),
}

impl SubmissionError {
    /// The message surfaced to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InFlight(err) => err.to_string(),
            Self::NotRegistered => "Please register before submitting data.".to_string(),
            Self::Api(ApiError::Server { .. }) => "Error submitting data!".to_string(),
            Self::Api(ApiError::Transport(_) | ApiError::Decode(_)) => "Network error!".to_string(),
            Self::Store(err) => format!("Could not save the result: {err}"),
        }
    }
}

/// Errors from [`HistoryService::load`](crate::services::history_service::HistoryService::load).
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("no registered user")]
    NotRegistered,

    #[error("history request failed")]
    Api(#[from] ApiError),

    #[error("failed to access session storage")]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_show_server_error_verbatim_on_registration() {
        let err = RegistrationError::from(ApiError::Server {
            status: 409,
            message: Some("User ID already taken.".to_string()),
        });
        assert_eq!(err.user_message(), "Registration Error: User ID already taken.");
    }

    #[test]
    fn should_fall_back_to_status_when_server_gave_no_message() {
        let err = RegistrationError::from(ApiError::Server {
            status: 500,
            message: None,
        });
        assert_eq!(err.user_message(), "Registration Error: HTTP 500");
    }

    #[test]
    fn should_hide_transport_detail_from_user() {
        let err = RegistrationError::from(ApiError::Transport("dns lookup failed".to_string()));
        assert_eq!(err.user_message(), "Registration network error!");
    }

    #[test]
    fn should_ask_for_valid_user_id_on_validation_error() {
        let err = RegistrationError::from(ValidationError::EmptyUserId);
        assert_eq!(err.user_message(), "Please enter a valid User ID.");
    }

    #[test]
    fn should_use_generic_messages_for_submission_failures() {
        let server = SubmissionError::from(ApiError::Server {
            status: 400,
            message: Some("Month, total_units, and bill_amount are required.".to_string()),
        });
        assert_eq!(server.user_message(), "Error submitting data!");

        let transport = SubmissionError::from(ApiError::Decode("eof".to_string()));
        assert_eq!(transport.user_message(), "Network error!");
    }

    #[test]
    fn should_display_api_error_status() {
        let err = ApiError::Server {
            status: 404,
            message: None,
        };
        assert_eq!(err.to_string(), "server responded with HTTP 404");
    }
}
