//! Identity: the locally persisted proof of a completed registration.
//!
//! The registration service echoes back an identity object that must carry
//! `user_id` and may carry anything else. Unknown fields are kept so the
//! record written to storage is exactly what the service returned.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A user id that has been trimmed and checked for presence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Trim `raw` and reject it if nothing is left.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyUserId`] for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyUserId);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The identity record returned by the registration service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: String,
    /// Any additional fields the service returned, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Identity {
    /// Identity carrying nothing but a user id.
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Greeting shown once the gate is unlocked.
    #[must_use]
    pub fn welcome_message(&self) -> String {
        format!("Welcome, {}", self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_trim_user_id() {
        let id = UserId::parse("  u1 \n").unwrap();
        assert_eq!(id.as_str(), "u1");
    }

    #[test]
    fn should_reject_empty_user_id() {
        assert_eq!(UserId::parse(""), Err(ValidationError::EmptyUserId));
    }

    #[test]
    fn should_reject_whitespace_only_user_id() {
        assert_eq!(UserId::parse(" \t  "), Err(ValidationError::EmptyUserId));
    }

    #[test]
    fn should_serialize_minimal_identity_as_user_id_only() {
        let identity = Identity::new("u1");
        assert_eq!(serde_json::to_value(&identity).unwrap(), json!({"user_id": "u1"}));
    }

    #[test]
    fn should_preserve_unknown_server_fields() {
        let raw = json!({"user_id": "u1", "username": "demo"});
        let identity: Identity = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(identity.user_id, "u1");
        assert_eq!(identity.extra.get("username"), Some(&json!("demo")));
        assert_eq!(serde_json::to_value(&identity).unwrap(), raw);
    }

    #[test]
    fn should_reject_identity_without_user_id() {
        let result = serde_json::from_value::<Identity>(json!({"username": "demo"}));
        assert!(result.is_err());
    }

    #[test]
    fn should_format_welcome_message() {
        assert_eq!(Identity::new("u1").welcome_message(), "Welcome, u1");
    }
}
