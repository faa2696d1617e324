//! Domain errors.
//!
//! Each layer defines its own typed errors; the app layer wraps these via `#[from]`.

/// A domain invariant was violated by user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The user id was empty after trimming whitespace.
    #[error("user id must not be empty")]
    EmptyUserId,
}
