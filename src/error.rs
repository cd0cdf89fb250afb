//! Error types for auth operations and the session slot.
//!
//! ERROR HANDLING
//! ==============
//! `AuthError` display strings double as the notification text shown to the
//! user, so they are phrased for people rather than logs. Nothing here is
//! retried automatically; the user re-initiates the action.

/// Failure of an auth operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// A required credential field was empty.
    #[error("Please enter your email and password.")]
    InvalidCredentials,
    /// User input failed a format or consistency check.
    #[error("{0}")]
    Validation(String),
    /// Catch-all for unexpected failures inside a simulated call.
    #[error("Something went wrong: {0}")]
    OperationFailure(String),
    /// The view that started the operation went away before it resolved.
    #[error("operation cancelled")]
    Cancelled,
}

impl AuthError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether the error should be shown to the user at all.
    #[must_use]
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

/// Failure reading or writing the local key-value slot.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("session encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}
