//! # Auth error taxonomy
//!
//! Every failure of a login, registration or resend request lands in one of
//! three buckets. All of them are recoverable: the screen stays where it is,
//! shows [`AuthError::user_message`] inline and lets the user submit again.
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`Validation`](AuthError::Validation) | A required field is missing; raised by the form before any request. |
//! | [`Rejected`](AuthError::Rejected) | The server answered with a non-2xx status. Its `message` field, if any, is shown verbatim. |
//! | [`Network`](AuthError::Network) | The request could not complete (offline, DNS, connection reset) or a success body could not be read. |
//!
//! Non-2xx statuses are not distinguished from each other; `status` is kept
//! for logging only.

use thiserror::Error;

/// Message shown for every [`AuthError::Network`] failure.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),

    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        /// The `message` field of the response body, when present.
        message: Option<String>,
        /// Set when the server offers to resend the verification email.
        can_resend: bool,
    },

    /// The underlying cause, for logs. Never shown to the user.
    #[error("network error: {0}")]
    Network(String),
}

impl AuthError {
    /// Text to render inline. `fallback` is used for rejections that carry no
    /// usable message (e.g. "Login failed").
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AuthError::Validation(message) => message.clone(),
            AuthError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            AuthError::Rejected { .. } => fallback.to_string(),
            AuthError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn can_resend(&self) -> bool {
        matches!(self, AuthError::Rejected { can_resend: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_uses_server_message() {
        let err = AuthError::Rejected {
            status: 401,
            message: Some("bad credentials".to_string()),
            can_resend: false,
        };
        assert_eq!(err.user_message("Login failed"), "bad credentials");
        assert!(!err.can_resend());
    }

    #[test]
    fn test_rejection_without_message_falls_back() {
        let missing = AuthError::Rejected {
            status: 500,
            message: None,
            can_resend: false,
        };
        let blank = AuthError::Rejected {
            status: 400,
            message: Some(String::new()),
            can_resend: false,
        };
        assert_eq!(missing.user_message("Login failed"), "Login failed");
        assert_eq!(blank.user_message("Registration failed"), "Registration failed");
    }

    #[test]
    fn test_network_message_is_fixed() {
        let err = AuthError::Network("connection refused".to_string());
        assert_eq!(err.user_message("Login failed"), "Network error. Please try again.");
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_validation_message_is_shown() {
        let err = AuthError::Validation("Email is required".to_string());
        assert_eq!(err.user_message("Login failed"), "Email is required");
    }
}
