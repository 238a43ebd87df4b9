//! # HTTP client for the auth API
//!
//! [`HttpAuthClient`] implements [`AuthApi`] with `reqwest`, which runs both
//! natively and in the browser (`fetch` under `wasm32`). Each call is a single
//! JSON `POST`; there are no retries and no client-side timeout beyond what
//! the transport applies.
//!
//! Response interpretation is kept in plain functions
//! ([`parse_login_response`], [`parse_register_response`],
//! [`parse_resend_response`]) that take the status code and body text, so the
//! rules below are testable without a server:
//!
//! | Status | Body | Result |
//! |--------|------|--------|
//! | 2xx | login: `{"user": {...}}` | `Ok(UserProfile)` |
//! | 2xx | login: anything else | `Err(Network)` |
//! | 2xx | register | `Ok(())`, body ignored |
//! | 2xx | resend: `{"message"?}` | `Ok(message)` |
//! | non-2xx | `{"message"?, "can_resend"?}` | `Err(Rejected)` |
//! | non-2xx | not JSON | `Err(Rejected)` with no message |

use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::models::{LoginRequest, RegisterRequest, ResendRequest, UserProfile};
use crate::AuthApi;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const RESEND_VERIFICATION_PATH: &str = "/api/auth/resend-verification";

/// `reqwest`-backed [`AuthApi`]. Cheap to clone; clones share a connection pool.
#[derive(Clone, Debug)]
pub struct HttpAuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthClient {
    /// `base_url` is the server origin, e.g. `"https://track.example"`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send `body` as JSON and return the status code with the raw body text.
    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(u16, String), AuthError> {
        let response = self
            .http
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        tracing::debug!(path, status, "auth API responded");
        Ok((status, text))
    }
}

impl AuthApi for HttpAuthClient {
    async fn login(&self, request: &LoginRequest) -> Result<UserProfile, AuthError> {
        let (status, body) = self.post_json(LOGIN_PATH, request).await?;
        parse_login_response(status, &body)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), AuthError> {
        let (status, body) = self.post_json(REGISTER_PATH, request).await?;
        parse_register_response(status, &body)
    }

    async fn resend_verification(&self, request: &ResendRequest) -> Result<Option<String>, AuthError> {
        let (status, body) = self.post_json(RESEND_VERIFICATION_PATH, request).await?;
        parse_resend_response(status, &body)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    can_resend: bool,
}

#[derive(Debug, Deserialize)]
struct LoginBody {
    user: UserProfile,
}

#[derive(Debug, Default, Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
}

fn rejection(status: u16, body: &str) -> AuthError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    AuthError::Rejected {
        status,
        message: parsed.message,
        can_resend: parsed.can_resend,
    }
}

/// Interpret a `/api/auth/login` response.
pub fn parse_login_response(status: u16, body: &str) -> Result<UserProfile, AuthError> {
    if !is_success(status) {
        return Err(rejection(status, body));
    }
    serde_json::from_str::<LoginBody>(body)
        .map(|parsed| parsed.user)
        .map_err(|e| AuthError::Network(format!("unreadable login response: {e}")))
}

/// Interpret a `/api/auth/register` response. The success body is ignored.
pub fn parse_register_response(status: u16, body: &str) -> Result<(), AuthError> {
    if is_success(status) {
        Ok(())
    } else {
        Err(rejection(status, body))
    }
}

/// Interpret a `/api/auth/resend-verification` response.
pub fn parse_resend_response(status: u16, body: &str) -> Result<Option<String>, AuthError> {
    if !is_success(status) {
        return Err(rejection(status, body));
    }
    let parsed: MessageBody = serde_json::from_str(body).unwrap_or_default();
    Ok(parsed.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_success_returns_user() {
        let body = r#"{"message":"Login successful","user":{"id":1,"first_name":"A","last_name":"B","email":"a@example.com"},"token":"t"}"#;
        let user = parse_login_response(200, body).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.first_name, "A");
    }

    #[test]
    fn test_login_success_without_user_is_network_error() {
        let err = parse_login_response(200, r#"{"message":"ok"}"#).unwrap_err();
        assert!(matches!(err, AuthError::Network(_)));

        let err = parse_login_response(204, "").unwrap_err();
        assert!(matches!(err, AuthError::Network(_)));
    }

    #[test]
    fn test_login_rejection_carries_message() {
        let err = parse_login_response(401, r#"{"message":"bad credentials"}"#).unwrap_err();
        assert_eq!(
            err,
            AuthError::Rejected {
                status: 401,
                message: Some("bad credentials".to_string()),
                can_resend: false,
            }
        );
    }

    #[test]
    fn test_unverified_login_offers_resend() {
        let body = r#"{"message":"Please verify your email address before logging in","email_verified":false,"can_resend":true}"#;
        let err = parse_login_response(403, body).unwrap_err();
        assert!(err.can_resend());
    }

    #[test]
    fn test_rejection_with_html_body_has_no_message() {
        let err = parse_register_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.user_message("Registration failed"), "Registration failed");
    }

    #[test]
    fn test_register_success_ignores_body() {
        assert!(parse_register_response(201, "not json at all").is_ok());
        assert!(parse_register_response(200, "").is_ok());
    }

    #[test]
    fn test_register_conflict() {
        let err = parse_register_response(409, r#"{"message":"User with this email already exists"}"#)
            .unwrap_err();
        assert_eq!(err.user_message("Registration failed"), "User with this email already exists");
    }

    #[test]
    fn test_resend_response() {
        assert_eq!(
            parse_resend_response(200, r#"{"message":"Verification email sent successfully"}"#).unwrap(),
            Some("Verification email sent successfully".to_string())
        );
        assert_eq!(parse_resend_response(200, "").unwrap(), None);
        assert!(parse_resend_response(404, r#"{"message":"User not found"}"#).is_err());
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = HttpAuthClient::new("https://track.example/");
        assert_eq!(client.base_url(), "https://track.example");
        assert_eq!(client.endpoint(LOGIN_PATH), "https://track.example/api/auth/login");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let client = HttpAuthClient::new("http://127.0.0.1:1");
        let err = client
            .login(&LoginRequest::new("a@example.com", "secret123"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Network(_)));
        assert_eq!(err.user_message("Login failed"), "Network error. Please try again.");
    }
}
