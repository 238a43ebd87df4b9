//! # API crate: client side of the Live Location Tracker auth API
//!
//! This crate owns everything that crosses the wire between the client shell
//! and the server's authentication endpoints.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Request bodies (`LoginRequest`, `RegisterRequest`, `ResendRequest`) and the `UserProfile` returned on login |
//! | [`error`] | [`AuthError`], the three-way failure taxonomy and its user-facing messages |
//! | [`client`] | [`HttpAuthClient`], the `reqwest` implementation of [`AuthApi`] |
//!
//! ## Endpoints
//!
//! - `POST /api/auth/login` with `{email, password}` → `{user}`
//! - `POST /api/auth/register` with `{first_name, last_name, email, password, phone_number?}`
//! - `POST /api/auth/resend-verification` with `{email}` → `{message?}`
//!
//! The session controller only sees the [`AuthApi`] trait, so tests swap in a
//! stub without any HTTP.

use std::future::Future;

pub mod client;
pub mod error;
pub mod models;

pub use client::HttpAuthClient;
pub use error::{AuthError, NETWORK_ERROR_MESSAGE};
pub use models::{LoginRequest, RegisterRequest, ResendRequest, UserProfile};

/// Async interface to the server's authentication endpoints.
pub trait AuthApi {
    /// Exchange credentials for the signed-in user's profile.
    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<UserProfile, AuthError>>;

    /// Create an account. Success does not sign the user in.
    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<(), AuthError>>;

    /// Ask the server to send the verification email again. Returns the
    /// server's confirmation text, if it sent one.
    fn resend_verification(
        &self,
        request: &ResendRequest,
    ) -> impl Future<Output = Result<Option<String>, AuthError>>;
}
