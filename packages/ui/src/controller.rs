//! # Session/View controller
//!
//! [`SessionController`] is the single source of truth for "who is signed in"
//! and "which screen is showing". The Dioxus layer keeps one in a `Signal` and
//! renders from it; tests drive it directly with a stub [`AuthApi`] and a
//! [`MemoryStore`](store::MemoryStore).
//!
//! ## Screen transitions
//!
//! ```text
//!            restore_session()
//!  Loading ──────────────┬──────────────▶ Dashboard
//!                        │ (no/bad record)   ▲     │
//!                        ▼                   │     │ logout()
//!                      Login ────────────────┘     │
//!                      ▲   │   login() success     │
//!        show_login()  │   │ show_register()       │
//!                      │   ▼                       │
//!                     Register        Login ◀──────┘
//! ```
//!
//! - `Loading` is left exactly once; nothing returns to it.
//! - `Register` never reaches `Dashboard`: a successful registration only
//!   shows a confirmation notice.
//! - The network never changes `Login ↔ Register`; only `show_*` do.
//!
//! ## Submissions
//!
//! `login`/`register` are split into `begin_*` (validate, mark in flight) and
//! `complete_*` (apply the outcome) so that UI code can await the request
//! without holding a borrow on the controller. The `async` wrappers compose
//! the two for callers that own the controller outright.
//!
//! The session and its durable copy are only written after a response has
//! been fully parsed, so a failure never leaves either half-updated.

use api::{AuthApi, AuthError, LoginRequest, RegisterRequest, ResendRequest, UserProfile};
use store::{KeyValueStore, SessionStore};

use crate::error::ShellError;
use crate::form::{required_email, FormState};
use crate::view::{Screen, Tab, ViewState};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const RESEND_FAILED: &str = "Could not resend the verification email";
pub const REGISTRATION_SUCCEEDED: &str =
    "Registration successful! Please check your email to verify your account.";
pub const VERIFICATION_SENT: &str = "Verification email sent.";

/// Owns the session, the view state and the two auth forms.
#[derive(Debug)]
pub struct SessionController<S: KeyValueStore> {
    store: SessionStore<S>,
    user: Option<UserProfile>,
    view: ViewState,
    login: FormState<LoginRequest>,
    register: FormState<RegisterRequest>,
    restored: bool,
}

impl<S: KeyValueStore> SessionController<S> {
    /// Start on [`Screen::Loading`]; call [`restore_session`](Self::restore_session) next.
    pub fn new(store: SessionStore<S>) -> Self {
        Self {
            store,
            user: None,
            view: ViewState::default(),
            login: FormState::default(),
            register: FormState::default(),
            restored: false,
        }
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn screen(&self) -> Screen {
        self.view.screen
    }

    pub fn store(&self) -> &SessionStore<S> {
        &self.store
    }

    pub fn login_form(&self) -> &FormState<LoginRequest> {
        &self.login
    }

    pub fn login_form_mut(&mut self) -> &mut FormState<LoginRequest> {
        &mut self.login
    }

    pub fn register_form(&self) -> &FormState<RegisterRequest> {
        &self.register
    }

    pub fn register_form_mut(&mut self) -> &mut FormState<RegisterRequest> {
        &mut self.register
    }

    /// Read the persisted profile and leave [`Screen::Loading`].
    ///
    /// Only the first call has an effect; it never touches the network. An
    /// absent or unreadable record lands on [`Screen::Login`].
    pub fn restore_session(&mut self) -> Screen {
        if self.restored {
            tracing::debug!(screen = %self.view.screen, "session already restored");
            return self.view.screen;
        }
        self.restored = true;

        match self.store.load::<UserProfile>() {
            Ok(Some(user)) => {
                tracing::info!(user_id = user.id, "restored persisted session");
                self.enter_dashboard(user);
            }
            Ok(None) => {
                tracing::debug!("no persisted session");
                self.view = ViewState::on(Screen::Login);
            }
            Err(e) => {
                tracing::warn!("ignoring persisted session: {}", e);
                self.view = ViewState::on(Screen::Login);
            }
        }
        self.view.screen
    }

    /// Switch from Login to Register, discarding the login form.
    pub fn show_register(&mut self) -> Result<(), ShellError> {
        match self.view.screen {
            Screen::Register => Ok(()),
            Screen::Login if self.login.is_submitting() => Err(ShellError::Busy),
            Screen::Login => {
                self.login.reset();
                self.view = ViewState::on(Screen::Register);
                Ok(())
            }
            screen => Err(ShellError::WrongScreen {
                action: "open registration",
                screen,
            }),
        }
    }

    /// Switch from Register back to Login, discarding the registration form.
    pub fn show_login(&mut self) -> Result<(), ShellError> {
        match self.view.screen {
            Screen::Login => Ok(()),
            Screen::Register if self.register.is_submitting() => Err(ShellError::Busy),
            Screen::Register => {
                self.register.reset();
                self.view = ViewState::on(Screen::Login);
                Ok(())
            }
            screen => Err(ShellError::WrongScreen {
                action: "open sign-in",
                screen,
            }),
        }
    }

    /// Validate the login form and mark it as submitting.
    pub fn begin_login(&mut self) -> Result<LoginRequest, ShellError> {
        self.require(Screen::Login, "sign in")?;
        self.login.begin()
    }

    /// Apply the outcome of a login request started with [`begin_login`](Self::begin_login).
    pub fn complete_login(
        &mut self,
        outcome: Result<UserProfile, AuthError>,
    ) -> Result<(), ShellError> {
        self.require(Screen::Login, "complete sign-in")?;
        match outcome {
            Ok(user) => {
                if let Err(e) = self.store.save(&user) {
                    tracing::warn!(user_id = user.id, "failed to persist session: {}", e);
                }
                tracing::info!(user_id = user.id, "signed in");
                self.login.reset();
                self.enter_dashboard(user);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("login failed: {}", e);
                self.login.fail(&e, LOGIN_FAILED);
                Err(e.into())
            }
        }
    }

    /// Fill the login form with `credentials` and submit it.
    pub async fn login<A: AuthApi>(
        &mut self,
        api: &A,
        credentials: LoginRequest,
    ) -> Result<(), ShellError> {
        self.require(Screen::Login, "sign in")?;
        if self.login.is_submitting() {
            return Err(ShellError::Busy);
        }
        self.login.fields = credentials;
        self.submit_login(api).await
    }

    /// Submit whatever is currently in the login form.
    pub async fn submit_login<A: AuthApi>(&mut self, api: &A) -> Result<(), ShellError> {
        let request = self.begin_login()?;
        let outcome = api.login(&request).await;
        self.complete_login(outcome)
    }

    /// Validate the registration form and mark it as submitting.
    pub fn begin_register(&mut self) -> Result<RegisterRequest, ShellError> {
        self.require(Screen::Register, "register")?;
        self.register.begin()
    }

    /// Apply the outcome of a registration request. Success shows a
    /// confirmation but neither signs in nor persists anything.
    pub fn complete_register(&mut self, outcome: Result<(), AuthError>) -> Result<(), ShellError> {
        self.require(Screen::Register, "complete registration")?;
        match outcome {
            Ok(()) => {
                tracing::info!("registration accepted");
                self.register
                    .succeed(Some(REGISTRATION_SUCCEEDED.to_string()));
                Ok(())
            }
            Err(e) => {
                tracing::warn!("registration failed: {}", e);
                self.register.fail(&e, REGISTRATION_FAILED);
                Err(e.into())
            }
        }
    }

    /// Fill the registration form with `profile` and submit it.
    pub async fn register<A: AuthApi>(
        &mut self,
        api: &A,
        profile: RegisterRequest,
    ) -> Result<(), ShellError> {
        self.require(Screen::Register, "register")?;
        if self.register.is_submitting() {
            return Err(ShellError::Busy);
        }
        self.register.fields = profile;
        self.submit_register(api).await
    }

    /// Submit whatever is currently in the registration form.
    pub async fn submit_register<A: AuthApi>(&mut self, api: &A) -> Result<(), ShellError> {
        let request = self.begin_register()?;
        let outcome = api.register(&request).await;
        self.complete_register(outcome)
    }

    /// Build a resend-verification request from the email in the login form.
    pub fn begin_resend(&mut self) -> Result<ResendRequest, ShellError> {
        self.require(Screen::Login, "resend verification")?;
        self.login.begin_with(|fields| {
            Ok(ResendRequest {
                email: required_email(&fields.email)?,
            })
        })
    }

    /// Apply the outcome of a resend request. The session is never touched.
    pub fn complete_resend(
        &mut self,
        outcome: Result<Option<String>, AuthError>,
    ) -> Result<(), ShellError> {
        self.require(Screen::Login, "complete resend")?;
        match outcome {
            Ok(message) => {
                let notice = message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| VERIFICATION_SENT.to_string());
                self.login.acknowledge(notice);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("resend verification failed: {}", e);
                self.login.fail(&e, RESEND_FAILED);
                Err(e.into())
            }
        }
    }

    pub async fn resend_verification<A: AuthApi>(&mut self, api: &A) -> Result<(), ShellError> {
        let request = self.begin_resend()?;
        let outcome = api.resend_verification(&request).await;
        self.complete_resend(outcome)
    }

    /// Drop the session and its persisted copy and return to Login.
    pub fn logout(&mut self) -> Result<(), ShellError> {
        self.require(Screen::Dashboard, "sign out")?;
        if let Err(e) = self.store.clear() {
            tracing::warn!("failed to clear persisted session: {}", e);
        }
        if let Some(user) = self.user.take() {
            tracing::info!(user_id = user.id, "signed out");
        }
        self.login.reset();
        self.register.reset();
        self.view = ViewState::on(Screen::Login);
        Ok(())
    }

    /// Show `tab` and close the mobile sidebar. Dashboard only.
    pub fn select_tab(&mut self, tab: Tab) -> Result<(), ShellError> {
        self.require(Screen::Dashboard, "select a tab")?;
        self.view.active_tab = tab;
        self.view.sidebar_open = false;
        Ok(())
    }

    /// Flip the mobile sidebar; returns the new state.
    pub fn toggle_sidebar(&mut self) -> bool {
        self.view.sidebar_open = !self.view.sidebar_open;
        self.view.sidebar_open
    }

    fn enter_dashboard(&mut self, user: UserProfile) {
        self.user = Some(user);
        self.view = ViewState::on(Screen::Dashboard);
    }

    fn require(&self, screen: Screen, action: &'static str) -> Result<(), ShellError> {
        if self.view.screen == screen {
            Ok(())
        } else {
            Err(ShellError::WrongScreen {
                action,
                screen: self.view.screen,
            })
        }
    }
}
