//! Form state shared by the login and registration screens.
//!
//! [`FormState<T>`] holds the editable field shape `T` plus the inline
//! error/notice text and the in-flight flag. A submission goes through three
//! steps:
//!
//! 1. [`begin`](FormState::begin) validates the fields into a request body and
//!    marks the form as submitting. It refuses while a request is in flight,
//!    which is what disables the submit button.
//! 2. The caller sends the request.
//! 3. [`fail`](FormState::fail) or [`succeed`](FormState::succeed) closes the
//!    submission.

use api::{AuthError, LoginRequest, RegisterRequest};

use crate::error::ShellError;

/// A field shape that can be turned into a request body.
pub trait FormFields: Clone + Default {
    type Request;

    /// Check required fields and normalise values (trimming, empty → absent).
    fn validate(&self) -> Result<Self::Request, AuthError>;
}

fn required(value: &str, label: &str) -> Result<String, AuthError> {
    let value = value.trim();
    if value.is_empty() {
        Err(AuthError::Validation(format!("{label} is required")))
    } else {
        Ok(value.to_string())
    }
}

/// Trimmed and lower-cased; the server stores emails in that form.
pub(crate) fn required_email(value: &str) -> Result<String, AuthError> {
    required(value, "Email").map(|email| email.to_lowercase())
}

fn required_secret(value: &str, label: &str) -> Result<String, AuthError> {
    if value.is_empty() {
        Err(AuthError::Validation(format!("{label} is required")))
    } else {
        Ok(value.to_string())
    }
}

impl FormFields for LoginRequest {
    type Request = LoginRequest;

    fn validate(&self) -> Result<LoginRequest, AuthError> {
        Ok(LoginRequest {
            email: required_email(&self.email)?,
            password: required_secret(&self.password, "Password")?,
        })
    }
}

impl FormFields for RegisterRequest {
    type Request = RegisterRequest;

    fn validate(&self) -> Result<RegisterRequest, AuthError> {
        let phone_number = self
            .phone_number
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
            .map(str::to_string);
        Ok(RegisterRequest {
            first_name: required(&self.first_name, "First name")?,
            last_name: required(&self.last_name, "Last name")?,
            email: required_email(&self.email)?,
            password: required_secret(&self.password, "Password")?,
            phone_number,
        })
    }
}

/// Editable fields plus submission status for one screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState<T> {
    pub fields: T,
    error: Option<String>,
    notice: Option<String>,
    submitting: bool,
    offer_resend: bool,
}

impl<T: FormFields> FormState<T> {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the last rejection offered to resend the verification email.
    pub fn offers_resend(&self) -> bool {
        self.offer_resend
    }

    /// Validate with [`FormFields::validate`] and start a submission.
    pub fn begin(&mut self) -> Result<T::Request, ShellError> {
        self.begin_with(T::validate)
    }

    /// Start a submission whose body is built by `prepare`.
    ///
    /// Clears the previous error and notice. A validation failure is shown
    /// inline and nothing is marked as in flight.
    pub fn begin_with<R>(
        &mut self,
        prepare: impl FnOnce(&T) -> Result<R, AuthError>,
    ) -> Result<R, ShellError> {
        if self.submitting {
            return Err(ShellError::Busy);
        }
        self.error = None;
        self.notice = None;
        self.offer_resend = false;
        match prepare(&self.fields) {
            Ok(request) => {
                self.submitting = true;
                Ok(request)
            }
            Err(err) => {
                self.error = Some(err.user_message(""));
                Err(err.into())
            }
        }
    }

    /// End the submission with an inline error; the fields are kept for retry.
    pub fn fail(&mut self, err: &AuthError, fallback: &str) {
        self.submitting = false;
        self.error = Some(err.user_message(fallback));
        self.offer_resend = err.can_resend();
    }

    /// End the submission successfully, discarding the fields.
    pub fn succeed(&mut self, notice: Option<String>) {
        self.fields = T::default();
        self.submitting = false;
        self.notice = notice;
    }

    /// End the submission with a notice while keeping the fields.
    pub fn acknowledge(&mut self, notice: String) {
        self.submitting = false;
        self.notice = Some(notice);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_validation_requires_fields() {
        let mut form = FormState::<LoginRequest>::default();
        let err = form.begin().unwrap_err();
        assert_eq!(
            err,
            ShellError::Auth(AuthError::Validation("Email is required".to_string()))
        );
        assert_eq!(form.error(), Some("Email is required"));
        assert!(!form.is_submitting());

        form.fields.email = "  a@example.com ".to_string();
        form.begin().unwrap_err();
        assert_eq!(form.error(), Some("Password is required"));
    }

    #[test]
    fn test_login_begin_trims_email_only() {
        let mut form = FormState::<LoginRequest>::default();
        form.fields = LoginRequest::new(" a@example.com ", " pass word ");
        let request = form.begin().unwrap();
        assert_eq!(request.email, "a@example.com");
        assert_eq!(request.password, " pass word ");
        assert!(form.is_submitting());
    }

    #[test]
    fn test_begin_lower_cases_email() {
        let mut form = FormState::<LoginRequest>::default();
        form.fields = LoginRequest::new(" A@Example.COM ", "secret123");
        assert_eq!(form.begin().unwrap().email, "a@example.com");

        let mut form = FormState::<RegisterRequest>::default();
        form.fields = RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "Ada@Example.com".to_string(),
            password: "secret123".to_string(),
            phone_number: None,
        };
        assert_eq!(form.begin().unwrap().email, "ada@example.com");
    }

    #[test]
    fn test_second_begin_while_submitting_is_busy() {
        let mut form = FormState::<LoginRequest>::default();
        form.fields = LoginRequest::new("a@example.com", "secret123");
        form.begin().unwrap();
        assert_eq!(form.begin().unwrap_err(), ShellError::Busy);
    }

    #[test]
    fn test_register_normalises_phone() {
        let mut form = FormState::<RegisterRequest>::default();
        form.fields = RegisterRequest {
            first_name: " Ada ".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret123".to_string(),
            phone_number: Some("   ".to_string()),
        };
        let request = form.begin().unwrap();
        assert_eq!(request.first_name, "Ada");
        assert_eq!(request.phone_number, None);

        form.fail(&AuthError::Network("offline".to_string()), "Registration failed");
        form.fields.phone_number = Some(" 555-0100 ".to_string());
        assert_eq!(form.begin().unwrap().phone_number.as_deref(), Some("555-0100"));
    }

    #[test]
    fn test_register_requires_last_name() {
        let mut form = FormState::<RegisterRequest>::default();
        form.fields.first_name = "Ada".to_string();
        form.begin().unwrap_err();
        assert_eq!(form.error(), Some("Last name is required"));
    }

    #[test]
    fn test_fail_keeps_fields_and_records_resend_offer() {
        let mut form = FormState::<LoginRequest>::default();
        form.fields = LoginRequest::new("a@example.com", "secret123");
        form.begin().unwrap();
        form.fail(
            &AuthError::Rejected {
                status: 403,
                message: Some("Please verify your email address before logging in".to_string()),
                can_resend: true,
            },
            "Login failed",
        );
        assert!(!form.is_submitting());
        assert!(form.offers_resend());
        assert_eq!(form.fields.email, "a@example.com");
        assert_eq!(
            form.error(),
            Some("Please verify your email address before logging in")
        );

        // The next attempt clears the previous outcome.
        form.begin().unwrap();
        assert_eq!(form.error(), None);
        assert!(!form.offers_resend());
    }

    #[test]
    fn test_succeed_discards_fields() {
        let mut form = FormState::<LoginRequest>::default();
        form.fields = LoginRequest::new("a@example.com", "secret123");
        form.begin().unwrap();
        form.succeed(Some("done".to_string()));
        assert_eq!(form.fields, LoginRequest::default());
        assert_eq!(form.notice(), Some("done"));
        assert!(!form.is_submitting());
    }
}
