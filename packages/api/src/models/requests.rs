use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/login`.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("phone_number", &self.phone_number)
            .finish()
    }
}

/// Body of `POST /api/auth/resend-verification`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResendRequest {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_register_omits_absent_phone() {
        let request = RegisterRequest {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@example.com".to_string(),
            password: "secret123".to_string(),
            phone_number: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "first_name": "A",
                "last_name": "B",
                "email": "a@example.com",
                "password": "secret123"
            })
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let login = format!("{:?}", LoginRequest::new("a@example.com", "hunter2"));
        assert!(login.contains("a@example.com"));
        assert!(!login.contains("hunter2"));

        let register = format!(
            "{:?}",
            RegisterRequest {
                password: "hunter2".to_string(),
                ..Default::default()
            }
        );
        assert!(!register.contains("hunter2"));
    }
}
