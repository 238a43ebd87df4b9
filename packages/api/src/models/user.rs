//! # Signed-in user profile
//!
//! [`UserProfile`] is what `POST /api/auth/login` returns under `user` and what
//! the client mirrors into durable storage. Only `id`, `first_name`,
//! `last_name` and `email` are required; `phone_number` is optional.
//!
//! The server sends more than that (`email_verified`, `created_at`,
//! `last_login`, ...). Those fields are not interpreted here but are kept in
//! [`UserProfile::extra`] so that serialising the profile reproduces the
//! object the server sent.
//!
//! `phone_number` is written only when it holds a number. An explicit
//! `"phone_number": null` from the server is kept in `extra` instead, so both
//! an absent key and a null key survive a round trip unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

const PHONE_NUMBER_KEY: &str = "phone_number";

/// User information returned by the auth API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "WireProfile")]
pub struct UserProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Server-side fields this client does not use.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Deserialisation shape that can tell a missing `phone_number` from a null one.
#[derive(Deserialize)]
struct WireProfile {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    #[serde(default, deserialize_with = "present")]
    phone_number: Option<Option<String>>,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

/// Outer `Some` means the key was present, even if its value was null.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl From<WireProfile> for UserProfile {
    fn from(wire: WireProfile) -> Self {
        let mut extra = wire.extra;
        let phone_number = match wire.phone_number {
            Some(Some(phone)) => Some(phone),
            Some(None) => {
                extra.insert(PHONE_NUMBER_KEY.to_string(), Value::Null);
                None
            }
            None => None,
        };
        Self {
            id: wire.id,
            first_name: wire.first_name,
            last_name: wire.last_name,
            email: wire.email,
            phone_number,
            extra,
        }
    }
}

impl UserProfile {
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone_number: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self.extra.remove(PHONE_NUMBER_KEY);
        self
    }

    /// "First Last", or just the first name when the last name is blank.
    pub fn full_name(&self) -> String {
        let last = self.last_name.trim();
        if last.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, last)
        }
    }

    /// Whether the server reported the email as verified, if it said at all.
    pub fn email_verified(&self) -> Option<bool> {
        self.extra.get("email_verified").and_then(Value::as_bool)
    }
}
