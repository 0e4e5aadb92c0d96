use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UserRole {
    Patient,
    Practitioner,
    Admin,
}

impl FromStr for UserRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "patient" => Ok(UserRole::Patient),
            "practitioner" => Ok(UserRole::Practitioner),
            "admin" => Ok(UserRole::Admin),
            other => Err(CoreError::UnknownRole(other.to_string())),
        }
    }
}

/// An account. Identity is established by the OAuth provider; the rest of
/// the system treats `id` as an opaque handle.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: Uuid,
    /// Subject identifier from the OAuth provider, used to match returning
    /// users across sign-ins.
    pub google_sub: String,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub avatar: Option<String>,
    pub role: UserRole,
    pub is_email_verified: bool,
    pub is_active: bool,
    pub created_at: jiff::Timestamp,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub last_login_at: Option<jiff::Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("PATIENT".parse::<UserRole>().unwrap(), UserRole::Patient);
        assert_eq!(
            "practitioner".parse::<UserRole>().unwrap(),
            UserRole::Practitioner
        );
        assert!("therapist".parse::<UserRole>().is_err());
    }
}
