//! Record key/path conventions.
//!
//! Pure string functions — no filesystem dependency. These define the
//! canonical layout of JSON records in the AyurSutra data store.

use uuid::Uuid;

pub fn user(id: Uuid) -> String {
    format!("users/{id}.json")
}

pub const USERS_PREFIX: &str = "users/";

/// Assessment records are grouped per owner so a user's history is a
/// single prefix listing.
pub fn assessment(user_id: Uuid, id: Uuid) -> String {
    format!("assessments/{user_id}/{id}.json")
}

pub fn assessments_prefix(user_id: Uuid) -> String {
    format!("assessments/{user_id}/")
}

pub const ASSESSMENTS_PREFIX: &str = "assessments/";
