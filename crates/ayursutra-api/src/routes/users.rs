use axum::extract::State;
use axum::{Extension, Json};
use serde::Deserialize;

use ayursutra_core::models::user::User;
use ayursutra_core::store_keys;
use ayursutra_storage::records;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<User>, ApiError> {
    let user: User = records::load_record(&state.store, &store_keys::user(auth.id)).await?;
    Ok(Json(user))
}

#[derive(Deserialize)]
pub struct UpdateProfile {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Update own profile fields. Absent fields are left untouched.
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(update): Json<UpdateProfile>,
) -> Result<Json<User>, ApiError> {
    let key = store_keys::user(auth.id);
    let mut user: User = records::load_record(&state.store, &key).await?;

    if let Some(full_name) = update.full_name {
        if full_name.trim().is_empty() {
            return Err(ApiError::BadRequest("full_name must not be empty".to_string()));
        }
        user.full_name = full_name;
    }
    if let Some(phone_number) = update.phone_number {
        user.phone_number = Some(phone_number);
    }
    if let Some(avatar) = update.avatar {
        user.avatar = Some(avatar);
    }

    records::save_record(&state.store, &key, &user).await?;
    Ok(Json(user))
}
