use axum::extract::{Query, State};
use axum::response::Redirect;
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use ayursutra_auth::jwt::TokenPair;
use ayursutra_auth::oauth::GoogleProfile;
use ayursutra_core::models::user::{User, UserRole};
use ayursutra_core::store_keys;
use ayursutra_storage::records;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginQuery {
    /// Opaque state round-tripped through the provider; carries the
    /// requested account role for first-time sign-ups.
    #[serde(default)]
    pub state: Option<String>,
}

/// Entry point of the OAuth flow: redirect the browser to the consent
/// screen.
pub async fn google_login(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
) -> Result<Redirect, ApiError> {
    let oauth = state
        .oauth
        .as_ref()
        .ok_or_else(|| ApiError::Internal("google oauth is not configured".to_string()))?;

    Ok(Redirect::to(&oauth.authorize_url(query.state.as_deref())))
}

#[derive(Deserialize)]
pub struct CallbackQuery {
    pub code: String,
    #[serde(default)]
    pub state: Option<String>,
}

/// OAuth callback: exchange the code, find or create the account, mint a
/// token pair, and bounce back to the frontend with it.
pub async fn google_callback(
    State(state): State<AppState>,
    Query(query): Query<CallbackQuery>,
) -> Result<Redirect, ApiError> {
    let oauth = state
        .oauth
        .as_ref()
        .ok_or_else(|| ApiError::Internal("google oauth is not configured".to_string()))?;

    let tokens = oauth.exchange_code(&state.http, &query.code).await?;
    let profile = oauth.fetch_profile(&state.http, &tokens.access_token).await?;

    let requested_role = query
        .state
        .as_deref()
        .and_then(|s| s.parse::<UserRole>().ok())
        .unwrap_or(UserRole::Patient);

    let mut user = find_or_create_user(&state, &profile, requested_role).await?;

    if !user.is_active {
        return Err(ApiError::Unauthorized(
            "your account has been deactivated".to_string(),
        ));
    }

    user.last_login_at = Some(jiff::Timestamp::now());
    records::save_record(&state.store, &store_keys::user(user.id), &user).await?;

    let pair = state.jwt.issue_pair(&user)?;

    Ok(Redirect::to(&format!(
        "{}/auth/google/success?token={}&refresh={}",
        state.frontend_url, pair.access_token, pair.refresh_token
    )))
}

/// Match a returning user by provider subject, fall back to linking by
/// email, and create a fresh account otherwise.
async fn find_or_create_user(
    state: &AppState,
    profile: &GoogleProfile,
    requested_role: UserRole,
) -> Result<User, ApiError> {
    let users: Vec<User> = records::load_all(&state.store, store_keys::USERS_PREFIX).await?;

    if let Some(user) = users.iter().find(|u| u.google_sub == profile.sub) {
        return Ok(user.clone());
    }

    if let Some(user) = users.iter().find(|u| u.email == profile.email) {
        // Same address signed up before this provider sub was seen; link it.
        let mut linked = user.clone();
        linked.google_sub = profile.sub.clone();
        return Ok(linked);
    }

    let user = User {
        id: Uuid::new_v4(),
        google_sub: profile.sub.clone(),
        full_name: profile
            .name
            .clone()
            .unwrap_or_else(|| profile.email.clone()),
        email: profile.email.clone(),
        phone_number: None,
        avatar: profile.picture.clone(),
        role: requested_role,
        is_email_verified: profile.email_verified.unwrap_or(false),
        is_active: true,
        created_at: jiff::Timestamp::now(),
        last_login_at: None,
    };

    tracing::info!(user_id = %user.id, role = ?user.role, "new account created");
    Ok(user)
}

#[derive(Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Mint a fresh token pair from a valid refresh token.
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<TokenPair>, ApiError> {
    let claims = state.jwt.validate_refresh(&req.refresh_token)?;

    let user: User = records::load_record(&state.store, &store_keys::user(claims.sub))
        .await
        .map_err(|_| ApiError::Unauthorized("user not found".to_string()))?;

    if !user.is_active {
        return Err(ApiError::Unauthorized(
            "your account has been deactivated".to_string(),
        ));
    }

    let pair = state.jwt.issue_pair(&user)?;
    Ok(Json(pair))
}

/// The authenticated user's account.
pub async fn me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<User>, ApiError> {
    let user: User = records::load_record(&state.store, &store_keys::user(auth.id)).await?;
    Ok(Json(user))
}
