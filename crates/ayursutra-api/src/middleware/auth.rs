use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use ayursutra_core::models::user::{User, UserRole};
use ayursutra_core::store_keys;
use ayursutra_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

/// JWT validation middleware.
///
/// Extracts the `Authorization: Bearer <token>` header, validates the
/// access token, loads the user, and rejects deactivated accounts. On
/// success, inserts [`AuthUser`] into request extensions for handlers.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("access token required".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("access token required".to_string()))?;

    let claims = state.jwt.validate_access(token)?;

    let user: User = records::load_record(&state.store, &store_keys::user(claims.sub))
        .await
        .map_err(|_| ApiError::Unauthorized("user not found".to_string()))?;

    if !user.is_active {
        return Err(ApiError::Unauthorized(
            "your account has been deactivated".to_string(),
        ));
    }

    req.extensions_mut().insert(AuthUser {
        id: user.id,
        role: user.role,
    });

    Ok(next.run(req).await)
}

/// Authenticated user extracted from JWT claims, available to handlers as
/// an extension.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: Uuid,
    pub role: UserRole,
}

impl AuthUser {
    /// Gate a handler to specific roles.
    pub fn require_role(&self, roles: &[UserRole]) -> Result<(), ApiError> {
        if roles.contains(&self.role) {
            Ok(())
        } else {
            Err(ApiError::Forbidden(
                "insufficient permissions for this resource".to_string(),
            ))
        }
    }
}
