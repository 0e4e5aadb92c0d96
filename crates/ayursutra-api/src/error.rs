use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    BadGateway(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::BadGateway(msg) => {
                tracing::warn!("upstream failure: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream service failed".to_string(),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ayursutra_storage::StorageError> for ApiError {
    fn from(e: ayursutra_storage::StorageError) -> Self {
        match e {
            ayursutra_storage::StorageError::NotFound { key } => {
                ApiError::NotFound(format!("record not found: {key}"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ayursutra_auth::AuthError> for ApiError {
    fn from(e: ayursutra_auth::AuthError) -> Self {
        use ayursutra_auth::AuthError;
        match e {
            AuthError::TokenExpired => {
                ApiError::Unauthorized("your session has expired, please sign in again".to_string())
            }
            AuthError::InvalidToken(_) | AuthError::Jwt(_) | AuthError::AuthFailed(_) => {
                ApiError::Unauthorized("invalid authentication token".to_string())
            }
            AuthError::OAuth(msg) => ApiError::BadGateway(msg),
            AuthError::Http(e) => ApiError::BadGateway(e.to_string()),
        }
    }
}

impl From<ayursutra_ai::AiError> for ApiError {
    fn from(e: ayursutra_ai::AiError) -> Self {
        use ayursutra_ai::AiError;
        match e {
            AiError::MissingApiKey => ApiError::Internal("GEMINI_API_KEY not configured".to_string()),
            other => ApiError::BadGateway(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
