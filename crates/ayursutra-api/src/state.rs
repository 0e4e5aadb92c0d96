use std::sync::Arc;

use ayursutra_ai::GenAiClient;
use ayursutra_auth::jwt::JwtKeys;
use ayursutra_auth::oauth::GoogleOAuth;
use ayursutra_storage::Store;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub jwt: Arc<JwtKeys>,
    pub ai: GenAiClient,
    /// `None` when Google credentials are not configured; the sign-in
    /// routes answer accordingly.
    pub oauth: Option<GoogleOAuth>,
    /// Shared client for the OAuth token/userinfo calls.
    pub http: reqwest::Client,
    pub frontend_url: String,
}
