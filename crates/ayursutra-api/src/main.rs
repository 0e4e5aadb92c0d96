use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use ayursutra_ai::GenAiClient;
use ayursutra_auth::jwt::JwtKeys;
use ayursutra_auth::oauth::GoogleOAuth;
use ayursutra_storage::Store;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(6969);
    let data_dir = env::var("AYURSUTRA_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let frontend_url =
        env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());

    let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| "dev-access-secret".to_string());
    let jwt_refresh_secret =
        env::var("JWT_REFRESH_SECRET").unwrap_or_else(|_| "dev-refresh-secret".to_string());

    // Absent OAuth credentials leave sign-in disabled rather than failing
    // startup; absent GEMINI_API_KEY leaves the AI endpoints on fallback
    // content.
    let oauth = match (
        env::var("GOOGLE_CLIENT_ID"),
        env::var("GOOGLE_CLIENT_SECRET"),
    ) {
        (Ok(client_id), Ok(client_secret)) => Some(GoogleOAuth {
            client_id,
            client_secret,
            redirect_uri: env::var("GOOGLE_CALLBACK_URL").unwrap_or_else(|_| {
                format!("http://localhost:{port}/api/v1/auth/google/callback")
            }),
        }),
        _ => {
            tracing::warn!("google oauth credentials not configured, sign-in disabled");
            None
        }
    };

    let store = Store::open(&data_dir).await?;
    let ai = GenAiClient::new(env::var("GEMINI_API_KEY").ok());
    if !ai.is_configured() {
        tracing::warn!("GEMINI_API_KEY not configured, AI endpoints will serve fallback content");
    }

    let state = AppState {
        store,
        jwt: Arc::new(JwtKeys::new(&jwt_secret, &jwt_refresh_secret)),
        ai,
        oauth,
        http: reqwest::Client::new(),
        frontend_url: frontend_url.trim_end_matches('/').to_string(),
    };

    let cors = match state.frontend_url.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let public = Router::new()
        .route("/health", get(routes::health::health_check))
        // Questionnaire schema is public data, like the score preview the
        // flow polls while answering.
        .route(
            "/api/v1/questionnaire",
            get(routes::questionnaire::list_questions),
        )
        .route(
            "/api/v1/assessment/score",
            post(routes::assessment::score_preview),
        )
        .route("/api/v1/auth/google", get(routes::auth::google_login))
        .route(
            "/api/v1/auth/google/callback",
            get(routes::auth::google_callback),
        )
        .route(
            "/api/v1/auth/refresh-token",
            post(routes::auth::refresh_token),
        );

    let protected = Router::new()
        .route("/api/v1/auth/me", get(routes::auth::me))
        .route(
            "/api/v1/assessment",
            post(routes::assessment::create_assessment),
        )
        .route(
            "/api/v1/assessment/history",
            get(routes::assessment::history),
        )
        .route("/api/v1/assessment/latest", get(routes::assessment::latest))
        .route("/api/v1/ai/suggestions", post(routes::ai::suggestions))
        .route("/api/v1/ai/plan", post(routes::ai::plan))
        .route("/api/v1/ai/chat", post(routes::ai::chat))
        .route(
            "/api/v1/users/profile",
            get(routes::users::get_profile).put(routes::users::update_profile),
        )
        .route("/api/v1/dashboard/patient", get(routes::dashboard::patient))
        .route(
            "/api/v1/dashboard/practitioner",
            get(routes::dashboard::practitioner),
        )
        .route("/api/v1/dashboard/admin", get(routes::dashboard::admin))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    let app = public
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::log::request_log))
        .layer(cors)
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "ayursutra api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
