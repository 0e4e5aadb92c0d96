use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use ayursutra_ai::chat::{ChatMessage, chat_reply, last_user_content};
use ayursutra_ai::fallback;
use ayursutra_ai::plan::{PlanInsight, TreatmentPlan, generate_plan};
use ayursutra_ai::tips::suggest_tips;
use ayursutra_core::models::answers::AssessmentAnswers;
use ayursutra_core::models::dosha::{Dosha, DoshaScore};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Whether a response was produced by the model or by canned content. A
/// failed upstream call is never passed off as model output.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSource {
    Model,
    Fallback,
}

#[derive(Deserialize)]
pub struct SuggestionsRequest {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub persona: Option<String>,
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub tips: Vec<String>,
    pub source: TextSource,
}

pub async fn suggestions(
    State(state): State<AppState>,
    Extension(_auth): Extension<AuthUser>,
    Json(req): Json<SuggestionsRequest>,
) -> Json<SuggestionsResponse> {
    let topic = req
        .topic
        .unwrap_or_else(|| "ayurveda daily suggestions".to_string());
    let persona = req.persona.unwrap_or_else(|| "patient".to_string());

    match suggest_tips(&state.ai, &persona, &topic).await {
        Ok(tips) => Json(SuggestionsResponse {
            tips,
            source: TextSource::Model,
        }),
        Err(e) => {
            warn!(error = %e, "tip generation failed, serving fallback");
            Json(SuggestionsResponse {
                tips: fallback::tips(&persona)
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                source: TextSource::Fallback,
            })
        }
    }
}

#[derive(Deserialize)]
pub struct PlanRequest {
    #[serde(default)]
    pub scores: Option<DoshaScore>,
    #[serde(default)]
    pub dominant: Option<Dosha>,
    #[serde(default)]
    pub insights: Vec<PlanInsight>,
    #[serde(default)]
    pub answers: AssessmentAnswers,
}

/// Generate a treatment plan. There is no canned plan; an upstream
/// failure surfaces as an error rather than fabricated advice.
pub async fn plan(
    State(state): State<AppState>,
    Extension(_auth): Extension<AuthUser>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<TreatmentPlan>, ApiError> {
    let scores = req.scores.unwrap_or(DoshaScore {
        vata: 0.0,
        pitta: 0.0,
        kapha: 0.0,
    });

    let plan = generate_plan(&state.ai, &scores, req.dominant, &req.insights, &req.answers).await?;
    Ok(Json(plan))
}

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub context: serde_json::Value,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub source: TextSource,
}

pub async fn chat(
    State(state): State<AppState>,
    Extension(_auth): Extension<AuthUser>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    match chat_reply(&state.ai, &req.messages, &req.context).await {
        Ok(reply) => Json(ChatResponse {
            reply,
            source: TextSource::Model,
        }),
        Err(e) => {
            warn!(error = %e, "chat generation failed, serving fallback");
            Json(ChatResponse {
                reply: fallback::chat_reply(last_user_content(&req.messages)).to_string(),
                source: TextSource::Fallback,
            })
        }
    }
}
