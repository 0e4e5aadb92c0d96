use axum::extract::State;
use axum::{Extension, Json};
use serde::Serialize;
use uuid::Uuid;

use ayursutra_core::models::answers::AssessmentAnswers;
use ayursutra_core::models::assessment::AssessmentRecord;
use ayursutra_core::store_keys;
use ayursutra_dosha::analysis::{DoshaAnalysis, analyze};
use ayursutra_storage::records;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Live score preview for any subset of answers. No auth: the flow polls
/// this while the user is still answering.
pub async fn score_preview(Json(answers): Json<AssessmentAnswers>) -> Json<DoshaAnalysis> {
    Json(analyze(&answers))
}

#[derive(Serialize)]
pub struct AssessmentSubmission {
    pub record: AssessmentRecord,
    pub analysis: DoshaAnalysis,
}

/// Score the submitted answers and persist an immutable record for the
/// authenticated user.
pub async fn create_assessment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(answers): Json<AssessmentAnswers>,
) -> Result<Json<AssessmentSubmission>, ApiError> {
    let analysis = analyze(&answers);

    let record = AssessmentRecord {
        id: Uuid::new_v4(),
        user_id: auth.id,
        answers,
        scores: analysis.scores,
        dominant: analysis.dominant,
        balance_status: analysis.balance_status,
        recommendations: analysis.recommendations.clone(),
        created_at: jiff::Timestamp::now(),
    };

    let key = store_keys::assessment(auth.id, record.id);
    records::save_record(&state.store, &key, &record).await?;

    tracing::info!(user_id = %auth.id, record_id = %record.id, "assessment recorded");

    Ok(Json(AssessmentSubmission { record, analysis }))
}

/// The user's assessment history, newest first.
pub async fn history(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Vec<AssessmentRecord>>, ApiError> {
    let mut assessments: Vec<AssessmentRecord> =
        records::load_all(&state.store, &store_keys::assessments_prefix(auth.id)).await?;
    assessments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(assessments))
}

/// The user's most recent assessment, or null if they have none yet.
pub async fn latest(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Option<AssessmentRecord>>, ApiError> {
    let assessments: Vec<AssessmentRecord> =
        records::load_all(&state.store, &store_keys::assessments_prefix(auth.id)).await?;
    let newest = assessments.into_iter().max_by_key(|r| r.created_at);
    Ok(Json(newest))
}
