use axum::Json;

use ayursutra_dosha::questionnaire::{Question, questions};

/// The seven question definitions, public schema data the assessment UI
/// renders.
pub async fn list_questions() -> Json<&'static [Question]> {
    Json(questions())
}
