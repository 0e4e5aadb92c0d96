use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answers::AssessmentAnswers;
use super::dosha::{BalanceStatus, Dosha, DoshaScore};

/// An immutable snapshot of one completed assessment.
///
/// Created once when a flow finishes and never mutated afterwards — a
/// user's history is the append-only set of these records.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub answers: AssessmentAnswers,
    pub scores: DoshaScore,
    pub dominant: Dosha,
    pub balance_status: BalanceStatus,
    pub recommendations: Vec<String>,
    pub created_at: jiff::Timestamp,
}
