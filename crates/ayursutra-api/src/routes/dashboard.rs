use std::collections::HashMap;

use axum::extract::State;
use axum::{Extension, Json};
use serde::Serialize;
use uuid::Uuid;

use ayursutra_core::models::assessment::AssessmentRecord;
use ayursutra_core::models::dosha::{BalanceStatus, Dosha, DoshaScore};
use ayursutra_core::models::user::{User, UserRole};
use ayursutra_core::store_keys;
use ayursutra_storage::records;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const PROGRAM_TOTAL_DAYS: i64 = 21;

#[derive(Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        UserSummary {
            id: user.id,
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

#[derive(Serialize)]
pub struct ConstitutionSummary {
    pub scores: DoshaScore,
    pub dominant: Dosha,
    pub balance_status: BalanceStatus,
    pub recommendations: Vec<String>,
    pub assessed_at: jiff::Timestamp,
}

impl From<&AssessmentRecord> for ConstitutionSummary {
    fn from(record: &AssessmentRecord) -> Self {
        ConstitutionSummary {
            scores: record.scores,
            dominant: record.dominant,
            balance_status: record.balance_status,
            recommendations: record.recommendations.clone(),
            assessed_at: record.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct ProgramSummary {
    pub name: String,
    pub day: i64,
    pub total_days: i64,
    pub progress_percent: i64,
    pub next_session: &'static str,
}

#[derive(Serialize)]
pub struct QuickAction {
    pub id: u32,
    pub name: &'static str,
    pub kind: &'static str,
}

#[derive(Serialize)]
pub struct ActivityItem {
    pub kind: &'static str,
    pub message: String,
    pub timestamp: jiff::Timestamp,
}

#[derive(Serialize)]
pub struct PatientDashboard {
    pub user: UserSummary,
    /// Absent until the user has completed at least one assessment.
    pub constitution: Option<ConstitutionSummary>,
    pub current_program: Option<ProgramSummary>,
    pub quick_actions: Vec<QuickAction>,
    pub recent_activity: Vec<ActivityItem>,
}

/// Patient home view: latest constitution, program progress, and recent
/// activity derived from the assessment history.
pub async fn patient(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<PatientDashboard>, ApiError> {
    auth.require_role(&[UserRole::Patient])?;

    let user: User = records::load_record(&state.store, &store_keys::user(auth.id)).await?;
    let mut history: Vec<AssessmentRecord> =
        records::load_all(&state.store, &store_keys::assessments_prefix(auth.id)).await?;
    history.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let latest = history.first();
    let constitution = latest.map(ConstitutionSummary::from);
    let current_program = latest.map(|record| program_for(record));

    let recent_activity = history
        .iter()
        .take(5)
        .map(|record| ActivityItem {
            kind: "assessment_completed",
            message: format!(
                "Completed dosha assessment: {} {}",
                record.dominant.name(),
                record.balance_status.label().to_lowercase()
            ),
            timestamp: record.created_at,
        })
        .collect();

    Ok(Json(PatientDashboard {
        user: UserSummary::from(&user),
        constitution,
        current_program,
        quick_actions: vec![
            QuickAction {
                id: 1,
                name: "Book Appointment",
                kind: "primary",
            },
            QuickAction {
                id: 2,
                name: "Check Progress",
                kind: "secondary",
            },
            QuickAction {
                id: 3,
                name: "View Treatment Plan",
                kind: "secondary",
            },
        ],
        recent_activity,
    }))
}

/// Program progress, anchored at the latest assessment date.
fn program_for(record: &AssessmentRecord) -> ProgramSummary {
    let name = match record.dominant {
        Dosha::Vata => "21-day Vata Grounding Program",
        Dosha::Pitta => "21-day Pitta Cooling Program",
        Dosha::Kapha => "21-day Kapha Activation Program",
    };

    let elapsed_days =
        (jiff::Timestamp::now().as_second() - record.created_at.as_second()) / 86_400;
    let day = (elapsed_days + 1).clamp(1, PROGRAM_TOTAL_DAYS);

    ProgramSummary {
        name: name.to_string(),
        day,
        total_days: PROGRAM_TOTAL_DAYS,
        progress_percent: day * 100 / PROGRAM_TOTAL_DAYS,
        next_session: "Abhyanga Therapy",
    }
}

#[derive(Serialize)]
pub struct PatientOverview {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub assessment_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant: Option<Dosha>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_assessed_at: Option<jiff::Timestamp>,
}

#[derive(Serialize)]
pub struct PractitionerDashboard {
    pub patient_count: usize,
    pub assessed_patient_count: usize,
    pub patients: Vec<PatientOverview>,
}

/// Practitioner roster: every patient with their assessment standing.
pub async fn practitioner(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<PractitionerDashboard>, ApiError> {
    auth.require_role(&[UserRole::Practitioner, UserRole::Admin])?;

    let users: Vec<User> = records::load_all(&state.store, store_keys::USERS_PREFIX).await?;
    let by_user = assessments_by_user(&state).await?;

    let mut patients: Vec<PatientOverview> = users
        .iter()
        .filter(|u| u.role == UserRole::Patient)
        .map(|u| {
            let latest = by_user
                .get(&u.id)
                .and_then(|records| records.iter().max_by_key(|r| r.created_at));
            PatientOverview {
                id: u.id,
                full_name: u.full_name.clone(),
                email: u.email.clone(),
                assessment_count: by_user.get(&u.id).map(Vec::len).unwrap_or(0),
                dominant: latest.map(|r| r.dominant),
                last_assessed_at: latest.map(|r| r.created_at),
            }
        })
        .collect();
    patients.sort_by(|a, b| b.last_assessed_at.cmp(&a.last_assessed_at));

    let assessed_patient_count = patients.iter().filter(|p| p.assessment_count > 0).count();

    Ok(Json(PractitionerDashboard {
        patient_count: patients.len(),
        assessed_patient_count,
        patients,
    }))
}

#[derive(Serialize)]
pub struct DoshaDistribution {
    pub vata: usize,
    pub pitta: usize,
    pub kapha: usize,
}

#[derive(Serialize)]
pub struct AdminDashboard {
    pub user_count: usize,
    pub patient_count: usize,
    pub practitioner_count: usize,
    pub assessment_count: usize,
    /// Dominant-dosha distribution over all recorded assessments.
    pub dosha_distribution: DoshaDistribution,
}

/// Admin overview: account and assessment totals.
pub async fn admin(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<AdminDashboard>, ApiError> {
    auth.require_role(&[UserRole::Admin])?;

    let users: Vec<User> = records::load_all(&state.store, store_keys::USERS_PREFIX).await?;
    let assessments: Vec<AssessmentRecord> =
        records::load_all(&state.store, store_keys::ASSESSMENTS_PREFIX).await?;

    let mut distribution = DoshaDistribution {
        vata: 0,
        pitta: 0,
        kapha: 0,
    };
    for record in &assessments {
        match record.dominant {
            Dosha::Vata => distribution.vata += 1,
            Dosha::Pitta => distribution.pitta += 1,
            Dosha::Kapha => distribution.kapha += 1,
        }
    }

    Ok(Json(AdminDashboard {
        user_count: users.len(),
        patient_count: users.iter().filter(|u| u.role == UserRole::Patient).count(),
        practitioner_count: users
            .iter()
            .filter(|u| u.role == UserRole::Practitioner)
            .count(),
        assessment_count: assessments.len(),
        dosha_distribution: distribution,
    }))
}

/// All assessment records grouped by owner.
async fn assessments_by_user(
    state: &AppState,
) -> Result<HashMap<Uuid, Vec<AssessmentRecord>>, ApiError> {
    let all: Vec<AssessmentRecord> =
        records::load_all(&state.store, store_keys::ASSESSMENTS_PREFIX).await?;
    let mut by_user: HashMap<Uuid, Vec<AssessmentRecord>> = HashMap::new();
    for record in all {
        by_user.entry(record.user_id).or_default().push(record);
    }
    Ok(by_user)
}
