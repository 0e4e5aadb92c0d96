//! Analysis derived from a scored assessment: dominant dosha, balance
//! status, constitution characteristics, and the recommendation list
//! attached to a persisted record.

use serde::Serialize;
use ts_rs::TS;

use ayursutra_core::models::answers::AssessmentAnswers;
use ayursutra_core::models::dosha::{BalanceStatus, Dosha, DoshaScore};

use crate::scoring;

/// Descriptive characteristics of one dosha, shown alongside results.
#[derive(Debug, Clone, Copy, Serialize, TS)]
#[ts(export)]
pub struct DoshaProfile {
    pub elements: &'static str,
    pub qualities: &'static str,
    pub traits: &'static str,
    pub guidance: &'static str,
}

/// The complete result of scoring one set of answers.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct DoshaAnalysis {
    /// One-decimal percentages, the form clients display and records store.
    pub scores: DoshaScore,
    pub dominant: Dosha,
    pub balance_status: BalanceStatus,
    pub characteristics: DoshaProfile,
    pub recommendations: Vec<String>,
}

/// Score a set of answers and derive the full analysis.
pub fn analyze(answers: &AssessmentAnswers) -> DoshaAnalysis {
    let raw = scoring::score(answers);
    let dominant = raw.dominant();
    DoshaAnalysis {
        scores: raw.rounded(),
        dominant,
        balance_status: raw.balance_status(),
        characteristics: profile(dominant),
        recommendations: recommendations(dominant),
    }
}

/// Static characteristics per dosha.
pub fn profile(dosha: Dosha) -> DoshaProfile {
    match dosha {
        Dosha::Vata => DoshaProfile {
            elements: "Air + Space",
            qualities: "Light, cold, dry, mobile, subtle",
            traits: "Creative, energetic, adaptable, prone to anxiety",
            guidance: "Warm, grounding foods; regular routine; gentle exercise",
        },
        Dosha::Pitta => DoshaProfile {
            elements: "Fire + Water",
            qualities: "Hot, sharp, light, oily, liquid",
            traits: "Intelligent, focused, ambitious, prone to anger",
            guidance: "Cooling foods; avoid spicy; moderate exercise",
        },
        Dosha::Kapha => DoshaProfile {
            elements: "Earth + Water",
            qualities: "Heavy, slow, cool, oily, smooth",
            traits: "Stable, patient, loving, prone to lethargy",
            guidance: "Light, warm foods; vigorous exercise; variety in routine",
        },
    }
}

/// The recommendation strings stored on a completed assessment record.
pub fn recommendations(dominant: Dosha) -> Vec<String> {
    let lines: [&str; 4] = match dominant {
        Dosha::Vata => [
            "Maintain regular meal times",
            "Include warm, cooked foods",
            "Practice grounding meditation",
            "Avoid excessive cold and dry foods",
        ],
        Dosha::Pitta => [
            "Eat cooling foods like cucumber and mint",
            "Avoid spicy and fried foods",
            "Practice cooling breathing exercises",
            "Maintain work-life balance",
        ],
        Dosha::Kapha => [
            "Include light, warm foods",
            "Engage in regular vigorous exercise",
            "Avoid heavy, oily foods",
            "Maintain variety in daily routine",
        ],
    };
    lines.iter().map(|s| s.to_string()).collect()
}
