//! Treatment-plan generation from assessment results.

use serde::{Deserialize, Serialize};

use ayursutra_core::models::answers::AssessmentAnswers;
use ayursutra_core::models::dosha::{Dosha, DoshaScore};
use ayursutra_dosha::questionnaire;

use crate::client::GenAiClient;
use crate::error::AiError;

/// A generated 14-day plan. The model is asked for strict JSON in this
/// shape; prose answers are wrapped into `plan` with empty title/summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentPlan {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub plan: String,
}

/// A key finding the client wants reflected in the plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanInsight {
    pub title: String,
    pub description: String,
}

pub fn plan_prompt(
    scores: &DoshaScore,
    dominant: Option<Dosha>,
    insights: &[PlanInsight],
    answers: &AssessmentAnswers,
) -> String {
    let insight_lines = if insights.is_empty() {
        "- None provided".to_string()
    } else {
        insights
            .iter()
            .map(|i| format!("- {}: {}", i.title, i.description))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let dominant_name = dominant.map(|d| d.name()).unwrap_or("unknown");

    format!(
        "You are an Ayurvedic practitioner. Create a concise, safe, \
         evidence-informed 14-day treatment plan.\n\
         Inputs:\n\
         - Dosha scores: Vata {vata:.1}%, Pitta {pitta:.1}%, Kapha {kapha:.1}%\n\
         - Dominant dosha: {dominant_name}\n\
         - Key insights:\n{insight_lines}\n\
         - Patient inputs:\n{answer_block}\n\
         Output strictly in JSON (no code block, no text before/after):\n\
         {{\"title\": string, \"summary\": string, \"plan\": string}}\n\
         Requirements for content:\n\
         - Use classical Ayurveda principles in modern, approachable language.\n\
         - Structure plan as bullets: Routine (morning, noon, evening), Diet \
         (favor/avoid), Therapies (clinic/home), Herbs (dosage ranges), \
         Lifestyle, Cautions.\n\
         - Keep bullets under 18 words. Avoid medical claims. No emojis.",
        vata = scores.vata,
        pitta = scores.pitta,
        kapha = scores.kapha,
        answer_block = questionnaire::to_structured_input(answers),
    )
}

/// Generate a plan. Unlike tips and chat there is no canned fallback; a
/// failed generation surfaces to the caller as an error.
pub async fn generate_plan(
    client: &GenAiClient,
    scores: &DoshaScore,
    dominant: Option<Dosha>,
    insights: &[PlanInsight],
    answers: &AssessmentAnswers,
) -> Result<TreatmentPlan, AiError> {
    let prompt = plan_prompt(scores, dominant, insights, answers);
    let text = client.generate(&[prompt]).await?;
    Ok(parse_plan(&text))
}

/// Parse model output into a [`TreatmentPlan`]. Accidental markdown fences
/// are stripped first; if the result still isn't the requested JSON shape,
/// the raw text becomes the plan body.
pub fn parse_plan(text: &str) -> TreatmentPlan {
    let stripped = strip_json_fences(text);
    match serde_json::from_str::<TreatmentPlan>(stripped) {
        Ok(plan) => plan,
        Err(_) => TreatmentPlan {
            title: String::new(),
            summary: String::new(),
            plan: text.trim().to_string(),
        },
    }
}

/// Strips ```json ... ``` or ``` ... ``` fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fenced_json_is_stripped() {
        let input = "```json\n{\"title\": \"t\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"title\": \"t\"}");

        let input = "```\n{\"title\": \"t\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"title\": \"t\"}");

        assert_eq!(strip_json_fences("{\"a\":1}"), "{\"a\":1}");
    }
}
