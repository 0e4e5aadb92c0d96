//! Deterministic content served when the model is unreachable.
//!
//! This is data, not a hidden recovery path: callers receive an error from
//! the generation functions and explicitly choose these, labeling the
//! response so fallback text is never presented as model output.

/// Canned tips per persona. Unknown personas get the vata set.
pub fn tips(persona: &str) -> &'static [&'static str] {
    match persona.to_lowercase().as_str() {
        "patient pitta" => &[
            "Cooling foods like cucumber and mint balance Pitta.",
            "Avoid spicy, fried foods during hot weather.",
            "Take breaks in shade during peak sun hours.",
            "Practice cooling breathing exercises and meditation.",
        ],
        "patient kapha" => &[
            "Light, warm foods with spices stimulate Kapha.",
            "Regular exercise and movement prevent stagnation.",
            "Wake up before 6 AM for optimal energy.",
            "Include ginger and turmeric in your daily routine.",
        ],
        "practitioner" => &[
            "Review patient dosha assessments before consultations.",
            "Document treatment progress and symptom changes.",
            "Schedule follow-ups based on treatment response.",
            "Maintain detailed notes for personalized care plans.",
        ],
        _ => &[
            "Warm oil massage before bed calms Vata dosha naturally.",
            "Eat warm, cooked meals and avoid cold, raw foods.",
            "Establish a regular sleep schedule before 10 PM.",
            "Practice gentle yoga and meditation daily.",
        ],
    }
}

/// A topical canned reply keyed on the user's last message.
pub fn chat_reply(last_user_message: &str) -> &'static str {
    let lower = last_user_message.to_lowercase();

    if lower.contains("diet") || lower.contains("food") {
        return "For personalized dietary advice, I recommend consulting with your \
                Ayurvedic practitioner. They can provide specific recommendations \
                based on your dosha constitution and current health status.";
    }
    if lower.contains("routine") || lower.contains("schedule") {
        return "A balanced daily routine (dinacharya) is essential for optimal \
                health. Consider waking up early, practicing oil massage, eating \
                meals at regular times, and maintaining a consistent sleep schedule.";
    }
    if lower.contains("symptom") || lower.contains("pain") {
        return "If you're experiencing concerning symptoms, please consult with \
                your healthcare provider or Ayurvedic practitioner for proper \
                assessment and treatment.";
    }
    if lower.contains("dosha") || lower.contains("constitution") {
        return "Understanding your dosha constitution is fundamental to Ayurveda. \
                Consider taking our assessment to discover your dominant dosha and \
                receive personalized recommendations.";
    }

    "I'm here to help with your Ayurvedic journey. For personalized guidance, \
     please consult with your practitioner who can provide recommendations based \
     on your specific constitution and needs."
}
