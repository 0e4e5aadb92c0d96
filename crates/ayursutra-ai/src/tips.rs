//! Short daily-suggestion generation.

use crate::client::GenAiClient;
use crate::error::AiError;

/// How many tips a suggestions response carries.
pub const TIP_COUNT: usize = 4;

pub fn tips_prompt(persona: &str, topic: &str) -> String {
    format!(
        "Generate {TIP_COUNT} concise Ayurveda tips for {persona}. Topic: {topic}. \
         Keep each tip under 15 words, no numbering, no emojis."
    )
}

/// Generate tips for a persona/topic. Errors are the caller's cue to serve
/// [`crate::fallback::tips`] instead.
pub async fn suggest_tips(
    client: &GenAiClient,
    persona: &str,
    topic: &str,
) -> Result<Vec<String>, AiError> {
    let text = client.generate(&[tips_prompt(persona, topic)]).await?;
    let tips = parse_tips(&text);
    if tips.is_empty() {
        return Err(AiError::EmptyResponse);
    }
    Ok(tips)
}

/// Split model output into clean tip lines: bullet and numbering prefixes
/// are stripped, blanks dropped, and at most [`TIP_COUNT`] lines kept.
pub fn parse_tips(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            line.trim_start_matches(|c: char| {
                c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '•' | '*' | '.' | ')')
            })
            .trim()
            .to_string()
        })
        .filter(|line| !line.is_empty())
        .take(TIP_COUNT)
        .collect()
}
