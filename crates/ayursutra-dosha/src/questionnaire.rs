//! The seven-question questionnaire definition.
//!
//! Static schema data served to clients as-is: prompts, subtitles, and the
//! selectable options with their display text. The scoring weights live in
//! [`crate::scoring`], keyed by the same [`AnswerValue`] variants.

use std::sync::LazyLock;

use serde::Serialize;
use ts_rs::TS;

use ayursutra_core::models::answers::{
    AnswerValue, AssessmentAnswers, BodyFrame, Climate, Digestion, Energy, Mind, QuestionKey,
    SkinHair, Sleep,
};

/// One selectable option of a question.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Choice {
    pub value: AnswerValue,
    pub title: &'static str,
    pub detail: Option<&'static str>,
}

/// One question of the assessment.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Question {
    pub key: QuestionKey,
    pub prompt: &'static str,
    pub subtitle: Option<&'static str>,
    pub choices: Vec<Choice>,
}

/// The seven questions in the standard presentation order.
pub fn questions() -> &'static [Question] {
    static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
        vec![
            Question {
                key: QuestionKey::Body,
                prompt: "Which best describes your body frame?",
                subtitle: Some("Choose the option that most closely matches your natural build."),
                choices: vec![
                    Choice {
                        value: AnswerValue::Body(BodyFrame::Light),
                        title: "Light / Slender",
                        detail: Some("Fine bones, narrow shoulders."),
                    },
                    Choice {
                        value: AnswerValue::Body(BodyFrame::Medium),
                        title: "Medium / Proportionate",
                        detail: Some("Balanced build, moderate muscle."),
                    },
                    Choice {
                        value: AnswerValue::Body(BodyFrame::Sturdy),
                        title: "Sturdy / Broad",
                        detail: Some("Broader frame, gains easily."),
                    },
                ],
            },
            Question {
                key: QuestionKey::Skin,
                prompt: "How would you describe your skin and hair?",
                subtitle: Some("Pick the option that fits most of the time."),
                choices: vec![
                    Choice {
                        value: AnswerValue::Skin(SkinHair::Dry),
                        title: "Dry / Rough",
                        detail: Some("Dry skin, dry scalp, frizzy hair."),
                    },
                    Choice {
                        value: AnswerValue::Skin(SkinHair::Normal),
                        title: "Sensitive / Warm",
                        detail: Some("Tends to be warm, sensitive or reddish."),
                    },
                    Choice {
                        value: AnswerValue::Skin(SkinHair::Oily),
                        title: "Oily / Smooth",
                        detail: Some("Oily, thick, smooth, lustrous hair."),
                    },
                ],
            },
            Question {
                key: QuestionKey::Digestion,
                prompt: "How is your appetite and digestion?",
                subtitle: None,
                choices: vec![
                    Choice {
                        value: AnswerValue::Digestion(Digestion::Irregular),
                        title: "Irregular / Variable",
                        detail: Some("Sometimes hungry, sometimes not."),
                    },
                    Choice {
                        value: AnswerValue::Digestion(Digestion::Sharp),
                        title: "Strong / Sharp",
                        detail: Some("Get hungry quickly, strong digestion."),
                    },
                    Choice {
                        value: AnswerValue::Digestion(Digestion::Slow),
                        title: "Slow / Steady",
                        detail: Some("Slow digestion, feel heavy after meals."),
                    },
                ],
            },
            Question {
                key: QuestionKey::Energy,
                prompt: "How would you describe your energy and activity?",
                subtitle: None,
                choices: vec![
                    Choice {
                        value: AnswerValue::Energy(Energy::Variable),
                        title: "Variable / Bursts",
                        detail: Some("Energy comes in bursts."),
                    },
                    Choice {
                        value: AnswerValue::Energy(Energy::Intense),
                        title: "Intense / Driven",
                        detail: Some("High energy, competitive."),
                    },
                    Choice {
                        value: AnswerValue::Energy(Energy::Steady),
                        title: "Steady / Enduring",
                        detail: Some("Consistent and grounded."),
                    },
                ],
            },
            Question {
                key: QuestionKey::Sleep,
                prompt: "How are your sleep patterns?",
                subtitle: None,
                choices: vec![
                    Choice {
                        value: AnswerValue::Sleep(Sleep::Light),
                        title: "Light / Interrupted",
                        detail: Some("Hard to fall or stay asleep."),
                    },
                    Choice {
                        value: AnswerValue::Sleep(Sleep::Moderate),
                        title: "Moderate / Average",
                        detail: Some("Generally okay sleep."),
                    },
                    Choice {
                        value: AnswerValue::Sleep(Sleep::Heavy),
                        title: "Deep / Long",
                        detail: Some("Sleep deeply and longer."),
                    },
                ],
            },
            Question {
                key: QuestionKey::Climate,
                prompt: "Which climate do you prefer?",
                subtitle: None,
                choices: vec![
                    Choice {
                        value: AnswerValue::Climate(Climate::Warm),
                        title: "Warm / Dry",
                        detail: None,
                    },
                    Choice {
                        value: AnswerValue::Climate(Climate::Cold),
                        title: "Cool / Fresh",
                        detail: None,
                    },
                    Choice {
                        value: AnswerValue::Climate(Climate::Damp),
                        title: "Moist / Humid",
                        detail: None,
                    },
                ],
            },
            Question {
                key: QuestionKey::Mind,
                prompt: "What best describes your mind and emotions?",
                subtitle: None,
                choices: vec![
                    Choice {
                        value: AnswerValue::Mind(Mind::Anxious),
                        title: "Anxious / Restless",
                        detail: None,
                    },
                    Choice {
                        value: AnswerValue::Mind(Mind::Irritable),
                        title: "Irritable / Intense",
                        detail: None,
                    },
                    Choice {
                        value: AnswerValue::Mind(Mind::Calm),
                        title: "Calm / Content",
                        detail: None,
                    },
                ],
            },
        ]
    });
    &QUESTIONS
}

/// Look up a question by key.
pub fn question(key: QuestionKey) -> &'static Question {
    questions()
        .iter()
        .find(|q| q.key == key)
        .expect("every QuestionKey has a definition")
}

/// Format a set of answers as structured text for inclusion in a
/// generation prompt. Unanswered questions are omitted.
pub fn to_structured_input(answers: &AssessmentAnswers) -> String {
    let mut output = String::from("## Constitution questionnaire\n\n");
    for value in answers.values() {
        let q = question(value.key());
        if let Some(choice) = q.choices.iter().find(|c| c.value == value) {
            output.push_str(&format!("- {} {}\n", q.prompt, choice.title));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_question_has_three_choices_for_its_own_key() {
        let qs = questions();
        assert_eq!(qs.len(), 7);
        for q in qs {
            assert_eq!(q.choices.len(), 3);
            for c in &q.choices {
                assert_eq!(c.value.key(), q.key);
            }
        }
    }

    #[test]
    fn questions_follow_the_standard_order() {
        let keys: Vec<QuestionKey> = questions().iter().map(|q| q.key).collect();
        assert_eq!(keys, QuestionKey::ALL.to_vec());
    }

    #[test]
    fn structured_input_skips_unanswered_questions() {
        let answers = AssessmentAnswers {
            body: Some(BodyFrame::Light),
            ..Default::default()
        };
        let text = to_structured_input(&answers);
        assert!(text.contains("body frame"));
        assert!(!text.contains("sleep"));
    }
}
