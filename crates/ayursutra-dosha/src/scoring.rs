//! The weighted scoring function.
//!
//! Each answered question adds a fixed weight to exactly one dosha
//! accumulator; the accumulators are then normalized to percentages.
//! Total over any subset of answers, including none.

use ayursutra_core::models::answers::{
    AnswerValue, AssessmentAnswers, BodyFrame, Climate, Digestion, Energy, Mind, SkinHair, Sleep,
};
use ayursutra_core::models::dosha::{Dosha, DoshaScore};

/// The dosha an option feeds and the weight it contributes.
///
/// Body frame is the strongest signal (2.0), digestion next (1.5), climate
/// preference the weakest (0.5); everything else counts 1.0.
pub fn contribution(value: AnswerValue) -> (Dosha, f64) {
    match value {
        AnswerValue::Body(v) => (
            match v {
                BodyFrame::Light => Dosha::Vata,
                BodyFrame::Medium => Dosha::Pitta,
                BodyFrame::Sturdy => Dosha::Kapha,
            },
            2.0,
        ),
        AnswerValue::Skin(v) => (
            match v {
                SkinHair::Dry => Dosha::Vata,
                SkinHair::Normal => Dosha::Pitta,
                SkinHair::Oily => Dosha::Kapha,
            },
            1.0,
        ),
        AnswerValue::Digestion(v) => (
            match v {
                Digestion::Irregular => Dosha::Vata,
                Digestion::Sharp => Dosha::Pitta,
                Digestion::Slow => Dosha::Kapha,
            },
            1.5,
        ),
        AnswerValue::Energy(v) => (
            match v {
                Energy::Variable => Dosha::Vata,
                Energy::Intense => Dosha::Pitta,
                Energy::Steady => Dosha::Kapha,
            },
            1.0,
        ),
        AnswerValue::Sleep(v) => (
            match v {
                Sleep::Light => Dosha::Vata,
                Sleep::Moderate => Dosha::Pitta,
                Sleep::Heavy => Dosha::Kapha,
            },
            1.0,
        ),
        AnswerValue::Climate(v) => (
            match v {
                Climate::Warm => Dosha::Vata,
                Climate::Cold => Dosha::Pitta,
                Climate::Damp => Dosha::Kapha,
            },
            0.5,
        ),
        AnswerValue::Mind(v) => (
            match v {
                Mind::Anxious => Dosha::Vata,
                Mind::Irritable => Dosha::Pitta,
                Mind::Calm => Dosha::Kapha,
            },
            1.0,
        ),
    }
}

/// Score a set of answers as dosha percentages.
///
/// With no answers at all, returns [`DoshaScore::UNIFORM`] rather than
/// dividing by zero. Results are full precision; call
/// [`DoshaScore::rounded`] for the one-decimal display form.
pub fn score(answers: &AssessmentAnswers) -> DoshaScore {
    let mut vata = 0.0;
    let mut pitta = 0.0;
    let mut kapha = 0.0;

    for value in answers.values() {
        let (dosha, weight) = contribution(value);
        match dosha {
            Dosha::Vata => vata += weight,
            Dosha::Pitta => pitta += weight,
            Dosha::Kapha => kapha += weight,
        }
    }

    let total = vata + pitta + kapha;
    if total == 0.0 {
        return DoshaScore::UNIFORM;
    }

    DoshaScore {
        vata: 100.0 * vata / total,
        pitta: 100.0 * pitta / total,
        kapha: 100.0 * kapha / total,
    }
}
