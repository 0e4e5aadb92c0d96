use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The seven questionnaire keys, in the standard presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionKey {
    Body,
    Skin,
    Digestion,
    Energy,
    Sleep,
    Climate,
    Mind,
}

impl QuestionKey {
    pub const ALL: [QuestionKey; 7] = [
        QuestionKey::Body,
        QuestionKey::Skin,
        QuestionKey::Digestion,
        QuestionKey::Energy,
        QuestionKey::Sleep,
        QuestionKey::Climate,
        QuestionKey::Mind,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BodyFrame {
    Light,
    Medium,
    Sturdy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SkinHair {
    Dry,
    Normal,
    Oily,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Digestion {
    Irregular,
    Sharp,
    Slow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Energy {
    Variable,
    Intense,
    Steady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sleep {
    Light,
    Moderate,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Climate {
    Warm,
    Cold,
    Damp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Mind {
    Anxious,
    Irritable,
    Calm,
}

/// The seven questionnaire responses. Every field is optional — a question
/// may be skipped, and an absent answer contributes nothing to scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentAnswers {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub body: Option<BodyFrame>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub skin: Option<SkinHair>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub digestion: Option<Digestion>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub energy: Option<Energy>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sleep: Option<Sleep>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub climate: Option<Climate>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mind: Option<Mind>,
}

impl AssessmentAnswers {
    /// Record one answer, overwriting any previous value for its question.
    pub fn set(&mut self, value: AnswerValue) {
        match value {
            AnswerValue::Body(v) => self.body = Some(v),
            AnswerValue::Skin(v) => self.skin = Some(v),
            AnswerValue::Digestion(v) => self.digestion = Some(v),
            AnswerValue::Energy(v) => self.energy = Some(v),
            AnswerValue::Sleep(v) => self.sleep = Some(v),
            AnswerValue::Climate(v) => self.climate = Some(v),
            AnswerValue::Mind(v) => self.mind = Some(v),
        }
    }

    pub fn has_answer(&self, key: QuestionKey) -> bool {
        match key {
            QuestionKey::Body => self.body.is_some(),
            QuestionKey::Skin => self.skin.is_some(),
            QuestionKey::Digestion => self.digestion.is_some(),
            QuestionKey::Energy => self.energy.is_some(),
            QuestionKey::Sleep => self.sleep.is_some(),
            QuestionKey::Climate => self.climate.is_some(),
            QuestionKey::Mind => self.mind.is_some(),
        }
    }

    pub fn answered_count(&self) -> usize {
        QuestionKey::ALL
            .iter()
            .filter(|k| self.has_answer(**k))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.answered_count() == 0
    }

    /// The answers that are present, tagged with their questions.
    pub fn values(&self) -> Vec<AnswerValue> {
        let mut out = Vec::with_capacity(7);
        if let Some(v) = self.body {
            out.push(AnswerValue::Body(v));
        }
        if let Some(v) = self.skin {
            out.push(AnswerValue::Skin(v));
        }
        if let Some(v) = self.digestion {
            out.push(AnswerValue::Digestion(v));
        }
        if let Some(v) = self.energy {
            out.push(AnswerValue::Energy(v));
        }
        if let Some(v) = self.sleep {
            out.push(AnswerValue::Sleep(v));
        }
        if let Some(v) = self.climate {
            out.push(AnswerValue::Climate(v));
        }
        if let Some(v) = self.mind {
            out.push(AnswerValue::Mind(v));
        }
        out
    }
}

/// One answer, tagged with the question it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerValue {
    Body(BodyFrame),
    Skin(SkinHair),
    Digestion(Digestion),
    Energy(Energy),
    Sleep(Sleep),
    Climate(Climate),
    Mind(Mind),
}

impl AnswerValue {
    pub fn key(&self) -> QuestionKey {
        match self {
            AnswerValue::Body(_) => QuestionKey::Body,
            AnswerValue::Skin(_) => QuestionKey::Skin,
            AnswerValue::Digestion(_) => QuestionKey::Digestion,
            AnswerValue::Energy(_) => QuestionKey::Energy,
            AnswerValue::Sleep(_) => QuestionKey::Sleep,
            AnswerValue::Climate(_) => QuestionKey::Climate,
            AnswerValue::Mind(_) => QuestionKey::Mind,
        }
    }
}
