use serde::{Deserialize, Serialize};
use ts_rs::TS;

use ayursutra_core::models::answers::{AnswerValue, AssessmentAnswers, QuestionKey};
use ayursutra_core::models::dosha::DoshaScore;

use crate::error::FlowError;
use crate::order;

/// One step of the flow: a question, or the closing review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StepKey {
    Body,
    Skin,
    Digestion,
    Energy,
    Sleep,
    Climate,
    Mind,
    Review,
}

impl StepKey {
    /// The question behind this step, if it is one.
    pub fn question(&self) -> Option<QuestionKey> {
        match self {
            StepKey::Body => Some(QuestionKey::Body),
            StepKey::Skin => Some(QuestionKey::Skin),
            StepKey::Digestion => Some(QuestionKey::Digestion),
            StepKey::Energy => Some(QuestionKey::Energy),
            StepKey::Sleep => Some(QuestionKey::Sleep),
            StepKey::Climate => Some(QuestionKey::Climate),
            StepKey::Mind => Some(QuestionKey::Mind),
            StepKey::Review => None,
        }
    }

    pub fn from_question(key: QuestionKey) -> StepKey {
        match key {
            QuestionKey::Body => StepKey::Body,
            QuestionKey::Skin => StepKey::Skin,
            QuestionKey::Digestion => StepKey::Digestion,
            QuestionKey::Energy => StepKey::Energy,
            QuestionKey::Sleep => StepKey::Sleep,
            QuestionKey::Climate => StepKey::Climate,
            QuestionKey::Mind => StepKey::Mind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StepStatus {
    Pending,
    Answered,
    Skipped,
}

/// Where the one-shot submission stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SubmissionState {
    Idle,
    InFlight,
    Completed,
}

/// Outcome of [`AssessmentSession::back`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    /// Already at the first step — the caller should leave the flow.
    ExitFlow,
    /// Moved to the given step index.
    MovedTo(usize),
}

/// The complete state of one assessment flow.
///
/// An explicit value object: serialize it to checkpoint, deserialize to
/// restore. Two sessions never share state.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSession {
    steps: Vec<StepKey>,
    statuses: Vec<StepStatus>,
    cursor: usize,
    /// High-water mark of visited step indices. Steps at or below it stay
    /// reachable through [`AssessmentSession::jump_to`] even after
    /// backtracking.
    furthest: usize,
    answers: AssessmentAnswers,
    submission: SubmissionState,
}

impl AssessmentSession {
    /// A fresh session over the standard step order.
    pub fn new() -> Self {
        Self::with_steps(order::standard())
    }

    /// A fresh session with the middle questions shuffled by `seed`.
    pub fn with_shuffled_order(seed: u64) -> Self {
        Self::with_steps(order::shuffled(seed))
    }

    fn with_steps(steps: Vec<StepKey>) -> Self {
        let statuses = vec![StepStatus::Pending; steps.len()];
        AssessmentSession {
            steps,
            statuses,
            cursor: 0,
            furthest: 0,
            answers: AssessmentAnswers::default(),
            submission: SubmissionState::Idle,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn steps(&self) -> &[StepKey] {
        &self.steps
    }

    pub fn current_index(&self) -> usize {
        self.cursor
    }

    pub fn current_step(&self) -> StepKey {
        self.steps[self.cursor]
    }

    pub fn status(&self, step: StepKey) -> StepStatus {
        let idx = self.index_of(step);
        self.statuses[idx]
    }

    pub fn answers(&self) -> &AssessmentAnswers {
        &self.answers
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn is_completed(&self) -> bool {
        self.submission == SubmissionState::Completed
    }

    /// Score the answers recorded so far. Pure and cheap, safe to call on
    /// every change for a live preview.
    pub fn preview_score(&self) -> DoshaScore {
        ayursutra_dosha::scoring::score(&self.answers)
    }

    fn index_of(&self, step: StepKey) -> usize {
        self.steps
            .iter()
            .position(|s| *s == step)
            .expect("every step key appears exactly once")
    }

    // ── Transitions ──────────────────────────────────────────────────────

    /// Record an answer and mark its question's step answered. The cursor
    /// does not move. Re-answering a skipped step overwrites its status.
    pub fn select_answer(&mut self, value: AnswerValue) {
        self.answers.set(value);
        let idx = self.index_of(StepKey::from_question(value.key()));
        self.statuses[idx] = StepStatus::Answered;
    }

    /// Leave the current step forward. The step being left is marked
    /// answered unless it was skipped. The cursor clamps at the last step.
    pub fn advance(&mut self) {
        if self.statuses[self.cursor] != StepStatus::Skipped {
            self.statuses[self.cursor] = StepStatus::Answered;
        }
        if self.cursor < self.steps.len() - 1 {
            self.cursor += 1;
            self.furthest = self.furthest.max(self.cursor);
        }
    }

    /// Skip the current step and move forward. A step that already holds an
    /// answer keeps its answered status. No-op movement at the last step.
    pub fn skip(&mut self) {
        if self.statuses[self.cursor] == StepStatus::Pending {
            self.statuses[self.cursor] = StepStatus::Skipped;
        }
        if self.cursor < self.steps.len() - 1 {
            self.cursor += 1;
            self.furthest = self.furthest.max(self.cursor);
        }
    }

    /// Move one step back, or signal exit when already at the first step.
    /// Statuses are untouched either way.
    pub fn back(&mut self) -> BackAction {
        if self.cursor == 0 {
            BackAction::ExitFlow
        } else {
            self.cursor -= 1;
            BackAction::MovedTo(self.cursor)
        }
    }

    /// Jump directly to a step. Permitted only onto visited territory: the
    /// target must be at or below the furthest step reached, or carry a
    /// non-pending status. Returns whether the cursor moved.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.steps.len() {
            return false;
        }
        if index <= self.furthest || self.statuses[index] != StepStatus::Pending {
            self.cursor = index;
            self.furthest = self.furthest.max(index);
            true
        } else {
            false
        }
    }

    /// Yield the answers for submission, exactly once.
    ///
    /// Only available from the review step. Arms the submission guard so a
    /// second call cannot double-submit; the caller reports the outcome via
    /// [`AssessmentSession::submission_failed`] (which re-arms for retry)
    /// or [`AssessmentSession::submission_succeeded`].
    pub fn finish(&mut self) -> Result<AssessmentAnswers, FlowError> {
        if self.current_step() != StepKey::Review {
            return Err(FlowError::NotAtReview);
        }
        match self.submission {
            SubmissionState::InFlight => Err(FlowError::SubmissionInFlight),
            SubmissionState::Completed => Err(FlowError::AlreadySubmitted),
            SubmissionState::Idle => {
                self.submission = SubmissionState::InFlight;
                Ok(self.answers)
            }
        }
    }

    /// The in-flight submission failed; allow the user to retry.
    pub fn submission_failed(&mut self) {
        if self.submission == SubmissionState::InFlight {
            self.submission = SubmissionState::Idle;
        }
    }

    /// The in-flight submission was persisted; the flow is done.
    pub fn submission_succeeded(&mut self) {
        if self.submission == SubmissionState::InFlight {
            self.submission = SubmissionState::Completed;
        }
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}
