use ayursutra_core::models::answers::{
    AnswerValue, BodyFrame, Climate, Digestion, Energy, Mind, QuestionKey, SkinHair, Sleep,
};
use ayursutra_flow::{
    AssessmentSession, BackAction, FlowError, StepKey, StepStatus, SubmissionState,
};

/// Answer the current question and move on. Panics if called on review.
fn answer_current(session: &mut AssessmentSession) {
    let value = match session.current_step() {
        StepKey::Body => AnswerValue::Body(BodyFrame::Sturdy),
        StepKey::Skin => AnswerValue::Skin(SkinHair::Oily),
        StepKey::Digestion => AnswerValue::Digestion(Digestion::Slow),
        StepKey::Energy => AnswerValue::Energy(Energy::Steady),
        StepKey::Sleep => AnswerValue::Sleep(Sleep::Heavy),
        StepKey::Climate => AnswerValue::Climate(Climate::Damp),
        StepKey::Mind => AnswerValue::Mind(Mind::Calm),
        StepKey::Review => panic!("review has no answer"),
    };
    session.select_answer(value);
    session.advance();
}

#[test]
fn new_session_starts_at_body_with_everything_pending() {
    let session = AssessmentSession::new();
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.current_step(), StepKey::Body);
    assert_eq!(session.steps().len(), 8);
    for step in session.steps() {
        assert_eq!(session.status(*step), StepStatus::Pending);
    }
    assert!(session.answers().is_empty());
    assert_eq!(session.submission(), SubmissionState::Idle);
}

#[test]
fn step_keys_map_to_their_questions_and_back() {
    assert_eq!(StepKey::Review.question(), None);
    for key in QuestionKey::ALL {
        assert_eq!(StepKey::from_question(key).question(), Some(key));
    }
}

#[test]
fn back_from_the_first_step_signals_exit_not_underflow() {
    let mut session = AssessmentSession::new();
    assert_eq!(session.back(), BackAction::ExitFlow);
    assert_eq!(session.current_index(), 0);
}

#[test]
fn advance_clamps_at_the_review_step() {
    let mut session = AssessmentSession::new();
    for _ in 0..20 {
        session.advance();
    }
    assert_eq!(session.current_index(), 7);
    assert_eq!(session.current_step(), StepKey::Review);
}

#[test]
fn select_answer_marks_answered_without_moving_the_cursor() {
    let mut session = AssessmentSession::new();
    session.select_answer(AnswerValue::Body(BodyFrame::Light));
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.status(StepKey::Body), StepStatus::Answered);
    assert_eq!(session.answers().body, Some(BodyFrame::Light));
}

#[test]
fn skip_marks_skipped_and_moves_forward() {
    let mut session = AssessmentSession::new();
    session.skip();
    assert_eq!(session.status(StepKey::Body), StepStatus::Skipped);
    assert_eq!(session.current_index(), 1);
}

#[test]
fn advancing_past_a_skipped_step_does_not_resurrect_it_as_answered() {
    let mut session = AssessmentSession::new();
    session.skip();
    session.back();
    // Leaving the skipped step with advance() must keep it skipped.
    session.advance();
    assert_eq!(session.status(StepKey::Body), StepStatus::Skipped);
}

#[test]
fn reanswering_a_skipped_step_overwrites_it_to_answered() {
    let mut session = AssessmentSession::new();
    session.skip();
    session.back();
    session.select_answer(AnswerValue::Body(BodyFrame::Medium));
    assert_eq!(session.status(StepKey::Body), StepStatus::Answered);
    assert_eq!(session.answers().body, Some(BodyFrame::Medium));
}

#[test]
fn skip_does_not_demote_an_answered_step() {
    let mut session = AssessmentSession::new();
    session.select_answer(AnswerValue::Body(BodyFrame::Light));
    session.skip();
    assert_eq!(session.status(StepKey::Body), StepStatus::Answered);
}

#[test]
fn jump_ahead_into_untouched_territory_is_a_no_op() {
    let mut session = AssessmentSession::new();
    session.advance(); // at index 1, furthest 1
    assert!(!session.jump_to(5));
    assert_eq!(session.current_index(), 1);
    assert!(!session.jump_to(42));
    assert_eq!(session.current_index(), 1);
}

#[test]
fn jump_backward_is_always_allowed() {
    let mut session = AssessmentSession::new();
    session.advance();
    session.advance();
    session.advance();
    assert!(session.jump_to(1));
    assert_eq!(session.current_index(), 1);
    assert!(session.jump_to(0));
    assert_eq!(session.current_index(), 0);
}

#[test]
fn visited_steps_stay_jumpable_after_backtracking() {
    // Complete all seven questions, walk back six times, then jump straight
    // to review: it was visited in the straight-through pass so it must
    // remain reachable.
    let mut session = AssessmentSession::new();
    for _ in 0..7 {
        answer_current(&mut session);
    }
    assert_eq!(session.current_step(), StepKey::Review);

    for _ in 0..6 {
        session.back();
    }
    assert_eq!(session.current_index(), 1);

    assert!(session.jump_to(7));
    assert_eq!(session.current_step(), StepKey::Review);
}

#[test]
fn finish_is_rejected_before_the_review_step() {
    let mut session = AssessmentSession::new();
    assert_eq!(session.finish(), Err(FlowError::NotAtReview));
}

#[test]
fn finish_yields_the_answers_exactly_once() {
    let mut session = AssessmentSession::new();
    for _ in 0..7 {
        answer_current(&mut session);
    }
    let answers = session.finish().expect("first finish succeeds");
    assert_eq!(answers.answered_count(), 7);

    // A second finish while the submission is in flight must not
    // double-submit.
    assert_eq!(session.finish(), Err(FlowError::SubmissionInFlight));

    session.submission_succeeded();
    assert!(session.is_completed());
    assert_eq!(session.finish(), Err(FlowError::AlreadySubmitted));
}

#[test]
fn failed_submission_rearms_finish_for_retry() {
    let mut session = AssessmentSession::new();
    for _ in 0..7 {
        answer_current(&mut session);
    }
    session.finish().expect("first finish succeeds");
    session.submission_failed();
    assert_eq!(session.submission(), SubmissionState::Idle);
    assert!(session.finish().is_ok());
}

#[test]
fn preview_score_tracks_recorded_answers() {
    let mut session = AssessmentSession::new();
    let uniform = session.preview_score();
    assert_eq!(uniform.total(), 100.0);

    session.select_answer(AnswerValue::Body(BodyFrame::Sturdy));
    let scored = session.preview_score();
    assert_eq!(scored.kapha, 100.0);
}

#[test]
fn shuffled_order_anchors_body_first_and_review_last() {
    for seed in [0u64, 1, 7, 42, 1234567] {
        let session = AssessmentSession::with_shuffled_order(seed);
        let steps = session.steps();
        assert_eq!(steps.len(), 8);
        assert_eq!(steps[0], StepKey::Body);
        assert_eq!(steps[7], StepKey::Review);
        // All seven questions present exactly once.
        for key in [
            StepKey::Skin,
            StepKey::Digestion,
            StepKey::Energy,
            StepKey::Sleep,
            StepKey::Climate,
            StepKey::Mind,
        ] {
            assert_eq!(steps.iter().filter(|s| **s == key).count(), 1);
        }
    }
}

#[test]
fn shuffled_order_is_stable_for_a_given_seed() {
    let a = AssessmentSession::with_shuffled_order(99);
    let b = AssessmentSession::with_shuffled_order(99);
    assert_eq!(a.steps(), b.steps());
}

#[test]
fn checkpoint_round_trip_preserves_the_session() {
    let mut session = AssessmentSession::with_shuffled_order(7);
    session.select_answer(AnswerValue::Body(BodyFrame::Light));
    session.advance();
    session.skip();

    let json = serde_json::to_string(&session).expect("serialize");
    let restored: AssessmentSession = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored.steps(), session.steps());
    assert_eq!(restored.current_index(), session.current_index());
    assert_eq!(restored.answers(), session.answers());
    assert_eq!(restored.submission(), session.submission());
    assert_eq!(
        restored.status(StepKey::Body),
        session.status(StepKey::Body)
    );
}
