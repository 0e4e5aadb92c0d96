use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("finish is only available from the review step")]
    NotAtReview,

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("this assessment has already been submitted")]
    AlreadySubmitted,
}
