//! ayursutra-flow
//!
//! The assessment flow state machine: an ordered walk over the seven
//! questions plus a review step, with per-step status tracking, backward
//! navigation, and a guarded one-shot submission. All transitions are pure
//! in-memory state changes; the whole flow is a serializable value so
//! callers checkpoint and restore it explicitly instead of relying on
//! ambient storage.

pub mod error;
pub mod order;
pub mod session;

pub use error::FlowError;
pub use session::{AssessmentSession, BackAction, StepKey, StepStatus, SubmissionState};
