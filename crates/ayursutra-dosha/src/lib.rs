//! ayursutra-dosha
//!
//! The dosha self-assessment questionnaire and its scoring model.
//! Pure data and pure functions — no I/O. Defines the seven questions,
//! the per-option weight table, and the analysis derived from a set of
//! answers (dominant dosha, balance status, recommendations).

pub mod analysis;
pub mod questionnaire;
pub mod scoring;
