//! ayursutra-ai
//!
//! Generative-text boundary: tips, chat replies, and treatment plans via
//! the Google Generative Language API, plus the deterministic fallback
//! content served when the model is unreachable. Every network-touching
//! function returns a `Result`; choosing fallback content on error is the
//! caller's decision, never this crate's.

pub mod chat;
pub mod client;
pub mod error;
pub mod fallback;
pub mod plan;
pub mod tips;

pub use client::GenAiClient;
pub use error::AiError;
