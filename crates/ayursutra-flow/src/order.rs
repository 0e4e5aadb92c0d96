//! Step ordering.
//!
//! The standard layout presents the questions in their declaration order.
//! A session may instead shuffle the middle six questions with a seeded
//! RNG; body always leads and review always closes, and the order is fixed
//! once per session — reshuffling mid-flow would corrupt back/forward
//! navigation.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::session::StepKey;

pub const STEP_COUNT: usize = 8;

/// Body, the six remaining questions in declaration order, then review.
pub fn standard() -> Vec<StepKey> {
    vec![
        StepKey::Body,
        StepKey::Skin,
        StepKey::Digestion,
        StepKey::Energy,
        StepKey::Sleep,
        StepKey::Climate,
        StepKey::Mind,
        StepKey::Review,
    ]
}

/// Body first and review last, with the middle six shuffled by `seed`.
/// The same seed always yields the same order.
pub fn shuffled(seed: u64) -> Vec<StepKey> {
    let mut middle = [
        StepKey::Skin,
        StepKey::Digestion,
        StepKey::Energy,
        StepKey::Sleep,
        StepKey::Climate,
        StepKey::Mind,
    ];
    let mut rng = StdRng::seed_from_u64(seed);
    middle.shuffle(&mut rng);

    let mut steps = Vec::with_capacity(STEP_COUNT);
    steps.push(StepKey::Body);
    steps.extend(middle);
    steps.push(StepKey::Review);
    steps
}
