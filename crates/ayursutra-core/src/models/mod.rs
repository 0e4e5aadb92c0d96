pub mod answers;
pub mod assessment;
pub mod dosha;
pub mod user;
