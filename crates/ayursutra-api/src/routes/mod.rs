pub mod ai;
pub mod assessment;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod questionnaire;
pub mod users;
