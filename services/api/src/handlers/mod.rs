pub mod assessment;
pub mod auth;
pub mod dashboard;
pub mod event;
pub mod recommend;
pub mod user;
