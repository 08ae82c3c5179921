pub mod auth;
pub mod mentors;
pub mod subscriptions;
