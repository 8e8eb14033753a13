pub mod health;
pub mod matches;
pub mod request;
