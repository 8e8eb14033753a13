pub mod matches;
pub mod not_found;
