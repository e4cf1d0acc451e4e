//! Business logic layer between controllers and the data layer.

pub mod user;
