//! HTTP request handlers.
//!
//! Controllers convert DTOs to operation parameters, call the service layer,
//! and map domain results back to HTTP responses. Input validation has
//! already happened in the extractors by the time a handler runs.

pub mod health;
pub mod user;

#[cfg(test)]
mod test;
