//! Wire schemas: request/response shapes, validation rules, and OpenAPI models.
//!
//! Each resource declares one canonical entity shape from which its route
//! shapes derive: the entity response, the insert shape (create), and the
//! all-optional insert shape (update). Validation rules live on the request
//! DTOs and run in the extractors before any handler logic.

pub mod api;
pub mod user;
