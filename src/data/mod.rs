//! Database repository layer.
//!
//! `repository` provides generic single-table CRUD over any UUID-keyed entity;
//! per-resource modules add their secondary-key queries and convert entity
//! models to domain models at the infrastructure boundary.

pub mod repository;
pub mod user;

#[cfg(test)]
mod test;
