//! Canned fixture data for integration tests and local development.
//!
//! Fixtures provide a fixed set of records with stable identifiers, unlike
//! factories which generate fresh data per call. Each fixture seeds its
//! records inside a single transaction so a partially loaded set never
//! leaks into the database.

pub mod user;

use sea_orm::{DatabaseConnection, DbErr};

use crate::fixture::user::UserFixture;

/// Loads every fixture set into the database.
///
/// Fixtures are loaded in order to respect potential foreign key constraints.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(())` - All fixture sets seeded
/// - `Err(DbErr)` - Database error; the failing set is fully rolled back
pub async fn load_fixtures(db: &DatabaseConnection) -> Result<(), DbErr> {
    UserFixture::new().seed_records(db).await?;
    Ok(())
}

/// Removes every fixture record from the database.
///
/// Cleared in reverse order to respect potential foreign key constraints.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(())` - All fixture records removed
/// - `Err(DbErr)` - Database error during delete
pub async fn clear_fixtures(db: &DatabaseConnection) -> Result<(), DbErr> {
    UserFixture::new().clear_records(db).await?;
    Ok(())
}
