//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::user::UserMetadata;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .auth0_id("auth0|123456789")
///     .default_facility("facility-2")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    auth0_id: String,
    facilities: Vec<String>,
    default_facility: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID
    /// - auth0_id: `"auth0|user_{n}"` where n is auto-incremented
    /// - facilities: `["facility-{n}"]`
    /// - default_facility: `"facility-{n}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: Uuid::new_v4(),
            auth0_id: format!("auth0|user_{}", n),
            facilities: vec![format!("facility-{}", n)],
            default_facility: format!("facility-{}", n),
        }
    }

    /// Sets the primary key for the user.
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Sets the external identity provider id for the user.
    pub fn auth0_id(mut self, auth0_id: impl Into<String>) -> Self {
        self.auth0_id = auth0_id.into();
        self
    }

    /// Sets the facility list stored in the user's metadata.
    pub fn facilities(mut self, facilities: Vec<String>) -> Self {
        self.facilities = facilities;
        self
    }

    /// Sets the default facility stored in the user's metadata.
    pub fn default_facility(mut self, default_facility: impl Into<String>) -> Self {
        self.default_facility = default_facility.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            auth0_id: ActiveValue::Set(self.auth0_id),
            metadata: ActiveValue::Set(Some(UserMetadata {
                facilities: self.facilities,
                default_facility: self.default_facility,
            })),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
