//! User data repository for database operations.
//!
//! Wraps the generic `Repository` with the user table's secondary-key lookup
//! and converts entity models to domain models at the infrastructure boundary.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};
use uuid::Uuid;

use crate::{
    data::repository::{Repository, TableRecord},
    model::user::User,
};

impl TableRecord for entity::user::ActiveModel {
    fn set_key(&mut self, id: Uuid) {
        self.id = ActiveValue::Set(id);
    }

    fn fill_insert_defaults(&mut self, id: Uuid, now: DateTime<Utc>) {
        if self.id.is_not_set() {
            self.id = ActiveValue::Set(id);
        }
        if self.created_at.is_not_set() {
            self.created_at = ActiveValue::Set(now);
        }
        if self.updated_at.is_not_set() {
            self.updated_at = ActiveValue::Set(now);
        }
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = ActiveValue::Set(now);
    }
}

/// Repository providing database operations for user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn base(&self) -> Repository<'a, entity::prelude::User, entity::user::ActiveModel> {
        Repository::new(self.db)
    }

    /// Returns every user in storage order.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = self.base().get_all().await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Finds a user by primary key.
    ///
    /// # Arguments
    /// - `id` - User id to look up
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, DbErr> {
        let entity = self.base().get_by_id(id).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by their external identity provider id.
    ///
    /// Single-row lookup on the unique secondary key.
    ///
    /// # Arguments
    /// - `auth0_id` - External identity provider id
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that auth0 id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_auth0_id(&self, auth0_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Auth0Id.eq(auth0_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Inserts a user, generating id and timestamps when unset.
    ///
    /// # Arguments
    /// - `active_model` - Columns to insert
    ///
    /// # Returns
    /// - `Ok(User)` - The inserted user including generated columns
    /// - `Err(DbErr)` - Duplicate auth0 id or other database error
    pub async fn create(&self, active_model: entity::user::ActiveModel) -> Result<User, DbErr> {
        let entity = self.base().create(active_model).await?;

        Ok(User::from_entity(entity))
    }

    /// Merges the set columns into an existing user and refreshes `updated_at`.
    ///
    /// # Arguments
    /// - `id` - User id to update
    /// - `active_model` - Columns to overwrite
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: Uuid,
        active_model: entity::user::ActiveModel,
    ) -> Result<Option<User>, DbErr> {
        let entity = self.base().update(id, active_model).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Removes a user by id.
    ///
    /// # Arguments
    /// - `id` - User id to delete
    ///
    /// # Returns
    /// - `Ok(true)` - A user was removed
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        self.base().delete(id).await
    }
}
