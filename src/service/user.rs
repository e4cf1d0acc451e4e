//! User service for business logic.
//!
//! Thin orchestration over the user repository: converts operation parameters
//! into active models and returns domain models. Lookups that find nothing
//! return `None` rather than an error; controllers decide the response shape.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, UpdateUserParam, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users in storage order
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;
        Ok(users)
    }

    /// Retrieves a user by id.
    ///
    /// # Arguments
    /// - `id` - User id to look up
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).get_by_id(id).await?;
        Ok(user)
    }

    /// Retrieves a user by their external identity provider id.
    ///
    /// # Arguments
    /// - `auth0_id` - External identity provider id
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that auth0 id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_auth0_id(&self, auth0_id: &str) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_auth0_id(auth0_id)
            .await?;
        Ok(user)
    }

    /// Creates a user from validated parameters.
    ///
    /// # Arguments
    /// - `param` - Auth0 id and facility metadata
    ///
    /// # Returns
    /// - `Ok(User)` - The created user including generated id and timestamps
    /// - `Err(AppError::DbErr)` - Duplicate auth0 id or other database error
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .create(param.into_active_model())
            .await?;
        Ok(user)
    }

    /// Applies a partial update to a user.
    ///
    /// # Arguments
    /// - `id` - User id to update
    /// - `param` - Fields to replace; `None` fields are left untouched
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user with refreshed `updated_at`
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, id: Uuid, param: UpdateUserParam) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db)
            .update(id, param.into_active_model())
            .await?;
        Ok(user)
    }

    /// Deletes a user by id.
    ///
    /// # Arguments
    /// - `id` - User id to delete
    ///
    /// # Returns
    /// - `Ok(true)` - A user was removed
    /// - `Ok(false)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let removed = UserRepository::new(self.db).delete(id).await?;
        Ok(removed)
    }
}
