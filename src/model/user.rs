//! User domain models and parameters.
//!
//! Provides the domain model for application users plus parameter types for
//! the create and update operations. Conversion between entity models, domain
//! models, and DTOs happens here so the data and controller layers never leak
//! each other's types.

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue;
use uuid::Uuid;

use crate::schema::user::{CreateUserDto, UpdateUserDto, UserDto, UserMetadataDto};

/// User identified by an external identity provider.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Server-generated unique identifier, immutable after creation.
    pub id: Uuid,
    /// Unique identifier issued by the external identity provider.
    pub auth0_id: String,
    /// Facility metadata; absent for rows seeded without it.
    pub metadata: Option<UserMetadata>,
    /// Set once at insert.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every mutation.
    pub updated_at: DateTime<Utc>,
}

/// Facility membership and default selection for a user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserMetadata {
    pub facilities: Vec<String>,
    pub default_facility: String,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            auth0_id: entity.auth0_id,
            metadata: entity.metadata.map(UserMetadata::from_entity),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            auth0_id: self.auth0_id,
            metadata: self.metadata.map(UserMetadata::into_dto),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl UserMetadata {
    pub fn from_entity(entity: entity::user::UserMetadata) -> Self {
        Self {
            facilities: entity.facilities,
            default_facility: entity.default_facility,
        }
    }

    pub fn from_dto(dto: UserMetadataDto) -> Self {
        Self {
            facilities: dto.facilities,
            default_facility: dto.default_facility,
        }
    }

    pub fn into_dto(self) -> UserMetadataDto {
        UserMetadataDto {
            facilities: self.facilities,
            default_facility: self.default_facility,
        }
    }

    fn into_entity(self) -> entity::user::UserMetadata {
        entity::user::UserMetadata {
            facilities: self.facilities,
            default_facility: self.default_facility,
        }
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub auth0_id: String,
    pub metadata: UserMetadata,
}

impl CreateUserParam {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            auth0_id: dto.auth0_id,
            metadata: UserMetadata::from_dto(dto.metadata),
        }
    }

    /// Builds the insert active model. Server-generated columns (id and
    /// timestamps) are left unset; the data layer fills them.
    pub fn into_active_model(self) -> entity::user::ActiveModel {
        entity::user::ActiveModel {
            auth0_id: ActiveValue::Set(self.auth0_id),
            metadata: ActiveValue::Set(Some(self.metadata.into_entity())),
            ..Default::default()
        }
    }
}

/// Parameters for a partial user update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub auth0_id: Option<String>,
    pub metadata: Option<UserMetadata>,
}

impl UpdateUserParam {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            auth0_id: dto.auth0_id,
            metadata: dto.metadata.map(UserMetadata::from_dto),
        }
    }

    /// Builds the update active model with only the supplied fields set.
    /// The data layer sets the key and refreshes the update timestamp.
    pub fn into_active_model(self) -> entity::user::ActiveModel {
        let mut active_model = entity::user::ActiveModel::default();

        if let Some(auth0_id) = self.auth0_id {
            active_model.auth0_id = ActiveValue::Set(auth0_id);
        }
        if let Some(metadata) = self.metadata {
            active_model.metadata = ActiveValue::Set(Some(metadata.into_entity()));
        }

        active_model
    }
}
