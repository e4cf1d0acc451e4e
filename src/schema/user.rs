//! Canonical user schema and the route shapes derived from it.
//!
//! `UserDto` is the entity response shape. `CreateUserDto` is the insert
//! shape, and `UpdateUserDto` is the insert shape with every field optional.
//! Validation rules match the stored constraints: a non-empty external auth
//! id and, when metadata is supplied, non-empty facility identifiers and a
//! non-empty default facility. No rule requires the default facility to be a
//! member of the facility list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// User entity as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub auth0_id: String,
    pub metadata: Option<UserMetadataDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Facility metadata attached to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserMetadataDto {
    #[validate(custom(
        function = non_empty_facility_ids,
        message = "Facility ID cannot be empty"
    ))]
    pub facilities: Vec<String>,

    #[validate(length(min = 1, message = "Default facility is required"))]
    pub default_facility: String,
}

/// Request body for creating a user (insert shape).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(length(min = 1, message = "Auth0 ID is required"))]
    pub auth0_id: String,

    #[validate(nested)]
    pub metadata: UserMetadataDto,
}

/// Request body for updating a user: the insert shape with every field
/// optional. Fields that are present are validated with the insert rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(length(min = 1, message = "Auth0 ID is required"))]
    pub auth0_id: Option<String>,

    #[validate(nested)]
    pub metadata: Option<UserMetadataDto>,
}

/// Rejects facility lists containing empty identifiers. The list itself may
/// be empty.
fn non_empty_facility_ids(facilities: &[String]) -> Result<(), ValidationError> {
    if facilities.iter().any(|facility| facility.is_empty()) {
        return Err(ValidationError::new("facility_id_empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(facilities: &[&str], default_facility: &str) -> UserMetadataDto {
        UserMetadataDto {
            facilities: facilities.iter().map(|f| f.to_string()).collect(),
            default_facility: default_facility.to_string(),
        }
    }

    #[test]
    fn accepts_valid_create_payload() {
        let dto = CreateUserDto {
            auth0_id: "auth0|123".to_string(),
            metadata: metadata(&["f1", "f2"], "f1"),
        };

        assert!(dto.validate().is_ok());
    }

    #[test]
    fn rejects_empty_auth0_id() {
        let dto = CreateUserDto {
            auth0_id: String::new(),
            metadata: metadata(&["f1"], "f1"),
        };

        assert!(dto.validate().is_err());
    }

    #[test]
    fn rejects_empty_facility_id() {
        let dto = CreateUserDto {
            auth0_id: "auth0|123".to_string(),
            metadata: metadata(&["f1", ""], "f1"),
        };

        assert!(dto.validate().is_err());
    }

    #[test]
    fn rejects_empty_default_facility() {
        let dto = CreateUserDto {
            auth0_id: "auth0|123".to_string(),
            metadata: metadata(&["f1"], ""),
        };

        assert!(dto.validate().is_err());
    }

    #[test]
    fn default_facility_need_not_be_listed() {
        // No cross-field rule exists between defaultFacility and facilities.
        let dto = CreateUserDto {
            auth0_id: "auth0|123".to_string(),
            metadata: metadata(&["f1"], "f9"),
        };

        assert!(dto.validate().is_ok());
    }

    #[test]
    fn update_with_no_fields_is_valid() {
        let dto = UpdateUserDto::default();

        assert!(dto.validate().is_ok());
    }

    #[test]
    fn update_still_validates_present_fields() {
        let dto = UpdateUserDto {
            auth0_id: Some(String::new()),
            metadata: None,
        };

        assert!(dto.validate().is_err());
    }
}
