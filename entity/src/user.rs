use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Structured metadata stored as JSON alongside each user.
///
/// Note that `default_facility` is not required to be a member of
/// `facilities`; no cross-field constraint exists in storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct UserMetadata {
    pub facilities: Vec<String>,
    pub default_facility: String,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Identifier issued by the external identity provider.
    #[sea_orm(unique)]
    pub auth0_id: String,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub metadata: Option<UserMetadata>,

    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
