use crate::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UpdateUserParam, UserMetadata},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod delete;
mod find_by_auth0_id;
mod get_all;
mod get_by_id;
mod update;

/// Builds create parameters with a single facility, the way most tests
/// need them.
fn create_param(auth0_id: &str) -> CreateUserParam {
    CreateUserParam {
        auth0_id: auth0_id.to_string(),
        metadata: UserMetadata {
            facilities: vec!["f1".to_string()],
            default_facility: "f1".to_string(),
        },
    }
}
