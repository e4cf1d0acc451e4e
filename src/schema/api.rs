//! Response shapes shared by every route.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured message body used for not-found and validation responses.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Body returned by a successful delete.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct DeleteResultDto {
    pub success: bool,
}

/// Body returned by the health check route.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
