use axum::{
    routing::get,
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{health, user},
    schema::{
        api::{DeleteResultDto, HealthDto, MessageDto},
        user::{CreateUserDto, UpdateUserDto, UserDto, UserMetadataDto},
    },
    state::AppState,
};

/// OpenAPI document generated from the controller annotations.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service API",
        description = "API for user management",
        version = "1.0.0"
    ),
    paths(
        user::create_user,
        user::get_users,
        user::get_user,
        user::get_user_by_auth0_id,
        user::update_user,
        user::delete_user,
        health::health_check,
    ),
    components(schemas(
        UserDto,
        UserMetadataDto,
        CreateUserDto,
        UpdateUserDto,
        MessageDto,
        DeleteResultDto,
        HealthDto,
    ))
)]
struct ApiDoc;

/// Binds every route to its handler and serves the generated API
/// documentation at `/docs`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(user::get_users).post(user::create_user))
        .route(
            "/api/users/{id}",
            get(user::get_user)
                .patch(user::update_user)
                .delete(user::delete_user),
        )
        .route("/api/users/auth0/{id}", get(user::get_user_by_auth0_id))
        .route("/health", get(health::health_check))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
