use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    extract::{UuidPath, ValidatedJson},
    model::user::{CreateUserParam, UpdateUserParam, User},
    schema::{
        api::{DeleteResultDto, MessageDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    service::user::UserService,
    state::AppState,
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// POST /api/users - Create a new user.
///
/// Creates a user from the insert-shape body. The id and both timestamps are
/// generated server-side and returned with the entity.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Validated user creation data (auth0Id and metadata)
///
/// # Returns
/// - `201 Created` - Successfully created user
/// - `400 Bad Request` - Body failed schema validation
/// - `500 Internal Server Error` - Database error, including duplicate auth0Id
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Invalid user data", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateUserParam::from_dto(payload);
    let user = UserService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// GET /api/users - Get all users.
///
/// Returns every user in storage order. No pagination.
///
/// # Returns
/// - `200 OK` - JSON array of users (empty if none exist)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let users_dto: Vec<UserDto> = users.into_iter().map(User::into_dto).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// GET /api/users/{id} - Get a user by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - User id (must parse as a UUID)
///
/// # Returns
/// - `200 OK` - The matching user
/// - `400 Bad Request` - Id is not a valid UUID
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = uuid::Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 400, description = "Invalid UUID format", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /api/users/auth0/{id} - Get a user by external auth id.
///
/// Single-row lookup on the unique secondary key issued by the external
/// identity provider. The parameter is a plain string, not a UUID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `auth0_id` - External identity provider id
///
/// # Returns
/// - `200 OK` - The matching user
/// - `404 Not Found` - No user with that auth0 id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/auth0/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "External identity provider id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user_by_auth0_id(
    State(state): State<AppState>,
    Path(auth0_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .get_by_auth0_id(&auth0_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// PATCH /api/users/{id} - Partially update a user.
///
/// Replaces the supplied fields on the existing user and refreshes
/// `updatedAt`. Fields absent from the body are left untouched.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - User id (must parse as a UUID)
/// - `payload` - Validated partial insert-shape body
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Invalid UUID or body failed schema validation
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = uuid::Uuid, Path, description = "User id")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Invalid UUID format or user data", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
    ValidatedJson(payload): ValidatedJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateUserParam::from_dto(payload);
    let user = UserService::new(&state.db)
        .update(id, param)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// DELETE /api/users/{id} - Delete a user by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - User id (must parse as a UUID)
///
/// # Returns
/// - `200 OK` - `{success: true}`
/// - `400 Bad Request` - Id is not a valid UUID
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = uuid::Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Successfully deleted user", body = DeleteResultDto),
        (status = 400, description = "Invalid UUID format", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UuidPath(id): UuidPath,
) -> Result<impl IntoResponse, AppError> {
    let removed = UserService::new(&state.db).delete(id).await?;

    if !removed {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok((StatusCode::OK, Json(DeleteResultDto { success: true })))
}
