use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserRoleDto, UserListItemDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user administration endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List every account, including ones whose stored role is not recognised.
///
/// # Access Control
/// - `ManageUsers` - Managers only
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users ordered by name", body = Vec<UserListItemDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageUsers])
        .await?;

    let users = UserService::new(&state.db).get_all().await?;
    let users_dto: Vec<UserListItemDto> = users.into_iter().map(|u| u.into_list_item()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Create an account.
///
/// # Access Control
/// - `ManageUsers` - Managers only
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Invalid fields or e-mail already in use
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserListItemDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageUsers])
        .await?;

    let user = UserService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(user.into_list_item())))
}

/// Change a user's role.
///
/// # Access Control
/// - `ManageUsers` - Managers only
#[utoipa::path(
    put,
    path = "/api/users/{user_id}/role",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserRoleDto,
    responses(
        (status = 200, description = "Role updated", body = UserListItemDto),
        (status = 400, description = "Manager tried to demote themselves", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a manager", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_role(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageUsers])
        .await?;

    let user = UserService::new(&state.db)
        .update_role(&actor, user_id, payload.role)
        .await?;

    Ok((StatusCode::OK, Json(user.into_list_item())))
}
