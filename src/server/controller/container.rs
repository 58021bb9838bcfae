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
        container::{ContainerDto, CreateContainerDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::container::ContainerService,
        state::AppState,
    },
};

/// Tag for grouping container endpoints in OpenAPI documentation
pub static CONTAINER_TAG: &str = "container";

/// List every container, newest first.
///
/// # Access Control
/// Any signed-in user with a recognised role.
#[utoipa::path(
    get,
    path = "/api/containers",
    tag = CONTAINER_TAG,
    responses(
        (status = 200, description = "All containers", body = Vec<ContainerDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_containers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let containers = ContainerService::new(&state.db).get_all().await?;
    let containers_dto: Vec<ContainerDto> = containers
        .into_iter()
        .map(|c| c.into_dto(&state.app_url))
        .collect();

    Ok((StatusCode::OK, Json(containers_dto)))
}

/// Register a container.
///
/// # Access Control
/// - `ManageContainers` - Managers only
///
/// # Returns
/// - `201 Created` - Container with its form link
/// - `400 Bad Request` - Blank name
/// - `403 Forbidden` - Not a manager
#[utoipa::path(
    post,
    path = "/api/containers",
    tag = CONTAINER_TAG,
    request_body = CreateContainerDto,
    responses(
        (status = 201, description = "Container created", body = ContainerDto),
        (status = 400, description = "Invalid container data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_container(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateContainerDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageContainers])
        .await?;

    let container = ContainerService::new(&state.db)
        .create(payload, &user)
        .await?;

    Ok((StatusCode::CREATED, Json(container.into_dto(&state.app_url))))
}

/// Get one container. Checklist pages use it to show which container is being inspected.
#[utoipa::path(
    get,
    path = "/api/containers/{container_id}",
    tag = CONTAINER_TAG,
    params(
        ("container_id" = i32, Path, description = "Container ID")
    ),
    responses(
        (status = 200, description = "Container", body = ContainerDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Container not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_container(
    State(state): State<AppState>,
    session: Session,
    Path(container_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let container = ContainerService::new(&state.db)
        .get_by_id(container_id)
        .await?;

    Ok((StatusCode::OK, Json(container.into_dto(&state.app_url))))
}

/// Delete a container. Its responses and inspections are kept without the link.
///
/// # Access Control
/// - `ManageContainers` - Managers only
#[utoipa::path(
    delete,
    path = "/api/containers/{container_id}",
    tag = CONTAINER_TAG,
    params(
        ("container_id" = i32, Path, description = "Container ID")
    ),
    responses(
        (status = 204, description = "Container deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a manager", body = ErrorDto),
        (status = 404, description = "Container not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_container(
    State(state): State<AppState>,
    session: Session,
    Path(container_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageContainers])
        .await?;

    ContainerService::new(&state.db)
        .delete(container_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
