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
        checklist::{CreateFormResponseDto, FormResponseDto, ResponseContent},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::form_response::FormResponseService,
        state::AppState,
    },
};

/// Tag for grouping container checklist response endpoints in OpenAPI documentation
pub static FORM_RESPONSE_TAG: &str = "form_response";

/// List every container checklist response, newest first.
///
/// # Access Control
/// - `ViewResponses` - Managers only
#[utoipa::path(
    get,
    path = "/api/responses",
    tag = FORM_RESPONSE_TAG,
    responses(
        (status = 200, description = "All responses", body = Vec<FormResponseDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_responses(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewResponses])
        .await?;

    let responses = FormResponseService::new(&state.db).get_all().await?;
    let responses_dto: Vec<FormResponseDto> =
        responses.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(responses_dto)))
}

/// Submit checklist answers or an auditor comment for a container.
///
/// # Access Control
/// - `SubmitChecklist` - Managers and technicians, for answers
/// - `SubmitAuditorComment` - Managers and auditors, for comments
///
/// # Returns
/// - `201 Created` - Stored response
/// - `400 Bad Request` - Nothing filled in, or the container uses another form
/// - `403 Forbidden` - Role may not submit this kind of content
/// - `404 Not Found` - Container does not exist
#[utoipa::path(
    post,
    path = "/api/responses",
    tag = FORM_RESPONSE_TAG,
    request_body = CreateFormResponseDto,
    responses(
        (status = 201, description = "Response stored", body = FormResponseDto),
        (status = 400, description = "Invalid response", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Role may not submit this content", body = ErrorDto),
        (status = 404, description = "Container not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_response(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateFormResponseDto>,
) -> Result<impl IntoResponse, AppError> {
    let permission = match payload.content {
        ResponseContent::Answers(_) => Permission::SubmitChecklist,
        ResponseContent::AuditorComment(_) => Permission::SubmitAuditorComment,
    };

    let user = AuthGuard::new(&state.db, &session)
        .require(&[permission])
        .await?;

    let response = FormResponseService::new(&state.db)
        .submit(payload, &user)
        .await?;

    Ok((StatusCode::CREATED, Json(response.into_dto())))
}

/// Get one response.
///
/// # Access Control
/// - `ViewResponses` - Managers only
#[utoipa::path(
    get,
    path = "/api/responses/{response_id}",
    tag = FORM_RESPONSE_TAG,
    params(
        ("response_id" = i32, Path, description = "Response ID")
    ),
    responses(
        (status = 200, description = "Response", body = FormResponseDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a manager", body = ErrorDto),
        (status = 404, description = "Response not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_response(
    State(state): State<AppState>,
    session: Session,
    Path(response_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewResponses])
        .await?;

    let response = FormResponseService::new(&state.db)
        .get_by_id(response_id)
        .await?;

    Ok((StatusCode::OK, Json(response.into_dto())))
}

/// Delete one response.
///
/// # Access Control
/// - `ManageResponses` - Managers only
#[utoipa::path(
    delete,
    path = "/api/responses/{response_id}",
    tag = FORM_RESPONSE_TAG,
    params(
        ("response_id" = i32, Path, description = "Response ID")
    ),
    responses(
        (status = 204, description = "Response deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a manager", body = ErrorDto),
        (status = 404, description = "Response not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_response(
    State(state): State<AppState>,
    session: Session,
    Path(response_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageResponses])
        .await?;

    FormResponseService::new(&state.db)
        .delete(response_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
