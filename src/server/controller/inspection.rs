use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        container::FormType,
        format::today_br,
        inspection::{CreateInspectionDto, InspectionDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::inspection::InspectionService,
        state::AppState,
    },
};

/// Tag for grouping inspection endpoints in OpenAPI documentation
pub static INSPECTION_TAG: &str = "inspection";

/// Query parameters for listing inspections.
///
/// The slug is kept as text so an unknown value is answered with an `ErrorDto` instead of
/// axum's plain-text query rejection.
#[derive(Deserialize)]
pub struct InspectionFilterParam {
    /// Restrict to one inspection form, e.g. `inspecaoVeicular`.
    pub form_type: Option<String>,
}

impl InspectionFilterParam {
    /// Resolves the slug to an inspection form. A blank slug means no filter.
    ///
    /// # Returns
    /// - `Ok(None)` - No filter requested
    /// - `Ok(Some(FormType))` - One of the three inspection forms
    /// - `Err(AppError::BadRequest)` - Unknown slug, or the container checklist slug
    pub fn form_type(&self) -> Result<Option<FormType>, AppError> {
        let Some(slug) = self.form_type.as_deref().map(str::trim).filter(|s| !s.is_empty())
        else {
            return Ok(None);
        };

        FormType::from_slug(slug)
            .filter(FormType::is_inspection)
            .map(Some)
            .ok_or_else(|| AppError::BadRequest(format!("Tipo de formulário inválido: {}", slug)))
    }
}

/// List inspections newest first, optionally for one form.
///
/// # Access Control
/// - `ViewResponses` - Managers only
#[utoipa::path(
    get,
    path = "/api/inspections",
    tag = INSPECTION_TAG,
    params(
        ("form_type" = Option<FormType>, Query, description = "Inspection form slug")
    ),
    responses(
        (status = 200, description = "Inspections", body = Vec<InspectionDto>),
        (status = 400, description = "Unknown form type", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a manager", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inspections(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<InspectionFilterParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewResponses])
        .await?;

    let form_type = params.form_type()?;
    let inspections = InspectionService::new(&state.db)
        .get_all(form_type)
        .await?;
    let inspections_dto: Vec<InspectionDto> =
        inspections.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(inspections_dto)))
}

/// Submit a maintenance execution, vehicle or vessel inspection.
///
/// # Access Control
/// - `SubmitChecklist` - Managers and technicians
///
/// # Returns
/// - `201 Created` - Stored inspection
/// - `400 Bad Request` - Missing fields, bad date, missing damage details or mismatched form
/// - `404 Not Found` - Linked container does not exist
#[utoipa::path(
    post,
    path = "/api/inspections",
    tag = INSPECTION_TAG,
    request_body = CreateInspectionDto,
    responses(
        (status = 201, description = "Inspection stored", body = InspectionDto),
        (status = 400, description = "Invalid inspection", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Role may not submit inspections", body = ErrorDto),
        (status = 404, description = "Container not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_inspection(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateInspectionDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SubmitChecklist])
        .await?;

    let inspection = InspectionService::new(&state.db)
        .submit(payload, &user, today_br())
        .await?;

    Ok((StatusCode::CREATED, Json(inspection.into_dto())))
}

/// Get one inspection.
///
/// # Access Control
/// - `ViewResponses` - Managers only
#[utoipa::path(
    get,
    path = "/api/inspections/{inspection_id}",
    tag = INSPECTION_TAG,
    params(
        ("inspection_id" = i32, Path, description = "Inspection ID")
    ),
    responses(
        (status = 200, description = "Inspection", body = InspectionDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a manager", body = ErrorDto),
        (status = 404, description = "Inspection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inspection(
    State(state): State<AppState>,
    session: Session,
    Path(inspection_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ViewResponses])
        .await?;

    let inspection = InspectionService::new(&state.db)
        .get_by_id(inspection_id)
        .await?;

    Ok((StatusCode::OK, Json(inspection.into_dto())))
}

/// Delete one inspection.
///
/// # Access Control
/// - `ManageResponses` - Managers only
#[utoipa::path(
    delete,
    path = "/api/inspections/{inspection_id}",
    tag = INSPECTION_TAG,
    params(
        ("inspection_id" = i32, Path, description = "Inspection ID")
    ),
    responses(
        (status = 204, description = "Inspection deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a manager", body = ErrorDto),
        (status = 404, description = "Inspection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_inspection(
    State(state): State<AppState>,
    session: Session,
    Path(inspection_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageResponses])
        .await?;

    InspectionService::new(&state.db)
        .delete(inspection_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
