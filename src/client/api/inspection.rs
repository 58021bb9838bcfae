use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::{
        container::FormType,
        inspection::{CreateInspectionDto, InspectionDto},
    },
};

/// Lists inspections, optionally restricted to one inspection form.
pub async fn get_inspections(form_type: Option<FormType>) -> Result<Vec<InspectionDto>, ApiError> {
    let url = match form_type {
        Some(form_type) => format!("/api/inspections?form_type={}", form_type.slug()),
        None => "/api/inspections".to_string(),
    };
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_inspection(inspection_id: i32) -> Result<InspectionDto, ApiError> {
    let url = format!("/api/inspections/{}", inspection_id);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_inspection(payload: CreateInspectionDto) -> Result<InspectionDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/inspections").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_inspection(inspection_id: i32) -> Result<(), ApiError> {
    let url = format!("/api/inspections/{}", inspection_id);
    let request = delete(&url);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}
