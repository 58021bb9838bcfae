use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::checklist::{CreateFormResponseDto, FormResponseDto},
};

pub async fn get_responses() -> Result<Vec<FormResponseDto>, ApiError> {
    let request = get("/api/responses");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_response(response_id: i32) -> Result<FormResponseDto, ApiError> {
    let url = format!("/api/responses/{}", response_id);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_response(payload: CreateFormResponseDto) -> Result<FormResponseDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/responses").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_response(response_id: i32) -> Result<(), ApiError> {
    let url = format!("/api/responses/{}", response_id);
    let request = delete(&url);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}
