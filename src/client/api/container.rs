use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::container::{ContainerDto, CreateContainerDto},
};

pub async fn get_containers() -> Result<Vec<ContainerDto>, ApiError> {
    let request = get("/api/containers");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_container(container_id: i32) -> Result<ContainerDto, ApiError> {
    let url = format!("/api/containers/{}", container_id);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_container(payload: CreateContainerDto) -> Result<ContainerDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/containers").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn delete_container(container_id: i32) -> Result<(), ApiError> {
    let url = format!("/api/containers/{}", container_id);
    let request = delete(&url);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}
