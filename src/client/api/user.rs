use crate::{
    client::{
        api::helper::{get, parse_response, post, put, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        role::Role,
        user::{CreateUserDto, UpdateUserRoleDto, UserListItemDto},
    },
};

pub async fn get_all_users() -> Result<Vec<UserListItemDto>, ApiError> {
    let request = get("/api/users");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn create_user(payload: CreateUserDto) -> Result<UserListItemDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/users").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn update_user_role(user_id: i32, role: Role) -> Result<UserListItemDto, ApiError> {
    let url = format!("/api/users/{}/role", user_id);
    let body = serialize_json(&UpdateUserRoleDto { role })?;
    let request = put(&url).body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}
