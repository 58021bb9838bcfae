use crate::{
    client::{
        api::helper::{
            get, parse_empty_response, parse_response, post, send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::user::{EmailDto, LoginDto, OtpVerifyDto, PasswordResetConfirmDto, SetupDto, UserDto},
};

/// Retrieves the signed-in user, `None` when there is no session.
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let request = get("/api/auth/user");
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn login(email: String, password: String) -> Result<UserDto, ApiError> {
    let body = serialize_json(&LoginDto { email, password })?;
    let request = post("/api/auth/login").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

/// Asks the server to issue a one-time login code for the e-mail.
pub async fn request_login_code(email: String) -> Result<(), ApiError> {
    let body = serialize_json(&EmailDto { email })?;
    let request = post("/api/auth/otp").body(body);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}

pub async fn verify_login_code(email: String, code: String) -> Result<UserDto, ApiError> {
    let body = serialize_json(&OtpVerifyDto { email, code })?;
    let request = post("/api/auth/otp/verify").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn request_password_reset(email: String) -> Result<(), ApiError> {
    let body = serialize_json(&EmailDto { email })?;
    let request = post("/api/auth/password-reset").body(body);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}

pub async fn confirm_password_reset(token: String, password: String) -> Result<(), ApiError> {
    let body = serialize_json(&PasswordResetConfirmDto { token, password })?;
    let request = post("/api/auth/password-reset/confirm").body(body);
    let response = send_request(request).await?;
    parse_empty_response(response).await
}

/// Creates the first manager account and signs it in.
pub async fn setup(payload: SetupDto) -> Result<UserDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/auth/setup").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}
