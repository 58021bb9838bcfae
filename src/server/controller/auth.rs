use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{EmailDto, LoginDto, OtpVerifyDto, PasswordResetConfirmDto, SetupDto, UserDto},
    },
    server::{
        error::AppError, middleware::session::AuthSession, service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Sign in with e-mail and password.
///
/// # Returns
/// - `200 OK` - Signed-in user
/// - `401 Unauthorized` - Wrong credentials or unrecognised role
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = UserDto),
        (status = 401, description = "Invalid credentials or role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, &state.code_service)
        .login_with_password(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Request a one-time login code.
///
/// Answers 204 whether or not an account uses the e-mail.
///
/// # Returns
/// - `204 No Content` - Request accepted
/// - `400 Bad Request` - Malformed e-mail
#[utoipa::path(
    post,
    path = "/api/auth/otp",
    tag = AUTH_TAG,
    request_body = EmailDto,
    responses(
        (status = 204, description = "Code issued if the account exists"),
        (status = 400, description = "Malformed e-mail", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_login_code(
    State(state): State<AppState>,
    Json(payload): Json<EmailDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.code_service)
        .request_login_code(&payload.email)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Sign in with a one-time login code.
///
/// # Returns
/// - `200 OK` - Signed-in user
/// - `400 Bad Request` - Wrong, expired or used code
/// - `401 Unauthorized` - Unrecognised role
#[utoipa::path(
    post,
    path = "/api/auth/otp/verify",
    tag = AUTH_TAG,
    request_body = OtpVerifyDto,
    responses(
        (status = 200, description = "Signed in", body = UserDto),
        (status = 400, description = "Invalid or expired code", body = ErrorDto),
        (status = 401, description = "Unrecognised role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_login_code(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<OtpVerifyDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, &state.code_service)
        .verify_login_code(&payload.email, &payload.code)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Request a password reset link.
///
/// Answers 204 whether or not an account uses the e-mail.
#[utoipa::path(
    post,
    path = "/api/auth/password-reset",
    tag = AUTH_TAG,
    request_body = EmailDto,
    responses(
        (status = 204, description = "Reset link issued if the account exists"),
        (status = 400, description = "Malformed e-mail", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn request_password_reset(
    State(state): State<AppState>,
    Json(payload): Json<EmailDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.code_service)
        .request_password_reset(&payload.email, &state.app_url)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Set a new password with a reset token.
#[utoipa::path(
    post,
    path = "/api/auth/password-reset/confirm",
    tag = AUTH_TAG,
    request_body = PasswordResetConfirmDto,
    responses(
        (status = 204, description = "Password replaced"),
        (status = 400, description = "Invalid token or password too short", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_password_reset(
    State(state): State<AppState>,
    Json(payload): Json<PasswordResetConfirmDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.code_service)
        .confirm_password_reset(&payload.token, &payload.password)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Create the first manager account.
///
/// Only available while no manager exists, with the setup code printed in the server log.
///
/// # Returns
/// - `201 Created` - Manager created and signed in
/// - `400 Bad Request` - Invalid fields or e-mail already in use
/// - `403 Forbidden` - A manager exists or the setup code is wrong
#[utoipa::path(
    post,
    path = "/api/auth/setup",
    tag = AUTH_TAG,
    request_body = SetupDto,
    responses(
        (status = 201, description = "Manager created", body = UserDto),
        (status = 400, description = "Invalid setup data", body = ErrorDto),
        (status = 403, description = "Setup unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn setup(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SetupDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db, &state.code_service)
        .setup(payload)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Sign out and go back to the login page.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Session cleared, redirect to /login")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Redirect::to("/login"))
}

/// Get the signed-in user.
///
/// Returns `null` when nobody is signed in, the user no longer exists or their stored role
/// is not recognised.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed-in user or null", body = Option<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let Some(user_id) = AuthSession::new(&session).get_user_id().await? else {
        return Ok((StatusCode::OK, Json(None::<UserDto>)));
    };

    let user = AuthService::new(&state.db, &state.code_service)
        .current_user(user_id)
        .await?;

    Ok((StatusCode::OK, Json(user.map(|u| u.into_dto()))))
}
