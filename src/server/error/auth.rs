use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::{api::ErrorDto, role::INVALID_ROLE_MESSAGE};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    #[error("No user in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The stored role is not one of the recognised values.
    ///
    /// Treated like a missing identity: 401 with the invalid role message.
    #[error("User {0} has unrecognised role '{1}'")]
    InvalidRole(i32, String),

    /// The user is signed in but their role lacks a required permission.
    ///
    /// # Fields
    /// - User id
    /// - Description of the denied action, logged server side only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Unknown e-mail, missing password hash or wrong password.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// One-time login code is wrong, expired or already used.
    #[error("Invalid or expired one-time code")]
    InvalidCode,

    /// Password reset token is wrong, expired or already used.
    #[error("Invalid or expired password reset token")]
    InvalidResetToken,

    /// First-run setup was attempted while a manager already exists or with a bad setup code.
    #[error("First-run setup unavailable")]
    SetupUnavailable,
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant is logged at debug level; client-facing messages stay generic so that, for
/// instance, a wrong password and an unknown e-mail are indistinguishable.
///
/// # Returns
/// - 401 Unauthorized - Missing or invalid identity, bad credentials
/// - 403 Forbidden - Signed-in user lacks the permission, setup no longer available
/// - 400 Bad Request - Bad one-time code or reset token
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Usuário não autenticado.")
            }
            Self::InvalidRole(_, _) => (StatusCode::UNAUTHORIZED, INVALID_ROLE_MESSAGE),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "Você não tem permissão para realizar esta ação.",
            ),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "E-mail ou senha inválidos."),
            Self::InvalidCode => (StatusCode::BAD_REQUEST, "Código inválido ou expirado."),
            Self::InvalidResetToken => (
                StatusCode::BAD_REQUEST,
                "Link de redefinição inválido ou expirado.",
            ),
            Self::SetupUnavailable => (
                StatusCode::FORBIDDEN,
                "A configuração inicial não está disponível.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
