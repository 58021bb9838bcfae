//! Sign-in flows: password, one-time code, password reset and first-run setup.
//!
//! Every flow ends in a [`SessionUser`]; storing it in the session is left to the controller.
//! Requests that only trigger a code (`request_login_code`, `request_password_reset`) succeed
//! for unknown e-mails too so callers cannot probe which accounts exist. Codes are delivered
//! through the server log.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        role::Role,
        user::{normalize_email, validate_password, SetupDto},
        validation::{non_blank, ValidationError},
    },
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParam, SessionUser, User},
        service::{
            code::OneTimeCodeService,
            password::{hash_password, verify_password},
        },
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    codes: &'a OneTimeCodeService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, codes: &'a OneTimeCodeService) -> Self {
        Self { db, codes }
    }

    /// Signs in with e-mail and password.
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - Credentials match and the role is recognised
    /// - `Err(AuthError::InvalidCredentials)` - Unknown e-mail, no password set or wrong password
    /// - `Err(AuthError::InvalidRole)` - Credentials match but the stored role is not recognised
    pub async fn login_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionUser, AppError> {
        let Ok(email) = normalize_email(email) else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let Some(password_hash) = user.password_hash.as_deref() else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        signed_in(user)
    }

    /// Issues a six-digit login code for the account with this e-mail.
    ///
    /// # Returns
    /// - `Ok(())` - Code issued, or no account uses the e-mail
    /// - `Err(AppError::Validation)` - The e-mail is malformed
    pub async fn request_login_code(&self, email: &str) -> Result<(), AppError> {
        let email = normalize_email(email)?;

        if UserRepository::new(self.db)
            .find_by_email(&email)
            .await?
            .is_none()
        {
            tracing::debug!("Login code requested for unknown e-mail {}", email);
            return Ok(());
        }

        let code = self.codes.issue_login_code(&email).await;
        tracing::info!("Login code for {}: {}", email, code);

        Ok(())
    }

    /// Signs in with a previously issued login code.
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - Code matched and was consumed
    /// - `Err(AuthError::InvalidCode)` - Wrong, expired or already used code
    /// - `Err(AuthError::InvalidRole)` - The account's stored role is not recognised
    pub async fn verify_login_code(&self, email: &str, code: &str) -> Result<SessionUser, AppError> {
        let Ok(email) = normalize_email(email) else {
            return Err(AuthError::InvalidCode.into());
        };

        if !self.codes.consume_login_code(&email, code.trim()).await {
            return Err(AuthError::InvalidCode.into());
        }

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AuthError::InvalidCode.into());
        };

        signed_in(user)
    }

    /// Issues a password reset token and logs the reset link.
    ///
    /// # Arguments
    /// - `email` - Account e-mail
    /// - `app_url` - Public base URL used to build the link
    pub async fn request_password_reset(&self, email: &str, app_url: &str) -> Result<(), AppError> {
        let email = normalize_email(email)?;

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            tracing::debug!("Password reset requested for unknown e-mail {}", email);
            return Ok(());
        };

        let token = self.codes.issue_reset_token(user.id).await;
        tracing::info!(
            "Password reset link for {}: {}/reset-password?token={}",
            email,
            app_url,
            token
        );

        Ok(())
    }

    /// Sets a new password using a reset token.
    ///
    /// The password is checked before the token is consumed, so a too-short password does not
    /// burn the token.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(AppError::Validation)` - Password too short
    /// - `Err(AuthError::InvalidResetToken)` - Wrong, expired or already used token
    pub async fn confirm_password_reset(&self, token: &str, password: &str) -> Result<(), AppError> {
        validate_password(password)?;

        let Some(user_id) = self.codes.consume_reset_token(token.trim()).await else {
            return Err(AuthError::InvalidResetToken.into());
        };

        let password_hash = hash_password(password).await?;
        if !UserRepository::new(self.db)
            .update_password_hash(user_id, password_hash)
            .await?
        {
            return Err(AuthError::InvalidResetToken.into());
        }

        tracing::info!("Password reset for user {}", user_id);

        Ok(())
    }

    /// Creates the first manager account.
    ///
    /// Only available while no manager exists, and only with the setup code logged at startup.
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - Manager created
    /// - `Err(AuthError::SetupUnavailable)` - A manager exists or the setup code is wrong
    /// - `Err(AppError::Validation)` - Malformed e-mail, blank name or short password
    /// - `Err(AppError::BadRequest)` - The e-mail is already used by another account
    pub async fn setup(&self, payload: SetupDto) -> Result<SessionUser, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.manager_exists().await? {
            return Err(AuthError::SetupUnavailable.into());
        }

        let email = normalize_email(&payload.email)?;
        let name = non_blank(Some(payload.name.as_str())).ok_or(ValidationError::MissingRequiredFields)?;
        validate_password(&payload.password)?;

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest(
                "Já existe um usuário com este e-mail.".to_string(),
            ));
        }

        // Consumed only once every other check has passed
        if !self
            .codes
            .validate_and_consume_setup_code(payload.code.trim())
            .await
        {
            return Err(AuthError::SetupUnavailable.into());
        }

        let password_hash = hash_password(&payload.password).await?;
        let user = user_repo
            .create(CreateUserParam {
                email,
                name,
                role: Role::Gerente,
                password_hash: Some(password_hash),
            })
            .await?;

        tracing::info!("First manager account created: {}", user.email);

        signed_in(user)
    }

    /// Looks up the signed-in user for the current-user endpoint.
    ///
    /// # Returns
    /// - `Ok(Some(SessionUser))` - User exists with a recognised role
    /// - `Ok(None)` - User deleted or role not recognised
    pub async fn current_user(&self, user_id: i32) -> Result<Option<SessionUser>, AppError> {
        let user = UserRepository::new(self.db).find_by_id(user_id).await?;

        Ok(user.and_then(User::into_session_user))
    }
}

fn signed_in(user: User) -> Result<SessionUser, AppError> {
    let user_id = user.id;
    let stored_role = user.role.clone();

    user.into_session_user()
        .ok_or_else(|| AuthError::InvalidRole(user_id, stored_role).into())
}
