//! User administration for managers.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        role::Role,
        user::{normalize_email, validate_password, CreateUserDto},
        validation::{non_blank, ValidationError},
    },
    server::{
        data::user::UserRepository,
        error::AppError,
        model::user::{CreateUserParam, SessionUser, User},
        service::password::hash_password,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every account for the user administration page.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users
    /// - `Err(AppError::DbErr)` - Database error during the query
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Creates an account.
    ///
    /// Without a password the user can only sign in with a one-time code until they reset it.
    ///
    /// # Returns
    /// - `Ok(User)` - Account created
    /// - `Err(AppError::Validation)` - Malformed e-mail, blank name or short password
    /// - `Err(AppError::BadRequest)` - E-mail already in use
    pub async fn create(&self, payload: CreateUserDto) -> Result<User, AppError> {
        let email = normalize_email(&payload.email)?;
        let name = non_blank(Some(payload.name.as_str()))
            .ok_or(ValidationError::MissingRequiredFields)?;

        let password_hash = match non_blank(payload.password.as_deref()) {
            Some(password) => {
                validate_password(&password)?;
                Some(hash_password(&password).await?)
            }
            None => None,
        };

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest(
                "Já existe um usuário com este e-mail.".to_string(),
            ));
        }

        let user = user_repo
            .create(CreateUserParam {
                email,
                name,
                role: payload.role,
                password_hash,
            })
            .await?;

        tracing::info!("User {} created with role {}", user.email, user.role);

        Ok(user)
    }

    /// Changes a user's role.
    ///
    /// A manager cannot remove their own manager role, so the last manager cannot lock
    /// everyone out by accident.
    ///
    /// # Returns
    /// - `Ok(User)` - Role updated
    /// - `Err(AppError::BadRequest)` - Manager tried to demote themselves
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn update_role(
        &self,
        actor: &SessionUser,
        user_id: i32,
        role: Role,
    ) -> Result<User, AppError> {
        if actor.id == user_id && role != Role::Gerente {
            return Err(AppError::BadRequest(
                "Você não pode remover seu próprio acesso de gerente.".to_string(),
            ));
        }

        let Some(user) = UserRepository::new(self.db)
            .update_role(user_id, role)
            .await?
        else {
            return Err(AppError::NotFound("Usuário não encontrado.".to_string()));
        };

        tracing::info!("User {} role set to {} by {}", user.id, role, actor.email);

        Ok(user)
    }
}
