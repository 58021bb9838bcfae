//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::{
    role::Role,
    user::{UserDto, UserListItemDto},
};

/// Stored user account.
///
/// `role` is kept as the raw stored string; use [`User::role`] to interpret it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: String,
    pub password_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role: entity.role,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
        }
    }

    /// Parsed role, `None` when the stored value is not recognised.
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Converts to the identity of a signed-in user, `None` when the role is invalid.
    pub fn into_session_user(self) -> Option<SessionUser> {
        let role = self.role()?;

        Some(SessionUser {
            id: self.id,
            email: self.email,
            name: self.name,
            role,
        })
    }

    pub fn into_list_item(self) -> UserListItemDto {
        UserListItemDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
            has_password: self.password_hash.is_some(),
            created_at: self.created_at,
        }
    }
}

/// A user with a recognised role, as returned by the auth guard.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUser {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl SessionUser {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
        }
    }
}

/// Parameters for inserting a user. The e-mail must already be normalised.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub name: String,
    pub role: Role,
    pub password_hash: Option<String>,
}
