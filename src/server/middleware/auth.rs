//! Role-based access guard for API handlers.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::role::Role,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::user::SessionUser,
    },
};

/// Actions a handler can require before running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Create or delete containers.
    ManageContainers,
    /// Read checklist responses and inspections.
    ViewResponses,
    /// Delete checklist responses and inspections.
    ManageResponses,
    /// Submit checklist answers or an inspection.
    SubmitChecklist,
    /// Submit an auditor comment on a container.
    SubmitAuditorComment,
    /// List users, create accounts and change roles.
    ManageUsers,
}

impl Permission {
    pub fn granted_to(self, role: Role) -> bool {
        match self {
            Permission::ManageContainers => role.can_manage_containers(),
            Permission::ViewResponses | Permission::ManageResponses => role.can_manage_responses(),
            Permission::SubmitChecklist => role.can_submit_checklist(),
            Permission::SubmitAuditorComment => role.can_submit_auditor_comment(),
            Permission::ManageUsers => role.can_manage_users(),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Permission::ManageContainers => "manage containers",
            Permission::ViewResponses => "view responses",
            Permission::ManageResponses => "manage responses",
            Permission::SubmitChecklist => "submit a checklist",
            Permission::SubmitAuditorComment => "submit an auditor comment",
            Permission::ManageUsers => "manage users",
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the signed-in user and checks every permission.
    ///
    /// An empty permission list only requires a signed-in user with a recognised role.
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - Signed-in user holding all permissions
    /// - `Err(AuthError::UserNotInSession)` - No user id in session
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user
    /// - `Err(AuthError::InvalidRole)` - Stored role is not recognised
    /// - `Err(AuthError::AccessDenied)` - The role lacks one of the permissions
    pub async fn require(&self, permissions: &[Permission]) -> Result<SessionUser, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let stored_role = user.role.clone();
        let Some(user) = user.into_session_user() else {
            return Err(AuthError::InvalidRole(user_id, stored_role).into());
        };

        for permission in permissions {
            if !permission.granted_to(user.role) {
                return Err(AuthError::AccessDenied(
                    user_id,
                    format!(
                        "{} role may not {}",
                        user.role.as_str(),
                        permission.describe()
                    ),
                )
                .into());
            }
        }

        Ok(user)
    }
}
