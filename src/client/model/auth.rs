use crate::model::{role::Role, user::UserDto};

/// Signed-in user shared through a `Signal<UserState>` context.
///
/// `fetched` stays false until the first `/api/auth/user` call settles, so protected layouts
/// can tell "still loading" apart from "signed out".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    pub fetched: bool,
}

impl UserState {
    pub fn signed_in(user: UserDto) -> Self {
        Self {
            user: Some(user),
            fetched: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            fetched: true,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// True when signed in with one of `roles`.
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.role().is_some_and(|role| roles.contains(&role))
    }
}
