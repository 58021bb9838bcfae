use crate::{
    model::{role::Role, user::CreateUserDto},
    server::{error::AppError, model::user::SessionUser, service::user::UserService},
};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod create;
mod update_role;

fn manager(id: i32) -> SessionUser {
    SessionUser {
        id,
        email: "gerente@example.com".to_string(),
        name: "Gerente".to_string(),
        role: Role::Gerente,
    }
}
