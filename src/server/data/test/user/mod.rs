use crate::{
    model::role::Role,
    server::{data::user::UserRepository, model::user::CreateUserParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod create;
mod find_by_email;
mod get_all;
mod manager_exists;
mod update_password_hash;
mod update_role;
