use crate::{
    model::{role::Role, user::SetupDto, validation::ValidationError},
    server::{
        error::{auth::AuthError, AppError},
        service::{
            auth::AuthService,
            code::OneTimeCodeService,
            password::{hash_password, verify_password},
        },
    },
};
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

mod login_with_password;
mod password_reset;
mod setup;
mod verify_login_code;
