use crate::{
    model::role::Role,
    server::{
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, auth::Permission, session::AuthSession},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod require;
