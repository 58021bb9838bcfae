use crate::{
    model::{
        container::{CreateContainerDto, FormType},
        role::Role,
        validation::ValidationError,
    },
    server::{error::AppError, model::user::SessionUser, service::container::ContainerService},
};
use test_utils::builder::TestBuilder;

mod create;
mod delete;
