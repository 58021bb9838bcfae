use crate::{
    model::container::FormType,
    server::{
        data::container::ContainerRepository, error::AppError,
        model::container::CreateContainerParam,
    },
};
use sea_orm::EntityTrait;
use test_utils::{
    builder::TestBuilder,
    factory::{container::ContainerFactory, helpers::create_container_with_records},
};

mod create;
mod delete;
mod get_all;
