use std::collections::BTreeMap;

use crate::{
    model::{
        checklist::{CreateFormResponseDto, ResponseContent},
        role::Role,
        validation::ValidationError,
    },
    server::{
        error::AppError, model::user::SessionUser, service::form_response::FormResponseService,
    },
};
use test_utils::{
    builder::TestBuilder,
    factory::container::{create_container, ContainerFactory},
};

mod submit;

fn technician() -> SessionUser {
    SessionUser {
        id: 2,
        email: "tecnico@example.com".to_string(),
        name: "Técnico".to_string(),
        role: Role::Tecnico,
    }
}
