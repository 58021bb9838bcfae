use std::collections::BTreeMap;

use crate::{
    model::{checklist::ResponseContent, role::Role},
    server::{
        data::form_response::FormResponseRepository, error::AppError,
        model::form_response::CreateFormResponseParam,
    },
};
use chrono::{Duration, Utc};
use serde_json::json;
use test_utils::{
    builder::TestBuilder,
    factory::{container::create_container, form_response::FormResponseFactory},
};

mod create;
mod delete;
mod get_all;
