use chrono::NaiveDate;

use crate::{
    model::{
        container::FormType, inspection::CreateInspectionDto, role::Role,
        validation::ValidationError,
    },
    server::{error::AppError, model::user::SessionUser, service::inspection::InspectionService},
};
use test_utils::{builder::TestBuilder, factory::container::ContainerFactory};

mod submit;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
}

fn technician() -> SessionUser {
    SessionUser {
        id: 2,
        email: "tecnico@example.com".to_string(),
        name: "João Silva".to_string(),
        role: Role::Tecnico,
    }
}

fn vessel_inspection(container_id: Option<i32>) -> CreateInspectionDto {
    CreateInspectionDto {
        form_type: FormType::VesselInspection,
        container_id,
        responsible: "João Silva".to_string(),
        verification_date: "2026-10-14".to_string(),
        subject: "Balsa Rio Negro".to_string(),
        status: "Em operação".to_string(),
        damage: false,
        damage_type: Some("ignorado".to_string()),
        corrective_action: None,
        inspection_type: "Mensal".to_string(),
        items: vec!["Casco".to_string()],
        notes: Some("  ".to_string()),
    }
}
