use crate::{
    model::{container::FormType, inspection::ValidInspection, role::Role},
    server::{
        data::inspection::InspectionRepository, error::AppError,
        model::inspection::CreateInspectionParam,
    },
};
use chrono::{Duration, NaiveDate, Utc};
use test_utils::{builder::TestBuilder, factory::inspection::InspectionFactory};

mod create;
mod delete;
mod find_by_id;
mod get_all;

fn vehicle_inspection() -> ValidInspection {
    ValidInspection {
        form_type: FormType::VehicleInspection,
        container_id: None,
        responsible: "João Silva".to_string(),
        verification_date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
        subject: "ABC-1234".to_string(),
        status: "Em operação".to_string(),
        damage: true,
        damage_type: Some("Pneu furado".to_string()),
        corrective_action: Some("Corrigido".to_string()),
        inspection_type: "Diária".to_string(),
        items: vec!["Pneus".to_string(), "Faróis".to_string()],
        notes: None,
    }
}
