//! Maintenance execution, vehicle inspection and vessel inspection checklists.
//!
//! The three forms share one field set (see [`CreateInspectionDto`]) and differ only in their
//! labels and option lists, which are described by [`InspectionDefinition`].

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{
    container::FormType,
    validation::{is_blank, non_blank, ValidationError},
};

/// Earliest accepted verification year.
pub const MIN_VERIFICATION_YEAR: i32 = 2000;

pub const CORRECTIVE_ACTIONS: [&str; 4] = ["Corrigido", "Não corrigido", "Informado", "Não informado"];

const STATUS_OPTIONS: [&str; 3] = ["O - Operacional", "N/O - Não operacional", "Em uso"];

const MAINTENANCE_INSPECTION_TYPES: [&str; 7] = [
    "M1 (mensal)",
    "M3 (trimestral)",
    "M12 (anual)",
    "MPO",
    "Inspeção diária",
    "Inspeção semanal",
    "Outras",
];

const VESSEL_INSPECTION_TYPES: [&str; 7] = [
    "M1 (mensal)",
    "M3 (trimestral)",
    "M12 (Anual)",
    "MPO (manutenção pós operação)",
    "inspeção diária",
    "Inspeção semanal",
    "Outras",
];

const MAINTENANCE_ITEMS: [&str; 21] = [
    "Inspeção visual do equipamento",
    "Inspeção do nível de combustível",
    "Inspeção do nível de óleo lubrificante",
    "Inspeção das conexões",
    "Inspeção dos pinos e travas",
    "Inspeção das válvulas",
    "Inspeção das roldanas de movimentação",
    "Inspeção de vazamentos",
    "Inspeção dos pneus (carro e carretinha)",
    "Inspecao dos mangotes  e conexoes",
    "Troca de óleo",
    "Troca de filtro de óleo",
    "Troca de filtro de combustível",
    "Troca de velas",
    "Limpeza do tanque de combustível",
    "Abastecimento do equipamento",
    "Teste de funcionamento 20min (motores)",
    "Montagem e teste do conjunto bomba e recolhedores",
    "Lubrificação das partes fixa e moveis",
    "Teste de rodagem e calibração dos pneus (carretinha)",
    "Limpeza e guarda do equipamento",
];

const VEHICLE_ITEMS: [&str; 17] = [
    "Inspeção visual do veículo",
    "Inspeção do nível de combustível",
    "Inspeção do nível de óleo lubrificante",
    "Inspeção do Liquido de arrefecimento",
    "Inspeção do fluido de freio",
    "Inspeção da água do parabrisa",
    "Teste de funcionamento das luzes de sinalização",
    "Testes do Limpador de parabrisa",
    "Inspeção de vazamentos",
    "Inspeção dos pneus (estado)",
    "Inspeção dos instrumentos do painel",
    "Teste de rodagem e calibração dos pneus",
    "Troca de óleo (vide PM ou recomendado pelo fabricante)",
    "Troca de filtro de óleo (vide PM)",
    "Troca de filtro de combustível (vide PM)",
    "Troca do filtro de ar (vide PM)",
    "Limpeza do veículo",
];

const VESSEL_ITEMS: [&str; 18] = [
    "Inspeção visual do barco (estado geral)",
    "Inspeção do nível de combustível",
    "Inspeção do hélice (motor de popa)",
    "Inspeção do nível de óleo lubrificante",
    "Inspeção do Liquido de arrefecimento",
    "Teste de funcionamento das luzes de navegação",
    "Teste bomba de porão",
    "Teste de leme",
    "Inspeção de vazamentos",
    "Inspeção de itens de segurança (Palamenta)",
    "Inspeção dos instrumentos do painel",
    "Inspeção da estrutura de guarda corpo",
    "Limpeza do casco",
    "Adoçamento do motor (motor de popa)",
    "Troca de vela (vide PM ou indicado pelo fabricante)",
    "Limpeza do tanque de combustível",
    "Teste de funcionamento 20 min",
    "Teste de navegação 40 min (HDG 25)",
];

/// Labels and option lists of one inspection-style form.
#[derive(Debug, PartialEq, Eq)]
pub struct InspectionDefinition {
    pub title: &'static str,
    pub subject_label: &'static str,
    pub status_options: &'static [&'static str],
    /// Empty when the inspection type is typed freely.
    pub inspection_types: &'static [&'static str],
    pub items: &'static [&'static str],
}

const MAINTENANCE: InspectionDefinition = InspectionDefinition {
    title: "Execução do Plano de Manutenção",
    subject_label: "Equipamento",
    status_options: &STATUS_OPTIONS,
    inspection_types: &MAINTENANCE_INSPECTION_TYPES,
    items: &MAINTENANCE_ITEMS,
};

const VEHICLE: InspectionDefinition = InspectionDefinition {
    title: "Inspeção Diária de Veículos",
    subject_label: "Identificação do Veículo",
    status_options: &STATUS_OPTIONS,
    inspection_types: &[],
    items: &VEHICLE_ITEMS,
};

const VESSEL: InspectionDefinition = InspectionDefinition {
    title: "Inspeção Diária de Embarcação",
    subject_label: "Identificação da embarcação",
    status_options: &STATUS_OPTIONS,
    inspection_types: &VESSEL_INSPECTION_TYPES,
    items: &VESSEL_ITEMS,
};

impl FormType {
    /// Definition of an inspection-style form, `None` for the container checklist.
    pub fn inspection_definition(&self) -> Option<&'static InspectionDefinition> {
        match self {
            FormType::ContainerChecklist => None,
            FormType::MaintenanceExecution => Some(&MAINTENANCE),
            FormType::VehicleInspection => Some(&VEHICLE),
            FormType::VesselInspection => Some(&VESSEL),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateInspectionDto {
    pub form_type: FormType,
    pub container_id: Option<i32>,
    pub responsible: String,
    /// `YYYY-MM-DD` as produced by a date input.
    pub verification_date: String,
    pub subject: String,
    pub status: String,
    pub damage: bool,
    pub damage_type: Option<String>,
    pub corrective_action: Option<String>,
    pub inspection_type: String,
    pub items: Vec<String>,
    pub notes: Option<String>,
}

/// An inspection that passed validation, with its fields trimmed and the date parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidInspection {
    pub form_type: FormType,
    pub container_id: Option<i32>,
    pub responsible: String,
    pub verification_date: NaiveDate,
    pub subject: String,
    pub status: String,
    pub damage: bool,
    pub damage_type: Option<String>,
    pub corrective_action: Option<String>,
    pub inspection_type: String,
    pub items: Vec<String>,
    pub notes: Option<String>,
}

/// Parses a `YYYY-MM-DD` date and checks its year lies in `[2000, today.year() + 1]`.
pub fn parse_verification_date(value: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidVerificationDate)?;

    if date.year() < MIN_VERIFICATION_YEAR || date.year() > today.year() + 1 {
        return Err(ValidationError::InvalidVerificationDate);
    }

    Ok(date)
}

impl CreateInspectionDto {
    /// Runs every check in order: form type, required fields, date range, damage details.
    ///
    /// Damage details are dropped when no damage was reported.
    pub fn validate(&self, today: NaiveDate) -> Result<ValidInspection, ValidationError> {
        if !self.form_type.is_inspection() {
            return Err(ValidationError::WrongFormType);
        }

        let required = [
            &self.responsible,
            &self.verification_date,
            &self.subject,
            &self.status,
            &self.inspection_type,
        ];
        if required.iter().any(|field| is_blank(field)) {
            return Err(ValidationError::MissingRequiredFields);
        }

        let verification_date = parse_verification_date(&self.verification_date, today)?;

        let (damage_type, corrective_action) = if self.damage {
            let damage_type = non_blank(self.damage_type.as_deref());
            let corrective_action = non_blank(self.corrective_action.as_deref());
            if damage_type.is_none() || corrective_action.is_none() {
                return Err(ValidationError::MissingDamageDetails);
            }
            (damage_type, corrective_action)
        } else {
            (None, None)
        };

        Ok(ValidInspection {
            form_type: self.form_type,
            container_id: self.container_id,
            responsible: self.responsible.trim().to_string(),
            verification_date,
            subject: self.subject.trim().to_string(),
            status: self.status.trim().to_string(),
            damage: self.damage,
            damage_type,
            corrective_action,
            inspection_type: self.inspection_type.trim().to_string(),
            items: self.items.clone(),
            notes: non_blank(self.notes.as_deref()),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct InspectionDto {
    pub id: i32,
    pub form_type: FormType,
    pub container_id: Option<i32>,
    pub responsible: String,
    pub verification_date: NaiveDate,
    pub subject: String,
    pub status: String,
    pub damage: bool,
    pub damage_type: Option<String>,
    pub corrective_action: Option<String>,
    pub inspection_type: String,
    pub items: Vec<String>,
    pub notes: Option<String>,
    pub submitted_by: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Editable state of an inspection page.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct InspectionForm {
    pub responsible: String,
    pub verification_date: String,
    pub subject: String,
    pub status: String,
    pub damage: bool,
    pub damage_type: String,
    pub corrective_action: String,
    pub inspection_type: String,
    pub items: Vec<String>,
    pub notes: String,
}

impl InspectionForm {
    /// Blank form dated today with the responsible party prefilled.
    pub fn new(responsible: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            responsible: responsible.into(),
            verification_date: today.format("%Y-%m-%d").to_string(),
            ..Default::default()
        }
    }

    /// Adds the item if missing, removes it otherwise.
    pub fn toggle_item(&mut self, item: &str) {
        if let Some(pos) = self.items.iter().position(|i| i == item) {
            self.items.remove(pos);
        } else {
            self.items.push(item.to_string());
        }
    }

    /// Clears every field except the responsible party and re-dates the form to today.
    pub fn reset_keeping_responsible(&mut self, today: NaiveDate) {
        *self = Self::new(std::mem::take(&mut self.responsible), today);
    }

    pub fn to_dto(&self, form_type: FormType, container_id: Option<i32>) -> CreateInspectionDto {
        CreateInspectionDto {
            form_type,
            container_id,
            responsible: self.responsible.clone(),
            verification_date: self.verification_date.clone(),
            subject: self.subject.clone(),
            status: self.status.clone(),
            damage: self.damage,
            damage_type: Some(self.damage_type.clone()),
            corrective_action: Some(self.corrective_action.clone()),
            inspection_type: self.inspection_type.clone(),
            items: self.items.clone(),
            notes: Some(self.notes.clone()),
        }
    }
}
