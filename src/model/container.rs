use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::validation::{is_blank, non_blank, ValidationError};

/// The checklist attached to a container.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub enum FormType {
    #[serde(rename = "containerForm")]
    ContainerChecklist,
    #[serde(rename = "execucaoManutencao")]
    MaintenanceExecution,
    #[serde(rename = "inspecaoVeicular")]
    VehicleInspection,
    #[serde(rename = "inspecaoEmbarcacao")]
    VesselInspection,
}

impl FormType {
    pub const ALL: [FormType; 4] = [
        FormType::ContainerChecklist,
        FormType::MaintenanceExecution,
        FormType::VehicleInspection,
        FormType::VesselInspection,
    ];

    /// Inspection-style form types, stored in the `inspection` table.
    pub const INSPECTIONS: [FormType; 3] = [
        FormType::MaintenanceExecution,
        FormType::VehicleInspection,
        FormType::VesselInspection,
    ];

    /// Value stored in the database and used on the wire.
    pub fn slug(&self) -> &'static str {
        match self {
            FormType::ContainerChecklist => "containerForm",
            FormType::MaintenanceExecution => "execucaoManutencao",
            FormType::VehicleInspection => "inspecaoVeicular",
            FormType::VesselInspection => "inspecaoEmbarcacao",
        }
    }

    pub fn from_slug(slug: &str) -> Option<FormType> {
        FormType::ALL.into_iter().find(|f| f.slug() == slug)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormType::ContainerChecklist => "Checklist Container",
            FormType::MaintenanceExecution => "Plano de Manutenção",
            FormType::VehicleInspection => "Inspeção de Veículo",
            FormType::VesselInspection => "Inspeção de Embarcação",
        }
    }

    /// Client route of the page that fills out this form.
    pub fn path(&self) -> &'static str {
        match self {
            FormType::ContainerChecklist => "/container-form",
            FormType::MaintenanceExecution => "/execucao-manutencao",
            FormType::VehicleInspection => "/inspecao-veicular",
            FormType::VesselInspection => "/inspecao-embarcacao",
        }
    }

    pub fn is_inspection(&self) -> bool {
        !matches!(self, FormType::ContainerChecklist)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ContainerDto {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    pub form_type: FormType,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    /// Absolute link to the container's checklist page, also the QR code target.
    pub form_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateContainerDto {
    pub name: String,
    pub location: Option<String>,
    pub form_type: FormType,
}

impl CreateContainerDto {
    /// Checks the name and returns a copy with trimmed fields and a blank location dropped.
    pub fn validated(&self) -> Result<CreateContainerDto, ValidationError> {
        if is_blank(&self.name) {
            return Err(ValidationError::MissingContainerName);
        }

        Ok(CreateContainerDto {
            name: self.name.trim().to_string(),
            location: non_blank(self.location.as_deref()),
            form_type: self.form_type,
        })
    }
}
