//! Container domain model.

use chrono::{DateTime, Utc};
use url::Url;

use crate::{
    model::container::{ContainerDto, FormType},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    pub form_type: FormType,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl Container {
    /// Converts an entity model at the repository boundary.
    ///
    /// # Returns
    /// - `Err(AppError::InternalError)` - Stored form type is not a known slug
    pub fn from_entity(entity: entity::container::Model) -> Result<Self, AppError> {
        let form_type = FormType::from_slug(&entity.form_type).ok_or_else(|| {
            AppError::InternalError(format!(
                "Container {} has unknown form type '{}'",
                entity.id, entity.form_type
            ))
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            location: entity.location,
            form_type,
            created_by: entity.created_by,
            created_at: entity.created_at,
        })
    }

    /// Converts into the API DTO, attaching the checklist link built from `app_url`.
    pub fn into_dto(self, app_url: &str) -> ContainerDto {
        let form_url = form_url(app_url, self.form_type, self.id);

        ContainerDto {
            id: self.id,
            name: self.name,
            location: self.location,
            form_type: self.form_type,
            created_by: self.created_by,
            created_at: self.created_at,
            form_url,
        }
    }
}

/// Absolute URL of a container's checklist page: `<app_url><form path>?container_id=<id>`.
pub fn form_url(app_url: &str, form_type: FormType, container_id: i32) -> String {
    match Url::parse(app_url).and_then(|base| base.join(form_type.path())) {
        Ok(mut url) => {
            url.query_pairs_mut()
                .append_pair("container_id", &container_id.to_string());
            url.to_string()
        }
        Err(_) => format!(
            "{}{}?container_id={}",
            app_url.trim_end_matches('/'),
            form_type.path(),
            container_id
        ),
    }
}

#[derive(Debug, Clone)]
pub struct CreateContainerParam {
    pub name: String,
    pub location: Option<String>,
    pub form_type: FormType,
    pub created_by: String,
}
