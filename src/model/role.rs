//! User roles and what each of them may do.
//!
//! Roles are stored as plain strings. Anything that does not parse into a [`Role`] is treated
//! exactly like a missing identity, both by the client layout and by the server guard.

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Message shown when a stored role is missing or not one of the recognised values.
pub const INVALID_ROLE_MESSAGE: &str = "Acesso não autorizado. Role inválida ou ausente.";

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Manager with full access.
    Gerente,
    /// Technician, fills out checklists.
    Tecnico,
    /// Auditor, attaches comments to container checklists.
    Auditor,
}

/// Where a checklist page sends the user after a successful submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterSubmit {
    /// Navigate to the responses list.
    ShowResponses,
    /// Stay on the page with a blank form (responsible name kept).
    ResetForm,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Gerente, Role::Tecnico, Role::Auditor];

    /// Parses a stored role string. Only the exact lowercase literals are accepted.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "gerente" => Some(Role::Gerente),
            "tecnico" => Some(Role::Tecnico),
            "auditor" => Some(Role::Auditor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Gerente => "gerente",
            Role::Tecnico => "tecnico",
            Role::Auditor => "auditor",
        }
    }

    /// Human readable label used in tables and badges.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Gerente => "Gerente",
            Role::Tecnico => "Técnico",
            Role::Auditor => "Auditor",
        }
    }

    /// Path of the page a freshly signed-in user lands on.
    pub fn landing_path(&self) -> &'static str {
        match self {
            Role::Gerente => "/dashboard",
            Role::Tecnico | Role::Auditor => "/containers",
        }
    }

    pub fn can_manage_containers(&self) -> bool {
        matches!(self, Role::Gerente)
    }

    /// Listing, viewing and deleting submitted records.
    pub fn can_manage_responses(&self) -> bool {
        matches!(self, Role::Gerente)
    }

    pub fn can_submit_checklist(&self) -> bool {
        matches!(self, Role::Gerente | Role::Tecnico)
    }

    pub fn can_submit_auditor_comment(&self) -> bool {
        matches!(self, Role::Gerente | Role::Auditor)
    }

    pub fn can_manage_users(&self) -> bool {
        matches!(self, Role::Gerente)
    }

    pub fn after_submit(&self) -> AfterSubmit {
        match self {
            Role::Gerente => AfterSubmit::ShowResponses,
            Role::Tecnico | Role::Auditor => AfterSubmit::ResetForm,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_exact_literals() {
        assert_eq!(Role::parse("gerente"), Some(Role::Gerente));
        assert_eq!(Role::parse("tecnico"), Some(Role::Tecnico));
        assert_eq!(Role::parse("auditor"), Some(Role::Auditor));

        assert_eq!(Role::parse("Gerente"), None);
        assert_eq!(Role::parse("técnico"), None);
        assert_eq!(Role::parse(" auditor"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn round_trips_through_as_str() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn manager_has_every_permission() {
        let role = Role::Gerente;
        assert!(role.can_manage_containers());
        assert!(role.can_manage_responses());
        assert!(role.can_submit_checklist());
        assert!(role.can_submit_auditor_comment());
        assert!(role.can_manage_users());
    }

    #[test]
    fn technician_and_auditor_split_submission_rights() {
        assert!(Role::Tecnico.can_submit_checklist());
        assert!(!Role::Tecnico.can_submit_auditor_comment());
        assert!(!Role::Auditor.can_submit_checklist());
        assert!(Role::Auditor.can_submit_auditor_comment());

        for role in [Role::Tecnico, Role::Auditor] {
            assert!(!role.can_manage_containers());
            assert!(!role.can_manage_responses());
            assert!(!role.can_manage_users());
        }
    }

    #[test]
    fn landing_and_after_submit_depend_on_role() {
        assert_eq!(Role::Gerente.landing_path(), "/dashboard");
        assert_eq!(Role::Tecnico.landing_path(), "/containers");
        assert_eq!(Role::Gerente.after_submit(), AfterSubmit::ShowResponses);
        assert_eq!(Role::Tecnico.after_submit(), AfterSubmit::ResetForm);
        assert_eq!(Role::Auditor.after_submit(), AfterSubmit::ResetForm);
    }

    #[test]
    fn serializes_as_lowercase_literal() {
        let json = serde_json::to_string(&Role::Tecnico).unwrap();
        assert_eq!(json, "\"tecnico\"");
    }
}
