use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresInspector, RequiresManager, RequiresSignedIn};
use crate::client::route::{
    ContainerForm, Containers, Dashboard, Home, InspectionDetail, Login, MaintenanceExecution,
    NotFound, ResetPassword, ResponseDetail, Responses, Setup, Users, VehicleInspection,
    VesselInspection,
};
use crate::model::container::FormType;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/login?:redirect")]
    Login { redirect: String },

    #[route("/reset-password?:token")]
    ResetPassword { token: String },

    #[route("/setup?:code")]
    Setup { code: String },

    #[layout(RequiresSignedIn)]
    #[route("/")]
    Home {},

    #[route("/containers")]
    Containers {},

    #[route("/container-form?:container_id")]
    ContainerForm { container_id: String },
    #[end_layout]

    #[layout(RequiresInspector)]
    #[route("/execucao-manutencao?:container_id")]
    MaintenanceExecution { container_id: String },

    #[route("/inspecao-veicular?:container_id")]
    VehicleInspection { container_id: String },

    #[route("/inspecao-embarcacao?:container_id")]
    VesselInspection { container_id: String },
    #[end_layout]

    #[layout(RequiresManager)]
    #[route("/dashboard")]
    Dashboard {},

    #[route("/respostas")]
    Responses {},

    #[route("/respostas/:response_id")]
    ResponseDetail { response_id: i32 },

    #[route("/inspecoes/:inspection_id")]
    InspectionDetail { inspection_id: i32 },

    #[route("/usuarios")]
    Users {},
    #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Where to go after signing in: the `redirect` path when it names a page, the role's landing
/// page otherwise.
pub fn post_login_route(redirect: &str, landing_path: &str) -> Route {
    let requested = Some(redirect.trim())
        .filter(|path| path.starts_with('/') && !path.starts_with("/login"))
        .and_then(|path| path.parse::<Route>().ok())
        .filter(|route| !matches!(route, Route::NotFound { .. }));

    requested
        .or_else(|| landing_path.parse::<Route>().ok())
        .unwrap_or(Route::Home {})
}

/// Checklist page for a container of the given form type.
pub fn form_route(form_type: FormType, container_id: i32) -> Route {
    let container_id = container_id.to_string();
    match form_type {
        FormType::ContainerChecklist => Route::ContainerForm { container_id },
        FormType::MaintenanceExecution => Route::MaintenanceExecution { container_id },
        FormType::VehicleInspection => Route::VehicleInspection { container_id },
        FormType::VesselInspection => Route::VesselInspection { container_id },
    }
}

/// Parses the optional `container_id` query parameter of a form page.
pub fn parse_container_id(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follows_redirect_to_known_page() {
        assert_eq!(post_login_route("/usuarios", "/containers"), Route::Users {});
        assert_eq!(
            post_login_route("/container-form?container_id=4", "/containers"),
            Route::ContainerForm {
                container_id: "4".to_string()
            }
        );
    }

    #[test]
    fn falls_back_to_landing_page() {
        assert_eq!(post_login_route("", "/dashboard"), Route::Dashboard {});
        assert_eq!(post_login_route("/nada/aqui", "/containers"), Route::Containers {});
        assert_eq!(
            post_login_route("/login?redirect=/usuarios", "/containers"),
            Route::Containers {}
        );
        assert_eq!(post_login_route("https://evil.example", "/dashboard"), Route::Dashboard {});
    }

    #[test]
    fn form_route_matches_form_path() {
        for form_type in FormType::ALL {
            let path = form_route(form_type, 7).to_string();
            assert_eq!(path, format!("{}?container_id=7", form_type.path()));
        }
    }

    #[test]
    fn container_id_must_be_positive_number() {
        assert_eq!(parse_container_id("12"), Some(12));
        assert_eq!(parse_container_id(""), None);
        assert_eq!(parse_container_id("abc"), None);
        assert_eq!(parse_container_id("-3"), None);
    }
}
