use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth::*, container::*, form_response::*, inspection::*, user::*},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "ContainerWatch API",
    description = "Container registry, checklist submissions and user administration"
))]
struct ApiDoc;

/// Builds every API route and serves the generated OpenAPI document through Swagger UI at
/// `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(login))
        .routes(routes!(request_login_code))
        .routes(routes!(verify_login_code))
        .routes(routes!(request_password_reset))
        .routes(routes!(confirm_password_reset))
        .routes(routes!(setup))
        .routes(routes!(logout))
        .routes(routes!(get_user))
        .routes(routes!(get_users, create_user))
        .routes(routes!(update_user_role))
        .routes(routes!(get_containers, create_container))
        .routes(routes!(get_container, delete_container))
        .routes(routes!(get_responses, create_response))
        .routes(routes!(get_response, delete_response))
        .routes(routes!(get_inspections, create_inspection))
        .routes(routes!(get_inspection, delete_inspection))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
