mod container_form;
mod containers;
mod dashboard;
mod home;
mod inspection_detail;
mod inspection_form;
mod login;
mod not_found;
mod reset_password;
mod response_detail;
mod responses;
mod setup;
mod users;

pub use container_form::ContainerForm;
pub use containers::Containers;
pub use dashboard::Dashboard;
pub use home::Home;
pub use inspection_detail::InspectionDetail;
pub use inspection_form::{MaintenanceExecution, VehicleInspection, VesselInspection};
pub use login::Login;
pub use not_found::NotFound;
pub use reset_password::ResetPassword;
pub use response_detail::ResponseDetail;
pub use responses::Responses;
pub use setup::Setup;
pub use users::Users;
