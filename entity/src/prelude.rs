pub use super::container::Entity as Container;
pub use super::form_response::Entity as FormResponse;
pub use super::inspection::Entity as Inspection;
pub use super::user::Entity as User;
