//! SeaORM entities for the ContainerWatch database.

pub mod prelude;

pub mod container;
pub mod form_response;
pub mod inspection;
pub mod user;
